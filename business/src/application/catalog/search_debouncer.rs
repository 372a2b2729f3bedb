use tokio::sync::mpsc;
use tokio::time::{Duration, Instant};

pub const DEFAULT_QUIET_PERIOD_MS: u64 = 300;

/// Coalesces search keystrokes and commits only the last text once input
/// has been quiet for the configured period.
///
/// Each new text cancels and restarts the pending timer. Dropping the
/// debouncer discards any text that has not been committed yet.
pub struct SearchDebouncer {
    input: mpsc::UnboundedSender<String>,
}

impl SearchDebouncer {
    /// Starts the debouncing task; committed queries arrive on the receiver.
    pub fn spawn(quiet_period: Duration) -> (Self, mpsc::UnboundedReceiver<String>) {
        let (input, input_rx) = mpsc::unbounded_channel();
        let (output, output_rx) = mpsc::unbounded_channel();
        tokio::spawn(run(input_rx, output, quiet_period));
        (Self { input }, output_rx)
    }

    pub fn push(&self, text: impl Into<String>) {
        // Send only fails once the task is gone, i.e. nobody is listening.
        let _ = self.input.send(text.into());
    }
}

async fn run(
    mut input: mpsc::UnboundedReceiver<String>,
    output: mpsc::UnboundedSender<String>,
    quiet_period: Duration,
) {
    let mut pending: Option<String> = None;
    let mut deadline: Option<Instant> = None;

    loop {
        let sleep_until = deadline.unwrap_or_else(|| Instant::now() + quiet_period);

        tokio::select! {
            received = input.recv() => match received {
                Some(text) => {
                    pending = Some(text);
                    deadline = Some(Instant::now() + quiet_period);
                }
                None => break,
            },

            _ = tokio::time::sleep_until(sleep_until), if deadline.is_some() => {
                deadline = None;
                if let Some(text) = pending.take()
                    && output.send(text).is_err()
                {
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn should_commit_only_last_text_after_quiet_period() {
        let (debouncer, mut committed) = SearchDebouncer::spawn(Duration::from_millis(300));

        debouncer.push("l");
        tokio::time::sleep(Duration::from_millis(100)).await;
        debouncer.push("la");
        tokio::time::sleep(Duration::from_millis(100)).await;
        debouncer.push("lap");
        tokio::time::sleep(Duration::from_millis(100)).await;

        assert!(committed.try_recv().is_err());

        assert_eq!(committed.recv().await.as_deref(), Some("lap"));

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(committed.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn should_commit_each_text_separated_by_quiet_period() {
        let (debouncer, mut committed) = SearchDebouncer::spawn(Duration::from_millis(300));

        debouncer.push("shirt");
        assert_eq!(committed.recv().await.as_deref(), Some("shirt"));

        debouncer.push("jacket");
        assert_eq!(committed.recv().await.as_deref(), Some("jacket"));
    }

    #[tokio::test(start_paused = true)]
    async fn should_discard_pending_text_when_dropped() {
        let (debouncer, mut committed) = SearchDebouncer::spawn(Duration::from_millis(300));

        debouncer.push("never committed");
        drop(debouncer);

        assert_eq!(committed.recv().await, None);
    }
}
