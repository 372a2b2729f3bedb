use tokio::sync::watch;

use crate::domain::catalog::state::{CatalogAction, CatalogState};

/// Owned container for the catalog state.
///
/// Every dispatch applies one transition atomically and notifies the
/// receivers handed out by [`CatalogStore::subscribe`]. Concurrent
/// operations are not ordered: the last dispatch wins.
pub struct CatalogStore {
    sender: watch::Sender<CatalogState>,
}

impl CatalogStore {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(CatalogState::default());
        Self { sender }
    }

    pub fn dispatch(&self, action: CatalogAction) {
        self.sender.send_modify(|state| {
            let current = std::mem::take(state);
            *state = current.reduce(action);
        });
    }

    pub fn snapshot(&self) -> CatalogState {
        self.sender.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<CatalogState> {
        self.sender.subscribe()
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}
