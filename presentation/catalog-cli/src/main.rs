use clap::Parser;
use dotenvy::dotenv;

mod cli;
mod config;
mod console;
mod setup;

use cli::Cli;
use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, session::Session};

/// Catalog console entry point
///
/// Initializes logging and configuration, wires dependencies, and runs the
/// interactive session.
/// - config/: Application configuration (catalog service, view)
/// - setup/: Dependency injection and the session loop
/// - console/: Command parsing, rendering and error messages
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter; stdout is kept for the console
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let cli = Cli::parse();
    let config = AppConfig::from_env().with_overrides(&cli);

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config.catalog_api);

    // 5. Run session
    Session::run(config, container).await?;

    Ok(())
}
