use clap::Parser;

/// Browse and edit the product catalog from a terminal.
#[derive(Debug, Parser)]
#[command(name = "catalog-cli", version)]
pub struct Cli {
    /// Base URL of the catalog service (overrides CATALOG_API_URL)
    #[arg(long)]
    pub api_url: Option<String>,

    /// Products shown per page (overrides CATALOG_PAGE_SIZE)
    #[arg(long)]
    pub page_size: Option<usize>,
}
