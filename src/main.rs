use clap::Parser;
use tracing_subscriber::EnvFilter;

use investor_profile::api::{self, Cli};
use investor_profile::core::Catalog;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let catalog = match Catalog::builtin() {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Catalog error: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = api::run(cli, catalog).await {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
