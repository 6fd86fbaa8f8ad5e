use std::env;
use std::io;

use clap::Parser;
use storefront_cli::args::{Cli, Command};
use storefront_cli::commands::{self, Settings};
use storefront_core::config::Config;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load().map_err(|e| {
        eprintln!("Error loading config: {}", e);
        e
    })?;
    let cwd = env::current_dir()?;
    let mut stdout = io::stdout().lock();

    match cli.command {
        Command::Search(args) => {
            let settings = Settings::resolve(&config, &args.catalog, &cwd)?;
            commands::search(settings, &args, &mut stdout)
        }
        Command::Facets(args) => {
            let settings = Settings::resolve(&config, &args.catalog, &cwd)?;
            commands::facets(settings, &args, &mut stdout)
        }
        Command::Interactive(args) => {
            let settings = Settings::resolve(&config, &args, &cwd)?;
            tracing::debug!(catalog = %settings.catalog.display(), "starting interactive session");
            commands::interactive(settings, BufReader::new(tokio::io::stdin()), &mut stdout).await
        }
    }
}
