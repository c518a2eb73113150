//! Calendar holiday service - serves cached public holidays over HTTP
//!
//! Aggregates public holidays from several countries for the calendar grid,
//! caching upstream responses in memory.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use calendar_holidays::cli::Cli;
use calendar_holidays::server::serve;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    serve(cli.into_opts()).await?;

    Ok(())
}
