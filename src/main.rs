/// Command-line entry point: fetch a rover manifest or one sol of photos
use clap::Parser;
use mars_rover::{AppConfig, HttpLoader, MarsRoverClient};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Debug, Parser)]
#[command(name = "mars_rover", about = "Query the Mars rover photo API")]
struct Cli {
    /// Rover name, e.g. Curiosity
    rover: String,

    /// List the photos taken on this sol instead of printing the manifest
    #[arg(long)]
    sol: Option<u32>,

    /// Override NASA_API_KEY
    #[arg(long, env = "NASA_API_KEY")]
    api_key: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    let cli = Cli::parse();

    // Load configuration
    let mut config = AppConfig::from_env()?;
    if let Some(key) = cli.api_key {
        config.nasa_api_key = key;
    }
    info!(url = %config.mars_api_url, "Configuration loaded successfully");

    let loader = HttpLoader::new(Duration::from_secs(config.http_timeout_seconds))?;
    let client = MarsRoverClient::from_config(Arc::new(loader), &config);

    let rover = client.fetch_mars_rover(&cli.rover).await?;
    info!(
        rover = %rover.name,
        max_sol = rover.max_sol,
        photos = rover.number_of_photos,
        "Fetched manifest"
    );

    match cli.sol {
        Some(sol) => {
            let photos = client.fetch_photos(&rover, sol).await?;
            info!(sol, count = photos.len(), "Fetched photos");
            println!("{}", serde_json::to_string_pretty(&photos)?);
        }
        None => println!("{}", serde_json::to_string_pretty(&rover)?),
    }

    Ok(())
}
