use std::path::PathBuf;

use clap::Parser;

use chirpy::config::{load_config, ChirpyConfig};
use chirpy::lifecycle;
use chirpy::observability::logging::init_logging;

#[derive(Parser)]
#[command(name = "chirpy")]
#[command(about = "Chirp validation service", long_about = None)]
struct Args {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ChirpyConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }

    init_logging(&config.observability);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "chirpy starting");
    tracing::info!(
        config_file = ?args.config,
        bind_address = %config.listener.bind_address,
        static_root = %config.static_files.root,
        max_chirp_length = config.chirps.max_length,
        admin_auth = config.admin.api_key.is_some(),
        "Configuration loaded"
    );

    if let Err(e) = lifecycle::start(config).await {
        tracing::error!(error = %e, "Fatal error");
        return Err(e.into());
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
