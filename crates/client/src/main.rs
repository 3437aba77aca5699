//! Virtual pet client binary.
//!
//! Composition root: reads configuration, installs logging, builds the
//! runtime on top of the file repository, and hands control to the terminal
//! frontend until the user quits.
//!
//! ```bash
//! # Fast clock for trying things out
//! PET_DECAY_INTERVAL_SECS=5 PET_DAY_INTERVAL_SECS=20 cargo run -p pet-client
//! ```

use anyhow::{Context, Result};

use pet_client::{ClientConfig, Frontend, TerminalFrontend, logging};
use pet_content::{PhraseLoader, ShopLoader};
use pet_runtime::{FileStateRepository, PhraseResponseProvider, Runtime};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    let _log_guard = logging::setup_logging(&config.log_dir)?;

    tracing::info!("Starting pet client");
    tracing::info!("Save directory: {}", config.save_dir.display());
    tracing::info!(
        decay = ?config.runtime.decay_interval,
        day = ?config.runtime.day_interval,
        ticker = config.runtime.enable_ticker,
        "Clock configuration"
    );

    let repository = FileStateRepository::new(&config.save_dir)
        .with_context(|| format!("cannot open save directory {}", config.save_dir.display()))?;

    let mut builder = Runtime::builder()
        .config(config.runtime.clone())
        .repository(repository);

    if let Some(path) = &config.shop_file {
        tracing::info!("Loading shop catalog from {}", path.display());
        builder = builder.catalog(ShopLoader::load(path)?);
    }
    if let Some(path) = &config.phrases_file {
        tracing::info!("Loading chat phrases from {}", path.display());
        builder = builder.responder(PhraseResponseProvider::new(PhraseLoader::load(path)?));
    }

    let runtime = builder.build().await?;
    tracing::info!("Runtime built successfully");

    let mut frontend = TerminalFrontend::new(config.frontend.clone());
    let result = frontend.run(runtime.handle()).await;

    runtime.shutdown().await?;
    tracing::info!("Client shutdown complete");
    result
}
