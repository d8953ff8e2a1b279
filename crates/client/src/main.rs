//! Terminal client entry point.
mod app;
mod config;
mod presentation;
mod provider;

use std::path::PathBuf;

use anyhow::Result;
use directories::ProjectDirs;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use runtime::{FileScoreStore, MemoryScoreStore, Runtime, RuntimeConfig};

use crate::app::App;
use crate::config::CliConfig;
use crate::presentation::terminal::{self, TerminalGuard};
use crate::provider::PokeApiProvider;

const SCORE_FILE: &str = "scores.json";

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();

    setup_logging()?;

    let runtime = build_runtime(&config)?;

    let mut tui = terminal::init()?;
    let _guard = TerminalGuard;

    let result = App::new(runtime.handle()).run(&mut tui).await;

    terminal::restore()?;
    runtime.shutdown().await?;

    result
}

fn build_runtime(config: &CliConfig) -> Result<Runtime> {
    let runtime_config = RuntimeConfig {
        resolution_delay: config.resolution_delay,
        max_duplicate_refetches: config.max_duplicate_refetches,
        ..RuntimeConfig::default()
    };

    let builder = Runtime::builder()
        .config(runtime_config)
        .provider(PokeApiProvider::new(&config.api_base_url)?);

    let runtime = match score_path(config) {
        Some(path) => {
            tracing::info!("Score file: {}", path.display());
            builder.store(FileScoreStore::new(path)?).build()?
        }
        None => {
            tracing::warn!("No data directory available; the tally will not persist");
            builder.store(MemoryScoreStore::new()).build()?
        }
    };

    Ok(runtime)
}

/// Resolve where the win tally lives: the configured directory if set,
/// otherwise the platform data directory.
fn score_path(config: &CliConfig) -> Option<PathBuf> {
    let dir = match &config.data_dir {
        Some(dir) => dir.clone(),
        None => ProjectDirs::from("", "", "duel")?.data_dir().to_path_buf(),
    };
    Some(dir.join(SCORE_FILE))
}

/// Setup logging to a file only; stderr would corrupt the TUI.
fn setup_logging() -> Result<()> {
    let log_dir = ProjectDirs::from("", "", "duel")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| PathBuf::from("/tmp/duel/logs"));
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::never(&log_dir, "client.log");
    let (non_blocking_file, _guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    // Leak the guard to keep the file writer alive
    std::mem::forget(_guard);

    tracing::info!("Log file: {}/client.log", log_dir.display());

    Ok(())
}
