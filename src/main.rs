use anyhow::Result;
use tracing::info;
use vogue_radar::{config, server};

/// Validates that a log level string is valid
fn validate_log_level(level: &str) -> Result<()> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            anyhow::anyhow!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            )
        })?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; the process environment still applies.
    dotenvy::dotenv().ok();

    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // RUST_LOG overrides the configured level
    match std::env::var("RUST_LOG") {
        Ok(filter) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
                .json()
                .init();
        }
        Err(_) => {
            validate_log_level(&config.server.logs.level)?;
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new(
                    &config.server.logs.level,
                ))
                .json()
                .init();
        }
    }

    info!("Starting VogueRadar API v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration loaded successfully");

    server::run(config).await?;

    Ok(())
}
