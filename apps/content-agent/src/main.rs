use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use content_agent::cli::{self, Args};
use content_agent::config::Config;
use content_agent::errors::AppError;

fn main() -> ExitCode {
    let args = Args::parse();

    // Load configuration first (every variable is optional; malformed values are fatal)
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            let err = AppError::Internal(e.context("Failed to load configuration"));
            eprintln!("Error: {err}");
            return err.exit_code();
        }
    };

    // Initialize structured logging (stderr, so stdout stays clean for content)
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting Content Agent v{}", env!("CARGO_PKG_VERSION"));

    match cli::run(args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            e.exit_code()
        }
    }
}
