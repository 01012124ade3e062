#![recursion_limit = "256"]
mod config;
mod routes;

use std::process::ExitCode;

use thiserror::Error;

use crate::config::{Config, ConfigError};

#[derive(Debug, Error)]
enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Leptos(String),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    let env_file = dotenvy::dotenv();
    tracing_subscriber::fmt::init();
    if let Err(e) = env_file {
        if !e.not_found() {
            tracing::warn!(error = %e, ".env ignored");
        }
    }

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "liveboard stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServerError> {
    let config = Config::from_env()?;
    let app = routes::app().map_err(ServerError::Leptos)?;
    let listener = tokio::net::TcpListener::bind(config.addr()).await?;

    tracing::info!(addr = %config.addr(), "liveboard listening");
    axum::serve(listener, app).await?;
    Ok(())
}
