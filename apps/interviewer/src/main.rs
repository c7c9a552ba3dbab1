mod cli;
mod config;
mod errors;
mod interview;
mod llm_client;
mod models;
mod session;
mod storage;

use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::session::Controller;
use crate::storage::{CsvSink, JsonSink, CSV_FILE, JSON_FILE};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on a missing API key)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting AI Hiring Assistant v{}", env!("CARGO_PKG_VERSION"));

    let llm = LlmClient::new(config.gemini_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let csv_sink = CsvSink::new(config.data_dir.join(CSV_FILE));
    let json_sink = JsonSink::new(config.data_dir.join(JSON_FILE));
    info!("Candidate sinks rooted at {}", config.data_dir.display());

    let controller = Controller::new(Arc::new(llm), csv_sink, json_sink);
    cli::run_session(controller).await?;

    Ok(())
}
