// ECM ML entry point
// Reads one JSON command per line on stdin and answers with one JSON line on stdout.

use anyhow::Context;
use ecm_ml_core::commands::handle_line;
use ecm_ml_core::text_extract::{PlainTextExtractor, TextExtractor};
use ecm_ml_core::{AppConfig, ClassifierService};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

fn init_tracing(default_filter: &str) {
    // RUST_LOG wins over the configured default
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    // stdout carries responses, so logs go to stderr
    let formatting_layer = BunyanFormattingLayer::new("ecm-ml".into(), std::io::stderr);

    Registry::default()
        .with(filter)
        .with(JsonStorageLayer)
        .with(formatting_layer)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = AppConfig::from_env().context("invalid configuration")?;
    init_tracing(&config.log_filter);
    info!(model_path = ?config.model_path, "Starting ECM ML service");

    let extractor: Arc<dyn TextExtractor> =
        Arc::new(PlainTextExtractor::new(config.extract_max_chars));
    let service = ClassifierService::start(&config, Some(extractor));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let response = handle_line(&service, &line).await;
        stdout.write_all(response.to_string().as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await?;
    }

    info!("Input closed, shutting down");
    Ok(())
}
