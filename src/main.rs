//! reprocess-ocr - trigger OCR reprocessing in the DMS backend.
//!
//! Logs into the backend with a short list of candidate passwords, then
//! asks it to re-run OCR for a single document or for every document.

use std::io;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use reprocess_ocr::app::{self, Target};
use reprocess_ocr::cli::Cli;

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG to control log level (e.g. RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();

    let cli = Cli::parse();
    let target = Target::from_arg(cli.document_id.clone());
    let config = cli.into_config();

    if let Err(e) = app::run(config, target).await {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
