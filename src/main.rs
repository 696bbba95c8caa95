//! Contact Book - Main entry point
//!
//! Loads the contact book, runs the interactive assistant on stdin/stdout and
//! saves the book when the session ends.

use anyhow::Result;
use contact_book::repositories::{DirectoryRepository, JsonFileRepository};
use contact_book::{CommandContext, Config};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging (stderr only so the conversation on stdout stays clean)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let repository = JsonFileRepository::new(config.data_file.clone());
    let mut book = match repository.load().await {
        Ok(book) => book,
        Err(e) => {
            error!(
                "Failed to load contact book from {}: {}",
                repository.path().display(),
                e
            );
            return Err(e.into());
        }
    };
    info!("Loaded {} contacts", book.len());

    let ctx = CommandContext::from(&config);
    let session = contact_book::shell::run_stdio(&mut book, &ctx).await;

    // Save even if the session ended on an I/O error
    repository.save(&book).await?;
    info!("Contact book saved to {}", repository.path().display());

    session
}
