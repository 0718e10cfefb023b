//! The trigger sequence: probe the candidate passwords, dispatch the
//! reprocess call, print the closing guidance.

use anyhow::{bail, Result};
use tracing::debug;

use crate::api::ApiClient;
use crate::auth::SessionData;
use crate::config::Config;

/// What a run should reprocess, selected by the presence of the positional
/// document-id argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    All,
    Document(String),
}

impl Target {
    pub fn from_arg(document_id: Option<String>) -> Self {
        match document_id {
            Some(id) => Target::Document(id),
            None => Target::All,
        }
    }
}

/// Run the full trigger sequence.
///
/// Returns an error only when every candidate password is rejected. A failed
/// reprocess call is reported on the console and still counts as a normal
/// exit, and the closing guidance is printed either way.
pub async fn run(config: Config, target: Target) -> Result<()> {
    let client = ApiClient::new(&config.base_url)?;

    println!("Logging in as {}...", config.credentials.username);
    let session = probe_login(&client, &config).await?;
    println!("Login successful!");
    println!();

    let client = client.with_token(session.token);

    match &target {
        Target::Document(id) => {
            println!("Triggering OCR reprocessing for document {id}...");
            match client.reprocess_document(id).await {
                Ok(ack) => println!(
                    "{}",
                    ack.message
                        .unwrap_or_else(|| format!("OCR reprocessing started for document {id}!"))
                ),
                Err(e) => eprintln!("Failed to trigger OCR reprocessing: {e}"),
            }
        }
        Target::All => {
            println!("Triggering OCR reprocessing for all documents...");
            match client.reprocess_all().await {
                Ok(ack) => println!(
                    "{}",
                    ack.message
                        .unwrap_or_else(|| "OCR reprocessing started!".to_string())
                ),
                Err(e) => eprintln!("Failed to trigger OCR reprocessing: {e}"),
            }
        }
    }

    println!();
    println!("Processing runs asynchronously. Check the backend logs for progress.");
    println!("OCR processing typically takes 5-60 seconds per document depending on size.");
    println!("You can view OCR text in the Document Viewer after processing completes.");

    Ok(())
}

/// Try each candidate password in order, stopping at the first success.
/// Individual rejections are printed and skipped; exhausting the list is
/// the one fatal condition in the program.
async fn probe_login(client: &ApiClient, config: &Config) -> Result<SessionData> {
    let credentials = &config.credentials;

    for password in credentials.candidates() {
        match client.login(&credentials.username, password).await {
            Ok(session) => {
                debug!(username = %credentials.username, "login accepted");
                return Ok(session);
            }
            Err(e) => eprintln!("Login failed: {e}"),
        }
    }

    eprintln!("You can also trigger OCR reprocessing from the frontend.");
    bail!(
        "could not log in as {} (passwords tried: {})",
        credentials.username,
        credentials.describe_candidates()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_from_missing_arg_is_all() {
        assert_eq!(Target::from_arg(None), Target::All);
    }

    #[test]
    fn test_target_from_arg_is_single_document() {
        assert_eq!(
            Target::from_arg(Some("42".to_string())),
            Target::Document("42".to_string())
        );
    }
}
