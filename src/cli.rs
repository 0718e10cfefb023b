//! Command-line surface.
//!
//! One optional positional argument selects a single document; everything
//! else is an override with a compatibility default, so `reprocess-ocr`
//! with no arguments behaves exactly like the original trigger.

use clap::Parser;

use crate::auth::{credentials::DEFAULT_USERNAME, Credentials};
use crate::config::{Config, DEFAULT_BASE_URL};

/// Trigger OCR reprocessing for one document or for all documents in the
/// DMS backend.
#[derive(Debug, Parser)]
#[command(name = "reprocess-ocr", version, about)]
pub struct Cli {
    /// Document id to reprocess; when omitted, every document is reprocessed
    pub document_id: Option<String>,

    /// Base URL of the backend
    #[arg(long, env = "DMS_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Username to authenticate as
    #[arg(long, env = "DMS_USERNAME", default_value = DEFAULT_USERNAME)]
    pub username: String,

    /// Comma-separated candidate passwords, tried in order
    #[arg(long, env = "DMS_PASSWORDS", hide_env_values = true)]
    pub passwords: Option<String>,
}

impl Cli {
    /// Assemble the runtime configuration from the parsed arguments.
    pub fn into_config(self) -> Config {
        Config {
            base_url: self.base_url,
            credentials: Credentials::new(self.username, self.passwords.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_invocation_keeps_compat_defaults() {
        let cli = Cli::try_parse_from(["reprocess-ocr"]).expect("failed to parse");
        assert!(cli.document_id.is_none());

        let config = cli.into_config();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.credentials.username, "admin");
        assert_eq!(
            config.credentials.candidates(),
            &["admin123", "password", "admin"]
        );
    }

    #[test]
    fn test_positional_document_id() {
        let cli = Cli::try_parse_from(["reprocess-ocr", "42"]).expect("failed to parse");
        assert_eq!(cli.document_id.as_deref(), Some("42"));
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "reprocess-ocr",
            "--base-url",
            "http://dms.internal:9090",
            "--username",
            "ops",
            "--passwords",
            "a,b",
            "7",
        ])
        .expect("failed to parse");

        assert_eq!(cli.document_id.as_deref(), Some("7"));
        let config = cli.into_config();
        assert_eq!(config.base_url, "http://dms.internal:9090");
        assert_eq!(config.credentials.username, "ops");
        assert_eq!(config.credentials.candidates(), &["a", "b"]);
    }
}
