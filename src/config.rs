//! Runtime configuration.
//!
//! There is no config file and no ambient global state; the configuration
//! is assembled from CLI flags and environment, and handed to the client
//! explicitly. The defaults reproduce the stock development setup, so a
//! bare invocation talks to a local backend with the seeded admin account.

use crate::auth::Credentials;

/// Base URL the backend listens on in the stock development setup.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub credentials: Credentials,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            credentials: Credentials::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_stock_backend() {
        let config = Config::default();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.credentials.username, "admin");
    }
}
