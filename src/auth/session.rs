//! Session data returned by a successful login.
//!
//! The token lives only for the lifetime of the process and is used for
//! exactly one reprocess call; nothing is written to disk.

/// Bearer token and identity fields from the login response.
#[derive(Debug, Clone)]
pub struct SessionData {
    pub token: String,
    pub username: Option<String>,
    pub role: Option<String>,
}
