//! Candidate credentials for the login probe.

/// Username used when none is configured.
pub const DEFAULT_USERNAME: &str = "admin";

/// Candidate passwords tried in order until one authenticates.
/// These are the development defaults seeded into the backend.
const DEFAULT_PASSWORD_CANDIDATES: &[&str] = &["admin123", "password", "admin"];

/// A username plus an ordered list of passwords to try against it.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    candidates: Vec<String>,
}

impl Credentials {
    /// Build the probe list for a username. `passwords` is an optional
    /// comma-separated override; when it is absent or contains no usable
    /// entries, the fixed development defaults are used.
    pub fn new(username: impl Into<String>, passwords: Option<&str>) -> Self {
        let candidates = passwords.map(parse_candidates).unwrap_or_default();
        let candidates = if candidates.is_empty() {
            DEFAULT_PASSWORD_CANDIDATES
                .iter()
                .map(|p| p.to_string())
                .collect()
        } else {
            candidates
        };

        Self {
            username: username.into(),
            candidates,
        }
    }

    /// Candidate passwords in probe order.
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Comma-separated candidate list, for the total-failure message.
    pub fn describe_candidates(&self) -> String {
        self.candidates.join(", ")
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::new(DEFAULT_USERNAME, None)
    }
}

fn parse_candidates(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_candidates_in_order() {
        let creds = Credentials::default();
        assert_eq!(creds.username, "admin");
        assert_eq!(creds.candidates(), &["admin123", "password", "admin"]);
    }

    #[test]
    fn test_override_preserves_order() {
        let creds = Credentials::new("ops", Some("first, second ,third"));
        assert_eq!(creds.username, "ops");
        assert_eq!(creds.candidates(), &["first", "second", "third"]);
    }

    #[test]
    fn test_blank_override_falls_back_to_defaults() {
        let creds = Credentials::new("admin", Some(" , ,"));
        assert_eq!(creds.candidates(), &["admin123", "password", "admin"]);
    }

    #[test]
    fn test_describe_candidates() {
        assert_eq!(
            Credentials::default().describe_candidates(),
            "admin123, password, admin"
        );
    }
}
