//! Per-session user identity.
//!
//! Every remote call is scoped by an opaque user identifier generated
//! once per process. The backend does not validate it; it only has to
//! be unique enough to keep one session's data apart from another's.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque per-session user identifier.
///
/// Generated once at startup and injected into every controller; the
/// controllers never inspect its contents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity(String);

impl Identity {
    /// Generates a fresh identity for this session.
    pub fn generate() -> Self {
        Self(format!("user-{}", Uuid::new_v4()))
    }

    /// Wraps an existing identifier (e.g. one supplied on the command line).
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_identities_are_unique() {
        let a = Identity::generate();
        let b = Identity::generate();
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("user-"));
    }

    #[test]
    fn from_raw_preserves_the_value() {
        let id = Identity::from_raw("user-cli-42");
        assert_eq!(id.to_string(), "user-cli-42");
    }
}
