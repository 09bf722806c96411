use kuhn_gameplay::Action;
use std::time::Duration;

/// Why a decision source could not produce a usable action.
///
/// Always recovered inside the agent by falling back to its rule table for
/// that one decision; it never reaches the dealer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unavailable {
    /// No reply within the deadline.
    Timeout(Duration),
    /// The exchange itself failed.
    Transport(String),
    /// The reply did not parse as the expected schema.
    Schema(String),
    /// The reply named an action outside the legal set.
    Illegal(Action),
}

impl std::fmt::Display for Unavailable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Timeout(d) => write!(f, "decision source timed out after {:?}", d),
            Self::Transport(e) => write!(f, "decision source failed: {}", e),
            Self::Schema(e) => write!(f, "malformed decision: {}", e),
            Self::Illegal(a) => write!(f, "decision source chose illegal action {}", a),
        }
    }
}

impl std::error::Error for Unavailable {}
