use super::unavailable::Unavailable;
use kuhn_cards::Card;
use kuhn_core::*;
use kuhn_gameplay::*;

/// Everything an external decider is told about a decision.
///
/// Only the acting seat's card is included.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Request {
    pub card: Card,
    pub history: Vec<Action>,
    pub legal: Vec<Action>,
    pub pot: Chips,
}

impl Request {
    pub fn new(recall: &Partial, legal: &[Action]) -> Self {
        Self {
            card: recall.card(),
            history: recall.history().actions().to_vec(),
            legal: legal.to_vec(),
            pot: recall.pot(),
        }
    }
    /// Accepts an answer only if it is in the legal set.
    pub fn validate(&self, action: Action) -> Result<Action, Unavailable> {
        match self.legal.contains(&action) {
            true => Ok(action),
            false => Err(Unavailable::Illegal(action)),
        }
    }
}

/// The only shape of answer a decider may give: `{"action": "BET"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Reply {
    pub action: Action,
}

/// A pluggable external decider.
///
/// Any failure, including a well-formed but illegal answer, is reported as
/// [`Unavailable`] so the caller can fall back deterministically.
pub trait Source {
    fn consult(&mut self, request: &Request) -> Result<Action, Unavailable>;
}
