use super::action::Action;
use super::history::History;

/// An action the state machine refused.
///
/// Raised when the chosen action is outside the legal set of the current
/// decision point, including any action after the hand has ended. Agents
/// must pick from [`Game::legal`](crate::Game::legal), so this signals a
/// broken agent; the hand it occurred in is discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IllegalAction {
    action: Action,
    history: History,
}

impl IllegalAction {
    pub fn new(action: Action, history: History) -> Self {
        Self { action, history }
    }
    /// The rejected action.
    pub fn action(&self) -> Action {
        self.action
    }
    /// History at the moment of rejection.
    pub fn history(&self) -> &History {
        &self.history
    }
}

impl std::fmt::Display for IllegalAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.history.node() {
            Some(node) => write!(
                f,
                "illegal action {} at {} (history {})",
                self.action, node, self.history
            ),
            None => write!(
                f,
                "illegal action {} after terminal history {}",
                self.action, self.history
            ),
        }
    }
}

impl std::error::Error for IllegalAction {}
