use super::action::Action;
use super::node::Node;
use kuhn_core::*;

/// The ordered actions of one hand.
///
/// Append-only while the hand is live; once terminal, the [`Game`](crate::Game)
/// refuses further actions so the history is frozen. Both seats see the
/// same history, so it is the public part of every agent's view.
#[derive(Debug, Clone, Default, Hash, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct History(Vec<Action>);

impl History {
    pub fn new() -> Self {
        Self::default()
    }
    /// Actions taken so far.
    pub fn actions(&self) -> &[Action] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn last(&self) -> Option<Action> {
        self.0.last().copied()
    }
    /// Current decision point. None once the hand is over.
    pub fn node(&self) -> Option<Node> {
        Node::locate(&self.0)
    }
    /// True once no further action is possible.
    pub fn is_terminal(&self) -> bool {
        self.node().is_none()
    }
    /// Seat that took the i-th action. Seats strictly alternate from seat 0.
    pub fn actor(index: usize) -> Position {
        index % N
    }
    /// Actions paired with the seat that took them.
    pub fn seated(&self) -> impl Iterator<Item = (Position, Action)> + '_ {
        self.0.iter().enumerate().map(|(i, a)| (Self::actor(i), *a))
    }
    /// Compact symbol string, e.g. "XBC".
    pub fn symbol(&self) -> String {
        self.0.iter().map(Action::symbol).collect()
    }
    pub(crate) fn push(&mut self, action: Action) {
        self.0.push(action);
    }
}

impl From<History> for Vec<Action> {
    fn from(history: History) -> Self {
        history.0
    }
}

impl std::fmt::Display for History {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.0.is_empty() {
            true => write!(f, "START"),
            false => write!(
                f,
                "{}",
                self.0
                    .iter()
                    .map(|a| a.to_string())
                    .collect::<Vec<_>>()
                    .join("->")
            ),
        }
    }
}
