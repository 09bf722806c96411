use super::*;
use kuhn_cards::Card;
use kuhn_core::*;

/// One seat's view of a hand in progress.
///
/// Holds the seat's own card and the public state (history, contributions),
/// never the opponent's card. This is everything an agent is allowed to
/// condition on when choosing an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partial {
    seat: Position,
    card: Card,
    history: History,
    stakes: [Chips; N],
}

impl Partial {
    pub fn new(seat: Position, card: Card, history: History, stakes: [Chips; N]) -> Self {
        Self {
            seat,
            card,
            history,
            stakes,
        }
    }
    /// Seat this view belongs to.
    pub fn seat(&self) -> Position {
        self.seat
    }
    /// The seat's private card.
    pub fn card(&self) -> Card {
        self.card
    }
    pub fn history(&self) -> &History {
        &self.history
    }
    pub fn stakes(&self) -> [Chips; N] {
        self.stakes
    }
    pub fn pot(&self) -> Chips {
        self.stakes.iter().sum()
    }
    /// Current decision point. None once the hand is over.
    pub fn node(&self) -> Option<Node> {
        self.history.node()
    }
    /// Legal actions at the current decision point.
    pub fn legal(&self) -> Vec<Action> {
        self.node()
            .map(|n| n.legal().to_vec())
            .unwrap_or_default()
    }
}

impl std::fmt::Display for Partial {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "P{} {} | {} | pot {}", self.seat, self.card, self.history, self.pot())
    }
}
