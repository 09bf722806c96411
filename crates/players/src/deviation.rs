use kuhn_cards::Card;
use kuhn_core::*;
use kuhn_gameplay::*;

/// A departure from equilibrium aimed at one observed leak.
///
/// Variants are listed in priority order: when several rules fire, only
/// the first applies.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Deviation {
    /// Opponent over-folds to bets: bluff every Jack when first to act.
    Bluff,
    /// Opponent over-bets when first to act: call every bet with Queen.
    CallDown,
    /// Opponent over-calls: stop bluffing Jack and always bet King.
    ValueOnly,
}

impl Deviation {
    /// Adjusts the equilibrium BET/CALL probability `base` at a decision point.
    pub fn adjust(&self, card: Card, node: Node, base: Probability) -> Probability {
        match (self, card, node.context()) {
            (Self::Bluff, Card::Jack, Context::Opening) => 1.,
            (Self::CallDown, Card::Queen, Context::Facing) => 1.,
            (Self::ValueOnly, Card::Jack, Context::Opening) => 0.,
            (Self::ValueOnly, Card::King, Context::Opening) => 1.,
            _ => base,
        }
    }
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Bluff => "bluff",
            Self::CallDown => "call down",
            Self::ValueOnly => "value only",
        }
    }
}

impl std::fmt::Display for Deviation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
