use super::alpha::Alpha;
use super::policy::Policy;
use super::strategy::Strategy;
use super::table::Table;
use kuhn_cards::Card;
use kuhn_core::*;
use kuhn_gameplay::*;

/// The closed-form Nash equilibrium of Kuhn poker for a given α.
///
/// Probability of the chip-committing action (BET when opening, CALL when
/// facing a bet) at each decision point:
///
/// | node       | Jack  | Queen   | King |
/// |------------|-------|---------|------|
/// | `Open`     | α     | 0       | 3α   |
/// | `Check`    | 1/3   | 0       | 1    |
/// | `Bet`      | 0     | 1/3     | 1    |
/// | `CheckBet` | 0     | α + 1/3 | 1    |
///
/// Jack and King never face a real decision when called or bet into: one
/// always loses a showdown, the other always wins it. What remains is
/// indifference. Seat 1 calls with Queen 1/3 of the time, which makes a
/// Jack bluff break even, and bluffs Jack 1/3 after a check, which makes
/// seat 0 indifferent between calling and folding Queen. Seat 0 bets King
/// three times as often as it bluffs Jack, which makes seat 1 indifferent
/// with Queen, and calls α + 1/3 with Queen, which keeps seat 1 indifferent
/// about bluffing Jack. Every α ∈ [0, 1/3] gives seat 0 the same value,
/// −1/18 per hand.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Equilibrium {
    alpha: Alpha,
}

impl Equilibrium {
    pub fn new(alpha: Alpha) -> Self {
        Self { alpha }
    }
    pub fn alpha(&self) -> Alpha {
        self.alpha
    }
    /// Probability of BET or CALL at this decision point.
    pub fn aggression(&self, card: Card, node: Node) -> Probability {
        let alpha = self.alpha.value();
        match (node, card) {
            (Node::Open, Card::Jack) => alpha,
            (Node::Open, Card::Queen) => 0.,
            (Node::Open, Card::King) => 3. * alpha,
            (Node::Check, Card::Jack) => 1. / 3.,
            (Node::Check, Card::Queen) => 0.,
            (Node::Check, Card::King) => 1.,
            (Node::Bet, Card::Jack) => 0.,
            (Node::Bet, Card::Queen) => 1. / 3.,
            (Node::Bet, Card::King) => 1.,
            (Node::CheckBet, Card::Jack) => 0.,
            (Node::CheckBet, Card::Queen) => alpha + 1. / 3.,
            (Node::CheckBet, Card::King) => 1.,
        }
    }
    /// The equilibrium as explicit data.
    pub fn table(&self) -> Table {
        Table::tabulate(self)
    }
}

impl Strategy for Equilibrium {
    fn policy(&self, card: Card, node: Node) -> Policy {
        Policy::lean(node, self.aggression(card, node))
    }
}
