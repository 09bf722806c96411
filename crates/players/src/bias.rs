use kuhn_cards::Card;
use kuhn_core::*;
use kuhn_gameplay::*;
use kuhn_gto::*;

/// The perturbed rule table of a human-like player.
///
/// Each row holds the probability of the chip-committing action (BET or
/// CALL) for Jack, Queen, King at one decision point. The defaults model
/// common amateur leaks relative to equilibrium:
///
/// - over-confidence: extra Jack bluffs and Queen stabs when checked to
/// - trap checking: King opens with only 70%
/// - loss aversion: Queen folds too often when bet into first
/// - curiosity: the occasional hopeless Jack call
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Bias {
    pub open: [Probability; RANKS],
    pub check: [Probability; RANKS],
    pub bet: [Probability; RANKS],
    pub check_bet: [Probability; RANKS],
}

impl Default for Bias {
    fn default() -> Self {
        Self {
            open: [0.15, 0.10, 0.70],
            check: [0.20, 0.05, 0.90],
            bet: [0.05, 0.25, 1.00],
            check_bet: [0.05, 0.45, 1.00],
        }
    }
}

impl Bias {
    /// Probability of BET or CALL at this decision point.
    pub fn aggression(&self, card: Card, node: Node) -> Probability {
        let row = match node {
            Node::Open => &self.open,
            Node::Check => &self.check,
            Node::Bet => &self.bet,
            Node::CheckBet => &self.check_bet,
        };
        row[u8::from(card) as usize]
    }
    /// Rejects any entry outside [0, 1].
    pub fn validate(&self) -> anyhow::Result<()> {
        for node in Node::all() {
            for card in Card::all() {
                let p = self.aggression(card, node);
                anyhow::ensure!(
                    (0. ..=1.).contains(&p),
                    "human-like bias for {} at {} is {}",
                    card,
                    node,
                    p
                );
            }
        }
        Table::tabulate(self).validate()
    }
}

impl Strategy for Bias {
    fn policy(&self, card: Card, node: Node) -> Policy {
        Policy::lean(node, self.aggression(card, node))
    }
}
