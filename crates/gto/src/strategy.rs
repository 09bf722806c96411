use super::policy::Policy;
use kuhn_cards::Card;
use kuhn_core::*;
use kuhn_gameplay::*;

/// A behavioral strategy for either seat.
///
/// Kuhn decision points are identified by the private card and the
/// [`Node`], which already fixes the acting seat, so one mapping covers
/// both seats.
pub trait Strategy {
    /// Mixed action at this decision point.
    fn policy(&self, card: Card, node: Node) -> Policy;
    /// Draws one action from [`policy`](Self::policy).
    fn sample(&self, card: Card, node: Node, dice: &mut Dice) -> Option<Action> {
        self.policy(card, node).sample(dice)
    }
}
