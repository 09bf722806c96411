use kuhn_core::*;
use kuhn_gameplay::*;
use rand::Rng;

/// A probability distribution over the actions of one decision point.
///
/// Kuhn decision points only ever have two legal actions, so a `Vec` of
/// weighted actions is both the simplest and the fastest representation.
/// Entries with zero weight are allowed and never sampled.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Policy(Vec<(Action, Probability)>);

impl Policy {
    pub fn new(weights: Vec<(Action, Probability)>) -> Self {
        Self(weights)
    }
    /// Plays one action with certainty.
    pub fn pure(action: Action) -> Self {
        Self(vec![(action, 1.)])
    }
    /// Splits a node's two legal actions, putting `p` on the one that
    /// commits chips (BET when opening, CALL when facing a bet).
    pub fn lean(node: Node, p: Probability) -> Self {
        let [a, b] = node.legal();
        match node.context() {
            Context::Opening => Self(vec![(a, 1. - p), (b, p)]),
            Context::Facing => Self(vec![(a, p), (b, 1. - p)]),
        }
    }
    pub fn iter(&self) -> impl Iterator<Item = &(Action, Probability)> {
        self.0.iter()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// Weight assigned to an action. Zero if absent.
    pub fn probability(&self, action: Action) -> Probability {
        self.0
            .iter()
            .filter(|(a, _)| *a == action)
            .map(|(_, p)| p)
            .sum()
    }
    /// Weight on actions that put chips in the pot.
    pub fn aggression(&self) -> Probability {
        self.0
            .iter()
            .filter(|(a, _)| a.amount() > 0)
            .map(|(_, p)| p)
            .sum()
    }
    pub fn total(&self) -> Probability {
        self.0.iter().map(|(_, p)| p).sum()
    }
    /// Draws an action by walking the cumulative distribution.
    /// None only if no action carries positive weight.
    pub fn sample(&self, dice: &mut Dice) -> Option<Action> {
        let mut target = dice.random::<Probability>() * self.total();
        for (action, p) in self.0.iter().filter(|(_, p)| *p > 0.) {
            if target < *p {
                return Some(*action);
            }
            target -= p;
        }
        // float residue at the top of the range
        self.0.iter().rev().find(|(_, p)| *p > 0.).map(|(a, _)| *a)
    }
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let entries = self
            .0
            .iter()
            .map(|(a, p)| format!("{} {:.3}", a, p))
            .collect::<Vec<_>>();
        write!(f, "{}", entries.join(" / "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lean_puts_weight_on_chips() {
        let open = Policy::lean(Node::Open, 0.25);
        assert_eq!(open.probability(Action::Bet), 0.25);
        assert_eq!(open.probability(Action::Check), 0.75);
        let facing = Policy::lean(Node::Bet, 0.25);
        assert_eq!(facing.probability(Action::Call), 0.25);
        assert_eq!(facing.aggression(), 0.25);
        assert_eq!(facing.total(), 1.);
    }
    #[test]
    fn zero_weight_never_sampled() {
        let ref mut dice = dice(7);
        let policy = Policy::lean(Node::CheckBet, 0.);
        for _ in 0..1000 {
            assert_eq!(policy.sample(dice), Some(Action::Fold));
        }
    }
    #[test]
    fn empty_policy_samples_nothing() {
        assert_eq!(Policy::default().sample(&mut dice(0)), None);
        assert_eq!(Policy::new(vec![(Action::Bet, 0.)]).sample(&mut dice(0)), None);
    }
    #[test]
    fn sampling_tracks_weights() {
        let ref mut dice = dice(11);
        let policy = Policy::lean(Node::Check, 0.7);
        let bets = (0..20_000)
            .filter(|_| policy.sample(dice) == Some(Action::Bet))
            .count();
        let frequency = bets as Probability / 20_000.;
        assert!((frequency - 0.7).abs() < 0.02, "bet frequency {}", frequency);
    }
}
