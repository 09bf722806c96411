use super::policy::Policy;
use super::strategy::Strategy;
use kuhn_cards::Card;
use kuhn_core::*;
use kuhn_gameplay::*;

/// An explicit strategy: one [`Policy`] per (node, card).
///
/// Tables are plain data. Anything built from configuration goes through
/// [`validate`](Self::validate) once at startup; a table that fails is
/// never played.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Table(Vec<Policy>);

impl Table {
    /// Builds a table by evaluating `f` at every decision point.
    pub fn from_fn(f: impl Fn(Node, Card) -> Policy) -> Self {
        Self(
            Node::all()
                .into_iter()
                .flat_map(|node| Card::all().into_iter().map(move |card| (node, card)))
                .map(|(node, card)| f(node, card))
                .collect(),
        )
    }
    /// Snapshots any strategy into explicit data.
    pub fn tabulate(strategy: &dyn Strategy) -> Self {
        Self::from_fn(|node, card| strategy.policy(card, node))
    }
    pub fn get(&self, card: Card, node: Node) -> &Policy {
        &self.0[Self::index(card, node)]
    }
    pub fn set(&mut self, card: Card, node: Node, policy: Policy) {
        self.0[Self::index(card, node)] = policy;
    }
    fn index(card: Card, node: Node) -> usize {
        node.index() * RANKS + u8::from(card) as usize
    }
    /// Checks every decision point: probabilities are finite and
    /// non-negative, only legal actions appear, and each policy sums to 1.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.0.len() == Node::all().len() * RANKS,
            "table has {} entries",
            self.0.len()
        );
        for node in Node::all() {
            for card in Card::all() {
                let policy = self.get(card, node);
                for (action, p) in policy.iter() {
                    anyhow::ensure!(
                        node.legal().contains(action),
                        "{} at {}: {} is not a legal action",
                        card,
                        node,
                        action
                    );
                    anyhow::ensure!(
                        p.is_finite() && *p >= 0.,
                        "{} at {}: {} has probability {}",
                        card,
                        node,
                        action,
                        p
                    );
                }
                let total = policy.total();
                anyhow::ensure!(
                    (total - 1.).abs() <= TOLERANCE,
                    "{} at {}: probabilities sum to {}",
                    card,
                    node,
                    total
                );
            }
        }
        Ok(())
    }
}

impl Strategy for Table {
    fn policy(&self, card: Card, node: Node) -> Policy {
        self.get(card, node).clone()
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for node in Node::all() {
            writeln!(f, "{:<24}", node.label())?;
            for card in Card::all() {
                writeln!(f, "  {:<6} {}", card.label(), self.get(card, node))?;
            }
        }
        Ok(())
    }
}
