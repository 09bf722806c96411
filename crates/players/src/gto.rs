use kuhn_core::*;
use kuhn_gameplay::*;
use kuhn_gameroom::*;
use kuhn_gto::*;

/// Plays the equilibrium: every decision is one draw from the oracle.
pub struct Gto {
    name: String,
    oracle: Oracle,
}

impl Gto {
    pub fn new(oracle: Oracle) -> Self {
        Self {
            name: String::from("GTO"),
            oracle,
        }
    }
    pub fn named(self, name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..self
        }
    }
    pub fn oracle(&self) -> &Oracle {
        &self.oracle
    }
}

impl Agent for Gto {
    fn name(&self) -> &str {
        &self.name
    }
    fn decide(&mut self, recall: &Partial, legal: &[Action], dice: &mut Dice) -> Action {
        recall
            .node()
            .and_then(|node| self.oracle.sample(recall.card(), node, dice))
            .filter(|action| legal.contains(action))
            .or_else(|| legal.first().copied())
            .expect("non empty legal actions conditional on being asked to move")
    }
}
