use super::alpha::Alpha;
use super::equilibrium::Equilibrium;
use super::policy::Policy;
use super::strategy::Strategy;
use super::table::Table;
use kuhn_cards::Card;
use kuhn_core::*;
use kuhn_gameplay::*;

/// A validated equilibrium table, ready to be sampled.
///
/// Building an oracle is the startup check: the closed form is tabulated
/// and validated once, and every later decision is a table lookup plus one
/// draw from the supplied random source.
#[derive(Debug, Clone, PartialEq)]
pub struct Oracle {
    alpha: Alpha,
    table: Table,
}

impl Oracle {
    pub fn new(alpha: Alpha) -> anyhow::Result<Self> {
        let table = Equilibrium::new(alpha).table();
        table.validate()?;
        log::debug!("[oracle] equilibrium table validated at {}", alpha);
        Ok(Self { alpha, table })
    }
    pub fn alpha(&self) -> Alpha {
        self.alpha
    }
    pub fn table(&self) -> &Table {
        &self.table
    }
}

impl Strategy for Oracle {
    fn policy(&self, card: Card, node: Node) -> Policy {
        self.table.get(card, node).clone()
    }
    fn sample(&self, card: Card, node: Node, dice: &mut Dice) -> Option<Action> {
        self.table.get(card, node).sample(dice)
    }
}
