use super::bias::Bias;
use super::source::*;
use kuhn_cards::Card;
use kuhn_core::*;
use kuhn_gameplay::*;
use kuhn_gameroom::*;
use kuhn_gto::*;
use std::collections::VecDeque;

/// A player with recognisably human leaks.
///
/// Decisions come from a [`Bias`] table, then a pattern-seeking tilt: the
/// player remembers the opponent's last [`RECENT_MEMORY`] actions and reads
/// meaning into the latest [`RECENT_STREAK`] of them. A run of bets makes
/// Queen call more; a quiet run makes Queen fold more.
///
/// An optional [`Source`] is consulted first. Whenever it is unavailable
/// the rule table decides instead, so a slow or broken source never stalls
/// a hand.
pub struct HumanLike {
    name: String,
    bias: Bias,
    recent: VecDeque<Action>,
    source: Option<Box<dyn Source>>,
}

impl HumanLike {
    pub fn new(bias: Bias) -> Self {
        Self {
            name: String::from("HumanLike"),
            bias,
            recent: VecDeque::with_capacity(RECENT_MEMORY),
            source: None,
        }
    }
    pub fn named(self, name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..self
        }
    }
    pub fn with_source(self, source: Box<dyn Source>) -> Self {
        Self {
            source: Some(source),
            ..self
        }
    }
    /// Opponent bets among the latest streak. None before any observation.
    fn streak(&self) -> Option<usize> {
        match self.recent.is_empty() {
            true => None,
            false => Some(
                self.recent
                    .iter()
                    .rev()
                    .take(RECENT_STREAK)
                    .filter(|a| a.is_aggro())
                    .count(),
            ),
        }
    }
    /// Rule-table policy after the tilt.
    pub fn policy(&self, card: Card, node: Node) -> Policy {
        let p = self.bias.aggression(card, node);
        let p = match (card, node.context(), self.streak()) {
            (Card::Queen, Context::Facing, Some(bets)) if bets >= AGGRESSIVE_STREAK => (p + HERO_CALL_TILT).min(1.),
            (Card::Queen, Context::Facing, Some(bets)) if bets <= PASSIVE_STREAK => (p - GIVE_UP_TILT).max(0.),
            _ => p,
        };
        Policy::lean(node, p)
    }
    fn rules(&self, recall: &Partial, legal: &[Action], dice: &mut Dice) -> Action {
        recall
            .node()
            .and_then(|node| self.policy(recall.card(), node).sample(dice))
            .filter(|action| legal.contains(action))
            .or_else(|| legal.first().copied())
            .expect("non empty legal actions conditional on being asked to move")
    }
}

impl Agent for HumanLike {
    fn name(&self) -> &str {
        &self.name
    }
    fn decide(&mut self, recall: &Partial, legal: &[Action], dice: &mut Dice) -> Action {
        if let Some(source) = self.source.as_mut() {
            let request = Request::new(recall, legal);
            match source.consult(&request) {
                Ok(action) if legal.contains(&action) => return action,
                Ok(action) => log::warn!("[human] {} ignored illegal {}", self.name, action),
                Err(e) => log::warn!("[human] {} falling back to rule table: {}", self.name, e),
            }
        }
        self.rules(recall, legal, dice)
    }
    fn observe(&mut self, record: &Record, seat: Position) {
        for (_, action) in record.history().seated().filter(|(s, _)| *s != seat) {
            if self.recent.len() == RECENT_MEMORY {
                self.recent.pop_front();
            }
            self.recent.push_back(action);
        }
    }
}
