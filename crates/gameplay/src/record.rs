use super::*;
use kuhn_cards::*;
use kuhn_core::*;

/// A completed hand.
///
/// Both cards are revealed, so a record is what agents learn from after the
/// hand and what the analysis layer aggregates. Payoffs are net chip changes
/// per seat and always sum to zero.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Record {
    hand: u64,
    deal: Deal,
    history: History,
    payoffs: [Chips; N],
    timestamp: u64,
}

impl Record {
    pub fn new(hand: u64, deal: Deal, history: History, payoffs: [Chips; N], timestamp: u64) -> Self {
        Self {
            hand,
            deal,
            history,
            payoffs,
            timestamp,
        }
    }
    /// Replays a complete action line on a deal and settles it.
    ///
    /// Fails on the first illegal action, or if the line stops before the
    /// hand is over.
    pub fn replay(hand: u64, deal: Deal, actions: &[Action]) -> anyhow::Result<Self> {
        let game = actions
            .iter()
            .try_fold(Game::from(deal), |game, action| game.try_apply(*action))?;
        game.record(hand)
            .ok_or_else(|| anyhow::anyhow!("line {} does not end the hand", game.history()))
    }
    /// Sequence number within the session.
    pub fn hand(&self) -> u64 {
        self.hand
    }
    pub fn deal(&self) -> Deal {
        self.deal
    }
    pub fn card(&self, seat: Position) -> Card {
        self.deal.card(seat)
    }
    pub fn history(&self) -> &History {
        &self.history
    }
    pub fn actions(&self) -> &[Action] {
        self.history.actions()
    }
    pub fn payoffs(&self) -> [Chips; N] {
        self.payoffs
    }
    /// Net chips won or lost by one seat.
    pub fn payoff(&self, seat: Position) -> Chips {
        self.payoffs[seat]
    }
    /// Milliseconds since the epoch when the hand settled.
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }
    pub fn is_zero_sum(&self) -> bool {
        self.payoffs.iter().sum::<Chips>() == 0
    }
    /// How the hand ended, derived from the last action and the cards.
    pub fn outcome(&self) -> Outcome {
        match self.history.last() {
            Some(Action::Fold) => Outcome::Fold(History::actor(self.history.len() - 1)),
            _ => Outcome::Showdown(self.deal.leader()),
        }
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "#{:<6} {} {:<4} {:>+3} {:>+3}",
            self.hand,
            self.deal,
            self.history.symbol(),
            self.payoffs[0],
            self.payoffs[1]
        )
    }
}
