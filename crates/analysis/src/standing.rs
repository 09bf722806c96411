use super::cardstats::CardStats;
use super::interval::*;
use kuhn_cards::Card;
use kuhn_core::*;
use kuhn_gameplay::Action;
use kuhn_gameroom::*;

/// One agent's results over a session.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Standing {
    name: String,
    profit: i64,
    per_hundred: Utility,
    deviation: Utility,
    interval: Interval,
    actions: [u64; 4],
    cards: [CardStats; RANKS],
    cumulative: Vec<i64>,
}

impl Standing {
    pub fn from_session(session: &Session, agent: usize) -> Self {
        let profits = session
            .profits(agent)
            .into_iter()
            .map(Utility::from)
            .collect::<Vec<_>>();
        let mut actions = [0; 4];
        let mut cards = [CardStats::default(); RANKS];
        let mut cumulative = Vec::with_capacity(session.len());
        let mut running = 0i64;
        for entry in session.entries() {
            for action in entry.actions(agent) {
                actions[action.index()] += 1;
            }
            cards[u8::from(entry.card(agent)) as usize].add(entry.profit(agent));
            running += entry.profit(agent) as i64;
            cumulative.push(running);
        }
        Self {
            name: session.name(agent).to_string(),
            profit: running,
            per_hundred: mean(&profits) * 100.,
            deviation: deviation(&profits),
            interval: Interval::from_samples(&profits),
            actions,
            cards,
            cumulative,
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    /// Net chips over the session.
    pub fn profit(&self) -> i64 {
        self.profit
    }
    pub fn per_hundred(&self) -> Utility {
        self.per_hundred
    }
    pub fn mean(&self) -> Utility {
        self.interval.mean()
    }
    pub fn deviation(&self) -> Utility {
        self.deviation
    }
    pub fn interval(&self) -> Interval {
        self.interval
    }
    pub fn count(&self, action: Action) -> u64 {
        self.actions[action.index()]
    }
    /// Share of this agent's actions equal to `action`.
    pub fn frequency(&self, action: Action) -> Probability {
        match self.actions.iter().sum::<u64>() {
            0 => 0.,
            n => self.count(action) as Probability / n as Probability,
        }
    }
    pub fn card(&self, card: Card) -> &CardStats {
        &self.cards[u8::from(card) as usize]
    }
    /// Running profit after each hand.
    pub fn cumulative(&self) -> &[i64] {
        &self.cumulative
    }
}

impl std::fmt::Display for Standing {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(
            f,
            "  {:<12} {:+} chips ({:+.2} per 100 hands), {:+.3} ± {:.3} per hand, 95% CI {}",
            self.name,
            self.profit,
            self.per_hundred,
            self.mean(),
            self.deviation,
            self.interval
        )?;
        for action in Action::all() {
            writeln!(
                f,
                "    {:<6} {:>7} ({:>5.1}%)",
                action.label(),
                self.count(action),
                self.frequency(action) * 100.
            )?;
        }
        for card in Card::all().into_iter().rev() {
            writeln!(f, "    {:<6} {}", card.label(), self.card(card))?;
        }
        Ok(())
    }
}
