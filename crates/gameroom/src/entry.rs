use kuhn_cards::Card;
use kuhn_core::*;
use kuhn_gameplay::*;

/// One completed hand of a matchup, plus which agent sat where.
///
/// Records are seat-indexed; a session alternates seats, so per-agent
/// questions go through the seating to find the right side of the record.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Entry {
    record: Record,
    seating: [usize; N],
}

impl Entry {
    /// `seating[seat]` is the index of the agent in that seat.
    pub fn new(record: Record, seating: [usize; N]) -> Self {
        Self { record, seating }
    }
    pub fn record(&self) -> &Record {
        &self.record
    }
    pub fn seating(&self) -> [usize; N] {
        self.seating
    }
    /// Seat the agent occupied.
    pub fn seat(&self, agent: usize) -> Position {
        if self.seating[0] == agent { 0 } else { 1 }
    }
    pub fn card(&self, agent: usize) -> Card {
        self.record.card(self.seat(agent))
    }
    pub fn profit(&self, agent: usize) -> Chips {
        self.record.payoff(self.seat(agent))
    }
    /// Actions the agent itself took, in order.
    pub fn actions(&self, agent: usize) -> Vec<Action> {
        let seat = self.seat(agent);
        self.record
            .history()
            .seated()
            .filter(|(s, _)| *s == seat)
            .map(|(_, a)| a)
            .collect()
    }
}
