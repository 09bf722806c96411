use super::entry::Entry;
use kuhn_core::*;

/// Every completed hand of one matchup between two agents.
///
/// Agent 0 is the first agent passed to [`Arena::run`](crate::Arena::run).
/// Hands that ended in an illegal action are counted but never stored.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Session {
    names: [String; N],
    entries: Vec<Entry>,
    discarded: u64,
}

impl Session {
    pub fn new(names: [String; N]) -> Self {
        Self {
            names,
            entries: Vec::new(),
            discarded: 0,
        }
    }
    pub fn names(&self) -> &[String; N] {
        &self.names
    }
    pub fn name(&self, agent: usize) -> &str {
        &self.names[agent]
    }
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn discarded(&self) -> u64 {
        self.discarded
    }
    /// Per-hand profit of one agent, in hand order.
    pub fn profits(&self, agent: usize) -> Vec<Chips> {
        self.entries.iter().map(|e| e.profit(agent)).collect()
    }
    /// Net chips won by one agent over the whole session.
    pub fn total(&self, agent: usize) -> i64 {
        self.entries.iter().map(|e| e.profit(agent) as i64).sum()
    }
    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }
    pub fn discard(&mut self) {
        self.discarded += 1;
    }
}

impl std::fmt::Display for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} vs {}: {} hands ({} discarded), {:+} / {:+}",
            self.names[0],
            self.names[1],
            self.entries.len(),
            self.discarded,
            self.total(0),
            self.total(1)
        )
    }
}
