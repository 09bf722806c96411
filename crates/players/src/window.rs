use kuhn_core::*;
use kuhn_gameplay::Action;

/// The most recent observed actions in one decision context.
///
/// A fixed-capacity ring buffer with an explicit cursor and running counts
/// per action. Once full, each push overwrites the oldest slot and moves
/// its count over, so updates and frequency lookups are O(1) and memory
/// never grows past capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Window {
    slots: Vec<Action>,
    cursor: usize,
    capacity: usize,
    counts: [usize; 4],
}

impl Default for Window {
    fn default() -> Self {
        Self::new(WINDOW_CAPACITY)
    }
}

impl Window {
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "window capacity must be positive");
        Self {
            slots: Vec::with_capacity(capacity),
            cursor: 0,
            capacity,
            counts: [0; 4],
        }
    }
    /// Appends an observation, evicting the oldest once full.
    pub fn push(&mut self, action: Action) {
        match self.slots.len() < self.capacity {
            true => self.slots.push(action),
            false => {
                let evicted = std::mem::replace(&mut self.slots[self.cursor], action);
                self.counts[evicted.index()] -= 1;
            }
        }
        self.counts[action.index()] += 1;
        self.cursor = (self.cursor + 1) % self.capacity;
    }
    pub fn len(&self) -> usize {
        self.slots.len()
    }
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
    pub fn count(&self, action: Action) -> usize {
        self.counts[action.index()]
    }
    /// Share of observations equal to `action`. Zero when empty.
    pub fn frequency(&self, action: Action) -> Probability {
        match self.slots.len() {
            0 => 0.,
            n => self.count(action) as Probability / n as Probability,
        }
    }
    /// True once enough observations exist to trust frequencies.
    pub fn sufficient(&self) -> bool {
        self.len() >= MIN_SAMPLES
    }
    /// Observations from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &Action> {
        let (newer, older) = match self.slots.len() < self.capacity {
            true => (&self.slots[..], &self.slots[..0]),
            false => (&self.slots[..self.cursor], &self.slots[self.cursor..]),
        };
        older.iter().chain(newer.iter())
    }
}
