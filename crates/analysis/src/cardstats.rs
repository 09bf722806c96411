use kuhn_core::*;

/// One agent's results while holding one card.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CardStats {
    hands: u64,
    won: u64,
    profit: i64,
}

impl CardStats {
    pub fn add(&mut self, payoff: Chips) {
        self.hands += 1;
        self.profit += payoff as i64;
        if payoff > 0 {
            self.won += 1;
        }
    }
    pub fn hands(&self) -> u64 {
        self.hands
    }
    pub fn won(&self) -> u64 {
        self.won
    }
    pub fn profit(&self) -> i64 {
        self.profit
    }
    pub fn win_rate(&self) -> Probability {
        match self.hands {
            0 => 0.,
            n => self.won as Probability / n as Probability,
        }
    }
    pub fn average(&self) -> Utility {
        match self.hands {
            0 => 0.,
            n => self.profit as Utility / n as Utility,
        }
    }
}

impl std::fmt::Display for CardStats {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:>6} hands  win rate {:>5.1}%  avg {:+.3}",
            self.hands,
            self.win_rate() * 100.,
            self.average()
        )
    }
}
