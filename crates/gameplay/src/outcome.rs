use kuhn_core::*;

/// How a hand ended.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Outcome {
    /// Cards were compared; the seat holding the higher card takes the pot.
    Showdown(Position),
    /// A seat folded; the other seat takes the pot.
    Fold(Position),
}

impl Outcome {
    /// Seat that takes the pot.
    pub fn winner(&self) -> Position {
        match self {
            Self::Showdown(winner) => *winner,
            Self::Fold(folder) => N - 1 - folder,
        }
    }
    pub fn is_showdown(&self) -> bool {
        matches!(self, Self::Showdown(_))
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Showdown(p) => write!(f, "P{} wins at showdown", p),
            Self::Fold(p) => write!(f, "P{} folds", p),
        }
    }
}
