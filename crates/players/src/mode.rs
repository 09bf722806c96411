use super::deviation::Deviation;

/// What the exploitative engine is doing for one seat.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Mode {
    /// Too few observations in every relevant context; play equilibrium.
    Learning,
    /// Enough observations, but no leak crosses a threshold; play equilibrium.
    Fallback,
    /// A leak crossed its threshold.
    Exploit(Deviation),
}

impl Mode {
    pub fn deviation(&self) -> Option<Deviation> {
        match self {
            Self::Exploit(deviation) => Some(*deviation),
            _ => None,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Learning => write!(f, "learning"),
            Self::Fallback => write!(f, "gto fallback"),
            Self::Exploit(deviation) => write!(f, "exploit ({})", deviation),
        }
    }
}
