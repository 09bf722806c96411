use kuhn_core::*;

/// Whose turn it is to act.
///
/// Kuhn poker has no chance nodes after the deal, so a hand is always either
/// waiting on exactly one seat or finished.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum Turn {
    Terminal,
    Choice(Position),
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Choice(c) => write!(f, "P{}", c),
            Self::Terminal => write!(f, "-"),
        }
    }
}
