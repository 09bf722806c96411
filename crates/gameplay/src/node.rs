use super::action::Action;
use kuhn_core::*;

/// A decision point of the Kuhn betting tree.
///
/// The protocol allows at most three actions, so every non-terminal history
/// is one of four prefixes. Each node fixes the acting seat and the legal
/// action set:
///
/// | node       | history       | seat | legal         |
/// |------------|---------------|------|---------------|
/// | `Open`     | (empty)       | 0    | CHECK, BET    |
/// | `Check`    | CHECK         | 1    | CHECK, BET    |
/// | `Bet`      | BET           | 1    | CALL, FOLD    |
/// | `CheckBet` | CHECK BET     | 0    | CALL, FOLD    |
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Node {
    Open,
    Check,
    Bet,
    CheckBet,
}

impl Node {
    /// All decision points in tree order.
    pub const fn all() -> [Self; 4] {
        [Self::Open, Self::Check, Self::Bet, Self::CheckBet]
    }
    /// Locates the decision point for a history. None if terminal or malformed.
    pub fn locate(history: &[Action]) -> Option<Self> {
        match history {
            [] => Some(Self::Open),
            [Action::Check] => Some(Self::Check),
            [Action::Bet] => Some(Self::Bet),
            [Action::Check, Action::Bet] => Some(Self::CheckBet),
            _ => None,
        }
    }
    /// Dense index for per-node storage.
    pub const fn index(&self) -> usize {
        *self as usize
    }
    /// Seat that acts here.
    pub const fn seat(&self) -> Position {
        match self {
            Self::Open | Self::CheckBet => 0,
            Self::Check | Self::Bet => 1,
        }
    }
    /// Legal actions here, in canonical order.
    pub const fn legal(&self) -> [Action; 2] {
        match self.context() {
            Context::Opening => [Action::Check, Action::Bet],
            Context::Facing => [Action::Call, Action::Fold],
        }
    }
    /// Card-independent situation of the actor.
    pub const fn context(&self) -> Context {
        match self {
            Self::Open | Self::Check => Context::Opening,
            Self::Bet | Self::CheckBet => Context::Facing,
        }
    }
    /// Node reached by taking `action` here. None if the hand ends or the action is illegal.
    pub fn child(&self, action: Action) -> Option<Self> {
        match (self, action) {
            (Self::Open, Action::Check) => Some(Self::Check),
            (Self::Open, Action::Bet) => Some(Self::Bet),
            (Self::Check, Action::Bet) => Some(Self::CheckBet),
            _ => None,
        }
    }
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Check => "after check",
            Self::Bet => "facing bet",
            Self::CheckBet => "facing bet after check",
        }
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The card-independent decision context.
///
/// Opponent statistics are keyed by context rather than node so that both
/// seats' observations of "first to act" (no bet outstanding) and "facing a
/// bet" pool into the same estimates.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Context {
    /// No bet outstanding: CHECK or BET.
    Opening,
    /// A bet is outstanding: CALL or FOLD.
    Facing,
}

impl Context {
    pub const fn all() -> [Self; 2] {
        [Self::Opening, Self::Facing]
    }
    /// Dense index for per-context storage.
    pub const fn index(&self) -> usize {
        *self as usize
    }
    /// Context of the decision that follows `history`. Only meaningful at a decision point.
    pub fn after(history: &[Action]) -> Self {
        match history.last() {
            Some(Action::Bet) => Self::Facing,
            _ => Self::Opening,
        }
    }
}

impl std::fmt::Display for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Opening => write!(f, "first to act"),
            Self::Facing => write!(f, "facing a bet"),
        }
    }
}
