/// A player decision in Kuhn poker.
///
/// There is a single bet size, so no variant carries an amount: BET and CALL
/// each move exactly [`BET`](kuhn_core::BET) chips from the actor into the pot.
/// Which actions are legal depends only on the betting history; see
/// [`Node::legal`](crate::Node::legal).
///
/// # Serialization
///
/// Actions serialize as upper-case words (`"CHECK"`, `"BET"`, `"CALL"`,
/// `"FOLD"`), the same format [`TryFrom<&str>`] parses.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Ord, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    Check,
    Bet,
    Call,
    Fold,
}

impl Action {
    /// All actions in canonical order.
    pub const fn all() -> [Self; 4] {
        [Self::Check, Self::Bet, Self::Call, Self::Fold]
    }
    /// True if this action opens the betting.
    pub fn is_aggro(&self) -> bool {
        matches!(self, Self::Bet)
    }
    /// True if this is a response to an outstanding bet.
    pub fn is_response(&self) -> bool {
        matches!(self, Self::Call | Self::Fold)
    }
    /// Chips the actor commits with this action.
    pub fn amount(&self) -> kuhn_core::Chips {
        match self {
            Self::Bet | Self::Call => kuhn_core::BET,
            Self::Check | Self::Fold => 0,
        }
    }
    /// Dense index for per-action counters.
    pub const fn index(&self) -> usize {
        *self as usize
    }
    /// Compact symbol for history strings (e.g., "XBC").
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Check => "X",
            Self::Bet => "B",
            Self::Call => "C",
            Self::Fold => "F",
        }
    }
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Check => "Check",
            Self::Bet => "Bet",
            Self::Call => "Call",
            Self::Fold => "Fold",
        }
    }
}

impl From<Action> for u8 {
    fn from(action: Action) -> Self {
        action as u8
    }
}
impl TryFrom<u8> for Action {
    type Error = anyhow::Error;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::all()
            .get(value as usize)
            .copied()
            .ok_or_else(|| anyhow::anyhow!("action index {} out of range", value))
    }
}

impl TryFrom<&str> for Action {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_uppercase().as_str() {
            "CHECK" | "X" => Ok(Self::Check),
            "BET" | "B" => Ok(Self::Bet),
            "CALL" | "C" => Ok(Self::Call),
            "FOLD" | "F" => Ok(Self::Fold),
            _ => Err(anyhow::anyhow!("invalid action {:?}", s)),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Check => write!(f, "CHECK"),
            Self::Bet => write!(f, "BET"),
            Self::Call => write!(f, "CALL"),
            Self::Fold => write!(f, "FOLD"),
        }
    }
}
