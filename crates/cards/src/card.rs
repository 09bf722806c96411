use kuhn_core::*;

/// A Kuhn poker card.
///
/// The deck holds exactly one card of each rank, so a rank fully identifies
/// a card. The derived ordering is the showdown ordering: the higher card
/// always wins, and ties are impossible because two seats never share a rank.
///
/// # Serialization
///
/// Cards serialize as their one-letter symbol (`"J"`, `"Q"`, `"K"`), which is
/// also the format accepted by [`TryFrom<&str>`].
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub enum Card {
    #[serde(rename = "J")]
    Jack = 0,
    #[serde(rename = "Q")]
    Queen = 1,
    #[serde(rename = "K")]
    King = 2,
}

impl Card {
    /// All cards in ascending rank.
    pub const fn all() -> [Self; RANKS] {
        [Self::Jack, Self::Queen, Self::King]
    }
    /// True if this card wins a showdown against `other`.
    pub fn beats(&self, other: &Self) -> bool {
        self > other
    }
    /// Single-character symbol.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }
    /// Human-readable name.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
        }
    }
}

/// u8 isomorphism
/// each card is mapped to its rank index 0..3
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c as u8
    }
}
impl TryFrom<u8> for Card {
    type Error = anyhow::Error;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(Self::Jack),
            1 => Ok(Self::Queen),
            2 => Ok(Self::King),
            _ => Err(anyhow::anyhow!("card index {} out of range", n)),
        }
    }
}

/// str isomorphism
impl TryFrom<&str> for Card {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_uppercase().as_str() {
            "J" | "JACK" => Ok(Self::Jack),
            "Q" | "QUEEN" => Ok(Self::Queen),
            "K" | "KING" => Ok(Self::King),
            _ => Err(anyhow::anyhow!("invalid card {:?}", s)),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_are_ordered() {
        assert!(Card::Jack < Card::Queen);
        assert!(Card::Queen < Card::King);
        assert!(Card::King.beats(&Card::Jack));
        assert!(!Card::Jack.beats(&Card::Queen));
    }
    #[test]
    fn bijective_u8() {
        for card in Card::all() {
            assert_eq!(Card::try_from(u8::from(card)).unwrap(), card);
        }
        assert!(Card::try_from(3u8).is_err());
    }
    #[test]
    fn parse_symbols() {
        for card in Card::all() {
            assert_eq!(Card::try_from(card.symbol()).unwrap(), card);
        }
        assert_eq!(Card::try_from(" king ").unwrap(), Card::King);
        assert!(Card::try_from("A").is_err());
    }
    #[test]
    fn serde_symbols() {
        assert_eq!(serde_json::to_string(&Card::Queen).unwrap(), "\"Q\"");
        assert_eq!(serde_json::from_str::<Card>("\"K\"").unwrap(), Card::King);
    }
}
