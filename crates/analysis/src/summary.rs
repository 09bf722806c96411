use super::standing::Standing;
use kuhn_core::*;
use kuhn_gameroom::*;

/// The report for one matchup.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Summary {
    matchup: String,
    hands: u64,
    discarded: u64,
    standings: [Standing; N],
}

impl Summary {
    pub fn new(matchup: &str, session: &Session) -> Self {
        Self {
            matchup: matchup.to_string(),
            hands: session.len() as u64,
            discarded: session.discarded(),
            standings: [Standing::from_session(session, 0), Standing::from_session(session, 1)],
        }
    }
    pub fn matchup(&self) -> &str {
        &self.matchup
    }
    pub fn hands(&self) -> u64 {
        self.hands
    }
    pub fn discarded(&self) -> u64 {
        self.discarded
    }
    pub fn standing(&self, agent: usize) -> &Standing {
        &self.standings[agent]
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let rule = "=".repeat(72);
        writeln!(f, "{}", rule)?;
        writeln!(f, "{}", self.matchup.to_uppercase())?;
        writeln!(f, "{}", rule)?;
        writeln!(f, "hands played {}   discarded {}", self.hands, self.discarded)?;
        for standing in self.standings.iter() {
            write!(f, "{}", standing)?;
        }
        writeln!(f, "{}", rule)
    }
}
