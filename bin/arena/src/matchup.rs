use super::settings::Settings;
use kuhn_gameroom::*;
use kuhn_gto::*;
use kuhn_players::*;

/// A pairing of agent kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Matchup {
    /// The three mixed matchups
    All,
    GtoVsHuman,
    ExploitVsHuman,
    GtoVsExploit,
    /// Equilibrium self-play, a zero-profit baseline
    GtoVsGto,
}

impl Matchup {
    pub fn expand(&self) -> Vec<Self> {
        match self {
            Self::All => vec![Self::GtoVsHuman, Self::ExploitVsHuman, Self::GtoVsExploit],
            other => vec![*other],
        }
    }
    pub const fn label(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::GtoVsHuman => "gto_vs_human",
            Self::ExploitVsHuman => "exploit_vs_human",
            Self::GtoVsExploit => "gto_vs_exploit",
            Self::GtoVsGto => "gto_vs_gto",
        }
    }
    /// Builds fresh agents and plays the matchup.
    pub fn run(&self, settings: &Settings) -> anyhow::Result<Session> {
        let oracle = Oracle::new(settings.alpha())?;
        let arena = Arena::new(settings.hands(), settings.seed()).mirrored(settings.mirror());
        let gto = || Gto::new(oracle.clone());
        let human = || HumanLike::new(settings.bias());
        let exploiter = || Exploiter::new(oracle.clone());
        let session = match self {
            Self::GtoVsHuman => arena.run(&mut gto(), &mut human()),
            Self::ExploitVsHuman => arena.run(&mut exploiter(), &mut human()),
            Self::GtoVsExploit => arena.run(&mut gto(), &mut exploiter()),
            Self::GtoVsGto => arena.run(&mut gto().named("GTO-A"), &mut gto().named("GTO-B")),
            Self::All => anyhow::bail!("expand `all` before running"),
        };
        Ok(session)
    }
}

impl std::fmt::Display for Matchup {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
