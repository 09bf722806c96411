use super::matchup::Matchup;
use std::path::PathBuf;

/// Command-line flags. Anything given here overrides the settings file.
#[derive(Debug, Clone, Default, clap::Parser)]
#[command(name = "arena", about = "Kuhn poker agent arena", version)]
pub struct Args {
    /// Hands per matchup
    #[arg(long)]
    pub hands: Option<u64>,
    /// Seed for dealing and every agent's sampling
    #[arg(long)]
    pub seed: Option<u64>,
    /// Equilibrium Jack bluff frequency in [0, 1/3]
    #[arg(long)]
    pub alpha: Option<f64>,
    /// Which matchup to run
    #[arg(long, value_enum)]
    pub matchup: Option<Matchup>,
    /// Replay each deal with seats swapped
    #[arg(long)]
    pub mirror: bool,
    /// Directory for JSON journals
    #[arg(long)]
    pub output: Option<PathBuf>,
    /// JSON settings file
    #[arg(long)]
    pub config: Option<PathBuf>,
}
