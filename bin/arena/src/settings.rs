use super::args::Args;
use super::matchup::Matchup;
use kuhn_gto::*;
use kuhn_players::Bias;
use std::path::Path;
use std::path::PathBuf;

/// Runtime configuration.
///
/// Loaded from an optional JSON file, where every field may be omitted,
/// then overridden by command-line flags. Exploit thresholds are not here:
/// they are fixed constants.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Settings {
    hands: u64,
    seed: u64,
    alpha: Alpha,
    matchup: Matchup,
    mirror: bool,
    output: PathBuf,
    bias: Bias,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            hands: 1000,
            seed: 42,
            alpha: Alpha::default(),
            matchup: Matchup::All,
            mirror: false,
            output: PathBuf::from("results"),
            bias: Bias::default(),
        }
    }
}

impl Settings {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("read settings {}: {}", path.display(), e))?;
        serde_json::from_str(&text).map_err(|e| anyhow::anyhow!("parse settings {}: {}", path.display(), e))
    }
    /// Applies command-line flags on top of these settings.
    pub fn overridden(self, args: &Args) -> anyhow::Result<Self> {
        Ok(Self {
            hands: args.hands.unwrap_or(self.hands),
            seed: args.seed.unwrap_or(self.seed),
            alpha: match args.alpha {
                Some(alpha) => Alpha::new(alpha)?,
                None => self.alpha,
            },
            matchup: args.matchup.unwrap_or(self.matchup),
            mirror: args.mirror || self.mirror,
            output: args.output.clone().unwrap_or(self.output),
            bias: self.bias,
        })
    }
    /// Refuses to run with anything that would make a table invalid.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(self.hands > 0, "hands must be positive");
        Oracle::new(self.alpha)?;
        self.bias.validate()?;
        Ok(())
    }
    pub fn with_hands(self, hands: u64) -> Self {
        Self { hands, ..self }
    }
    pub fn hands(&self) -> u64 {
        self.hands
    }
    pub fn seed(&self) -> u64 {
        self.seed
    }
    pub fn alpha(&self) -> Alpha {
        self.alpha
    }
    pub fn matchup(&self) -> Matchup {
        self.matchup
    }
    pub fn mirror(&self) -> bool {
        self.mirror
    }
    pub fn output(&self) -> &Path {
        &self.output
    }
    pub fn bias(&self) -> Bias {
        self.bias
    }
}

impl std::fmt::Display for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} hands, seed {}, {}, matchup {}{}, output {}",
            self.hands,
            self.seed,
            self.alpha,
            self.matchup,
            if self.mirror { ", mirrored" } else { "" },
            self.output.display()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }
    #[test]
    fn partial_file_keeps_defaults() {
        let settings = serde_json::from_str::<Settings>(r#"{"hands": 50, "matchup": "gto-vs-gto"}"#).unwrap();
        assert_eq!(settings.hands(), 50);
        assert_eq!(settings.matchup(), Matchup::GtoVsGto);
        assert_eq!(settings.seed(), 42);
    }
    #[test]
    fn file_alpha_is_checked() {
        assert!(serde_json::from_str::<Settings>(r#"{"alpha": 0.5}"#).is_err());
    }
    #[test]
    fn flags_override_file() {
        let args = Args {
            hands: Some(7),
            mirror: true,
            ..Args::default()
        };
        let settings = Settings::default().overridden(&args).unwrap();
        assert_eq!(settings.hands(), 7);
        assert!(settings.mirror());
        assert_eq!(settings.seed(), 42);
    }
    #[test]
    fn bad_flag_alpha_is_fatal() {
        let args = Args {
            alpha: Some(0.9),
            ..Args::default()
        };
        assert!(Settings::default().overridden(&args).is_err());
    }
    #[test]
    fn zero_hands_is_fatal() {
        assert!(Settings::default().with_hands(0).validate().is_err());
    }
    #[test]
    fn bad_bias_is_fatal() {
        let settings = serde_json::from_str::<Settings>(r#"{"bias": {"open": [0.1, 0.1, 1.5]}}"#).unwrap();
        assert!(settings.validate().is_err());
    }
}
