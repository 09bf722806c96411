use kuhn_core::*;

/// The Jack bluff frequency that indexes the equilibrium family.
///
/// King opens with probability 3α, so only α ∈ [0, 1/3] yields a valid
/// strategy. Construction is the single place that range is enforced.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Alpha(Probability);

impl Alpha {
    pub fn new(alpha: Probability) -> anyhow::Result<Self> {
        anyhow::ensure!(
            alpha.is_finite() && (0. ..=MAX_ALPHA).contains(&alpha),
            "bluff frequency α = {} outside [0, 1/3]",
            alpha
        );
        Ok(Self(alpha))
    }
    pub fn value(&self) -> Probability {
        self.0
    }
}

impl Default for Alpha {
    fn default() -> Self {
        Self(DEFAULT_ALPHA)
    }
}

impl TryFrom<f64> for Alpha {
    type Error = anyhow::Error;
    fn try_from(alpha: f64) -> Result<Self, Self::Error> {
        Self::new(alpha)
    }
}
impl From<Alpha> for f64 {
    fn from(alpha: Alpha) -> Self {
        alpha.0
    }
}

impl std::fmt::Display for Alpha {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "α={:.4}", self.0)
    }
}
