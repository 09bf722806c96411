use kuhn_core::*;

/// Two-sided 95% standard normal quantile.
const Z: f64 = 1.959963984540054;

/// A 95% confidence interval on the mean of per-hand profits.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Interval {
    mean: Utility,
    lower: Utility,
    upper: Utility,
}

impl Interval {
    /// Student-t interval around the sample mean. Degenerate below two samples.
    pub fn from_samples(samples: &[Utility]) -> Self {
        let n = samples.len();
        let mean = mean(samples);
        if n < 2 {
            return Self {
                mean,
                lower: mean,
                upper: mean,
            };
        }
        let margin = critical(n - 1) * deviation(samples) / (n as Utility).sqrt();
        Self {
            mean,
            lower: mean - margin,
            upper: mean + margin,
        }
    }
    pub fn mean(&self) -> Utility {
        self.mean
    }
    pub fn lower(&self) -> Utility {
        self.lower
    }
    pub fn upper(&self) -> Utility {
        self.upper
    }
    pub fn contains(&self, x: Utility) -> bool {
        self.lower <= x && x <= self.upper
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "[{:+.3}, {:+.3}]", self.lower, self.upper)
    }
}

/// Sample mean. Zero when empty.
pub fn mean(samples: &[Utility]) -> Utility {
    match samples.len() {
        0 => 0.,
        n => samples.iter().sum::<Utility>() / n as Utility,
    }
}

/// Sample standard deviation with Bessel's correction. Zero below two samples.
pub fn deviation(samples: &[Utility]) -> Utility {
    match samples.len() {
        0 | 1 => 0.,
        n => {
            let m = mean(samples);
            let ss = samples.iter().map(|x| (x - m).powi(2)).sum::<Utility>();
            (ss / (n - 1) as Utility).sqrt()
        }
    }
}

/// Two-sided 95% Student-t critical value for `df` degrees of freedom.
///
/// Tabulated up to 4 degrees of freedom, where the expansion undershoots.
/// Beyond that, Cornish-Fisher expansion around the normal quantile; within
/// 1e-3 of the exact value from 10 degrees of freedom on.
pub fn critical(df: usize) -> f64 {
    match df {
        0 | 1 => 12.7062,
        2 => 4.3027,
        3 => 3.1824,
        4 => 2.7764,
        df => {
            let v = df as f64;
            let z = Z;
            let z3 = z.powi(3);
            let z5 = z.powi(5);
            let z7 = z.powi(7);
            z + (z3 + z) / (4. * v)
                + (5. * z5 + 16. * z3 + 3. * z) / (96. * v.powi(2))
                + (3. * z7 + 19. * z5 + 17. * z3 - 15. * z) / (384. * v.powi(3))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn critical_values() {
        assert_eq!(critical(0), critical(1));
        assert!((critical(1) - 12.706).abs() < 1e-3);
        assert!((critical(2) - 4.303).abs() < 1e-3);
        assert!((critical(4) - 2.776).abs() < 1e-3);
        assert!((critical(5) - 2.5706).abs() < 0.01);
        assert!(critical(4) > critical(5));
        assert!((critical(10) - 2.2281).abs() < 1e-3);
        assert!((critical(30) - 2.0423).abs() < 1e-3);
        assert!((critical(100_000) - Z).abs() < 1e-4);
    }
    #[test]
    fn interval_brackets_mean() {
        let samples = [1., -1., 2., -2., 1., -1., 1., -1.];
        let interval = Interval::from_samples(&samples);
        assert_eq!(interval.mean(), 0.);
        assert!(interval.contains(0.));
        assert!((interval.upper() + interval.lower()).abs() < 1e-12);
    }
    #[test]
    fn degenerate_samples() {
        let single = Interval::from_samples(&[2.]);
        assert_eq!((single.lower(), single.upper()), (2., 2.));
        let empty = Interval::from_samples(&[]);
        assert_eq!(empty.mean(), 0.);
    }
    #[test]
    fn two_hands_use_wide_interval() {
        let interval = Interval::from_samples(&[1., -1.]);
        let half = (interval.upper() - interval.lower()) / 2.;
        assert!((half - 12.7062 * deviation(&[1., -1.]) / 2f64.sqrt()).abs() < 1e-9);
    }
    #[test]
    fn sample_deviation() {
        assert!((deviation(&[2., 4., 4., 4., 5., 5., 7., 9.]) - 2.138).abs() < 1e-3);
    }
}
