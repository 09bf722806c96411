//! Core type aliases, constants, and runtime utilities for the Kuhn arena.
//!
//! Every other crate in the workspace builds on the units and parameters
//! defined here, so the numbers that shape the game (ante, bet size) and
//! the opponent model (window capacity, thresholds) live in one place.
#![allow(dead_code)]

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Chip counts, contributions, and net payoffs.
pub type Chips = i16;
/// Seat index at the table (0 acts first).
pub type Position = usize;
/// Action probabilities, frequencies, and bet-size parameters.
pub type Probability = f64;
/// Expected values and profits in chips.
pub type Utility = f64;
/// The single random source threaded through a tournament.
pub type Dice = rand::rngs::SmallRng;

/// Seeds the random source for a reproducible run.
pub fn dice(seed: u64) -> Dice {
    <Dice as rand::SeedableRng>::seed_from_u64(seed)
}

// ============================================================================
// GAME PARAMETERS
// ============================================================================
/// Number of seats at the table.
pub const N: usize = 2;
/// Number of ranks in the deck (J, Q, K).
pub const RANKS: usize = 3;
/// Chips each seat posts before the deal.
pub const ANTE: Chips = 1;
/// Size of the single bet (and of the call that matches it).
pub const BET: Chips = 1;

// ============================================================================
// EQUILIBRIUM TABLE
// The Kuhn equilibrium is a one-parameter family indexed by the Jack bluff
// frequency α ∈ [0, 1/3]. King opens with 3α, so α = 1/3 is the upper bound.
// ============================================================================
/// Canonical first-to-act Jack bluff frequency.
pub const DEFAULT_ALPHA: Probability = 1. / 3.;
/// Largest α for which 3α is still a probability.
pub const MAX_ALPHA: Probability = 1. / 3.;
/// Tolerance on probability sums in strategy tables.
pub const TOLERANCE: Probability = 1e-9;

// ============================================================================
// OPPONENT MODEL
// Sliding windows of observed actions per decision context, and the fixed
// thresholds that switch the exploitative engine away from equilibrium.
// ============================================================================
/// Capacity of each per-context observation window.
pub const WINDOW_CAPACITY: usize = 100;
/// Observations required before a window's frequencies are trusted.
pub const MIN_SAMPLES: usize = 20;
/// Opponent fold-to-bet rate above which Jack bluffs more.
pub const FOLD_THRESHOLD: Probability = 0.60;
/// Opponent first-to-act bet rate above which Queen calls wider.
pub const AGGRESSION_THRESHOLD: Probability = 0.40;
/// Opponent call-vs-bet rate above which betting becomes value-only.
pub const STATION_THRESHOLD: Probability = 0.70;

// ============================================================================
// HUMAN-LIKE AGENT
// ============================================================================
/// Opponent actions remembered for pattern seeking.
pub const RECENT_MEMORY: usize = 20;
/// Most recent opponent actions inspected when looking for streaks.
pub const RECENT_STREAK: usize = 5;
/// Bets in the streak at or above which Queen calls more.
pub const AGGRESSIVE_STREAK: usize = 3;
/// Bets in the streak at or below which Queen folds more.
pub const PASSIVE_STREAK: usize = 1;
/// Extra Queen call probability against an aggressive streak.
pub const HERO_CALL_TILT: Probability = 0.25;
/// Queen call probability given up against a passive streak.
pub const GIVE_UP_TILT: Probability = 0.10;

// ============================================================================
// RUNTIME
// ============================================================================
/// Deadline for an external decision source before falling back.
pub const DECISION_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(10);
/// Hands between tournament progress log messages.
pub const LOG_INTERVAL: u64 = 1000;

/// Milliseconds since the unix epoch, used to stamp hand records.
pub fn timestamp() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", timestamp() / 1000)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Global interrupt flag checked between hands.
static INTERRUPTED: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);
/// Optional run deadline from the ARENA_DURATION env var.
static DEADLINE: std::sync::OnceLock<std::time::Instant> = std::sync::OnceLock::new();

/// Check if a graceful stop was requested or the deadline passed.
pub fn interrupted() -> bool {
    INTERRUPTED.load(std::sync::atomic::Ordering::Relaxed)
        || DEADLINE
            .get()
            .map_or(false, |d| std::time::Instant::now() >= *d)
}
/// Request a graceful stop after the hand in progress.
pub fn interrupt() {
    INTERRUPTED.store(true, std::sync::atomic::Ordering::Relaxed);
}
/// Register graceful interrupt handler. Type "Q" + Enter to stop after the current hand.
/// Optionally set ARENA_DURATION env var (e.g., "2h", "30m") for timed runs.
pub fn brb() {
    if let Ok(duration) = std::env::var("ARENA_DURATION") {
        if let Some(deadline) = parse_duration(&duration) {
            let _ = DEADLINE.set(std::time::Instant::now() + deadline);
            log::info!("arena will stop after {}", duration);
        }
    }
    std::thread::spawn(|| {
        loop {
            let ref mut buffer = String::new();
            match std::io::stdin().read_line(buffer) {
                Ok(0) | Err(_) => break,
                Ok(_) if buffer.trim().to_uppercase() == "Q" => {
                    log::warn!("graceful interrupt requested, finishing current hand...");
                    interrupt();
                    break;
                }
                Ok(_) => continue,
            }
        }
    });
}
/// Parse duration string like "30s", "5m", "2h", "1d" into Duration.
fn parse_duration(s: &str) -> Option<std::time::Duration> {
    let s = s.trim();
    let (i, _) = s.char_indices().last()?;
    let (num, unit) = s.split_at(i);
    let value: u64 = num.parse().ok()?;
    match unit {
        "s" => Some(std::time::Duration::from_secs(value)),
        "m" => Some(std::time::Duration::from_secs(value * 60)),
        "h" => Some(std::time::Duration::from_secs(value * 3600)),
        "d" => Some(std::time::Duration::from_secs(value * 86400)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn durations() {
        assert_eq!(parse_duration("30s"), Some(std::time::Duration::from_secs(30)));
        assert_eq!(parse_duration("2h"), Some(std::time::Duration::from_secs(7200)));
        assert_eq!(parse_duration(" 5m "), Some(std::time::Duration::from_secs(300)));
        assert_eq!(parse_duration("5w"), None);
        assert_eq!(parse_duration(""), None);
        assert_eq!(parse_duration("5é"), None);
        assert_eq!(parse_duration("é"), None);
    }
    #[test]
    fn dice_is_reproducible() {
        let a = (0..16).map(|_| dice(42).random::<u64>()).collect::<Vec<_>>();
        let ref mut d = dice(42);
        let b = (0..16).map(|_| d.random::<u64>()).collect::<Vec<_>>();
        assert!(a.iter().all(|x| *x == a[0]));
        assert_eq!(a[0], b[0]);
    }
    #[test]
    fn thresholds_are_probabilities() {
        for p in [FOLD_THRESHOLD, AGGRESSION_THRESHOLD, STATION_THRESHOLD, DEFAULT_ALPHA] {
            assert!((0.0..=1.0).contains(&p));
        }
        assert!(MIN_SAMPLES <= WINDOW_CAPACITY);
        assert!(RECENT_STREAK <= RECENT_MEMORY);
    }
}
