use super::deviation::Deviation;
use super::mode::Mode;
use super::window::Window;
use kuhn_core::*;
use kuhn_gameplay::*;

/// What one agent has seen its opponent do.
///
/// Windows are keyed by the observer's own seat and the card-independent
/// [`Context`] the opponent acted in. Keying by own seat keeps the two
/// halves of a seat-alternating matchup apart: from seat 0 we see the
/// opponent act after our check or face our bet, from seat 1 we see it
/// open and face our bet after its own check.
///
/// A profile belongs to exactly one agent. It is created on the first
/// observation and lives only as long as that agent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    windows: [[Window; 2]; N],
}

impl Profile {
    pub fn window(&self, seat: Position, context: Context) -> &Window {
        &self.windows[seat][context.index()]
    }
    /// Appends every opponent action of a completed hand played from `seat`.
    pub fn observe(&mut self, record: &Record, seat: Position) {
        let actions = record.actions();
        for (i, (actor, action)) in record.history().seated().enumerate() {
            if actor != seat {
                let context = Context::after(&actions[..i]);
                self.windows[seat][context.index()].push(action);
            }
        }
    }
    /// Evaluates the threshold rules for decisions taken from `seat`.
    ///
    /// Rules are checked in [`Deviation`] priority order and only the first
    /// that fires is returned. Each rule needs its own window to hold
    /// enough samples.
    pub fn mode(&self, seat: Position) -> Mode {
        if Context::all().iter().all(|c| !self.window(seat, *c).sufficient()) {
            return Mode::Learning;
        }
        let opening = self.window(seat, Context::Opening);
        let facing = self.window(seat, Context::Facing);
        if facing.sufficient() && facing.frequency(Action::Fold) > FOLD_THRESHOLD {
            return Mode::Exploit(Deviation::Bluff);
        }
        if opening.sufficient() && opening.frequency(Action::Bet) > AGGRESSION_THRESHOLD {
            return Mode::Exploit(Deviation::CallDown);
        }
        if facing.sufficient() && facing.frequency(Action::Call) > STATION_THRESHOLD {
            return Mode::Exploit(Deviation::ValueOnly);
        }
        Mode::Fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kuhn_cards::*;

    fn replay(actions: &[Action]) -> Record {
        Record::replay(0, Deal::from([Card::Queen, Card::Jack]), actions).unwrap()
    }

    #[test]
    fn records_only_opponent_actions() {
        let mut profile = Profile::default();
        profile.observe(&replay(&[Action::Check, Action::Bet, Action::Fold]), 0);
        assert_eq!(profile.window(0, Context::Opening).count(Action::Bet), 1);
        assert!(profile.window(0, Context::Facing).is_empty());
        assert!(profile.window(1, Context::Opening).is_empty());
        profile.observe(&replay(&[Action::Check, Action::Bet, Action::Fold]), 1);
        assert_eq!(profile.window(1, Context::Opening).count(Action::Check), 1);
        assert_eq!(profile.window(1, Context::Facing).count(Action::Fold), 1);
    }
    #[test]
    fn learning_until_enough_samples() {
        let mut profile = Profile::default();
        for _ in 0..MIN_SAMPLES - 1 {
            profile.observe(&replay(&[Action::Bet, Action::Fold]), 0);
        }
        assert_eq!(profile.mode(0), Mode::Learning);
        profile.observe(&replay(&[Action::Bet, Action::Fold]), 0);
        assert_eq!(profile.mode(0), Mode::Exploit(Deviation::Bluff));
        assert_eq!(profile.mode(1), Mode::Learning);
    }
    #[test]
    fn aggressive_opener_triggers_call_down() {
        let mut profile = Profile::default();
        for _ in 0..30 {
            profile.observe(&replay(&[Action::Bet, Action::Call]), 1);
        }
        assert_eq!(profile.mode(1), Mode::Exploit(Deviation::CallDown));
    }
    #[test]
    fn calling_station_triggers_value_only() {
        let mut profile = Profile::default();
        for _ in 0..30 {
            profile.observe(&replay(&[Action::Bet, Action::Call]), 0);
        }
        assert_eq!(profile.mode(0), Mode::Exploit(Deviation::ValueOnly));
    }
    #[test]
    fn fold_rule_has_priority() {
        let mut profile = Profile::default();
        // seat 1 opponent: opens with a bet and folds to our bet after its check
        for _ in 0..30 {
            profile.observe(&replay(&[Action::Bet, Action::Fold]), 1);
            profile.observe(&replay(&[Action::Check, Action::Bet, Action::Fold]), 1);
        }
        assert_eq!(profile.mode(1), Mode::Exploit(Deviation::Bluff));
    }
    #[test]
    fn balanced_opponent_falls_back() {
        let mut profile = Profile::default();
        for i in 0..40 {
            let line = match i % 3 {
                0 => vec![Action::Bet, Action::Call],
                1 => vec![Action::Bet, Action::Fold],
                _ => vec![Action::Check, Action::Check],
            };
            profile.observe(&replay(&line), 0);
        }
        assert_eq!(profile.mode(0), Mode::Fallback);
    }
}
