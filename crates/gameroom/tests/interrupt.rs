//! The interrupt flag is process-wide, so this lives in its own test binary.

use kuhn_core::*;
use kuhn_gameplay::*;
use kuhn_gameroom::*;

/// Plays passively and raises the interrupt flag midway through hand `stop`.
struct Quitter {
    seen: u64,
    stop: u64,
}
impl Agent for Quitter {
    fn name(&self) -> &str {
        "quitter"
    }
    fn decide(&mut self, _: &Partial, legal: &[Action], _: &mut Dice) -> Action {
        if self.seen == self.stop {
            interrupt();
        }
        match legal.contains(&Action::Check) {
            true => Action::Check,
            false => Action::Call,
        }
    }
    fn observe(&mut self, _: &Record, _: Position) {
        self.seen += 1;
    }
}

struct Caller;
impl Agent for Caller {
    fn name(&self) -> &str {
        "caller"
    }
    fn decide(&mut self, _: &Partial, legal: &[Action], _: &mut Dice) -> Action {
        match legal.contains(&Action::Call) {
            true => Action::Call,
            false => Action::Bet,
        }
    }
}

#[test]
fn interrupted_arena_keeps_only_completed_hands() {
    assert!(!interrupted());
    let mut quitter = Quitter { seen: 0, stop: 5 };
    let session = Arena::new(100, 42).run(&mut quitter, &mut Caller);
    assert!(interrupted());
    assert_eq!(session.len(), 6);
    assert_eq!(session.discarded(), 0);
    for (i, entry) in session.entries().iter().enumerate() {
        assert_eq!(entry.record().hand(), i as u64);
        assert!(entry.record().is_zero_sum());
        assert!(!entry.record().actions().is_empty());
    }
    let session = Arena::new(100, 42).run(&mut Quitter { seen: 0, stop: 0 }, &mut Caller);
    assert!(session.is_empty());
}
