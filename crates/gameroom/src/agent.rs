use kuhn_core::*;
use kuhn_gameplay::*;

/// Trait for entities that make Kuhn poker decisions.
///
/// Implementations range from a fixed equilibrium table to adaptive
/// opponent models and agents backed by an external decision source. The
/// dealer only ever offers an agent its own [`Partial`] view, so the
/// opponent's card is never reachable from a decision.
///
/// Decisions are synchronous: a hand does not start until every agent has
/// observed the previous one.
pub trait Agent {
    /// Display name used in logs and reports.
    fn name(&self) -> &str;
    /// Chooses an action for the seat in `recall`.
    /// Must return a member of `legal`, which is never empty.
    fn decide(&mut self, recall: &Partial, legal: &[Action], dice: &mut Dice) -> Action;
    /// Receives the completed hand with both cards revealed.
    /// Stateless agents can ignore it.
    fn observe(&mut self, _record: &Record, _seat: Position) {}
}
