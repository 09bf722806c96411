//! Hand runner and tournament driver.
//!
//! Agents never touch the [`Game`](kuhn_gameplay::Game) directly: the
//! [`Dealer`] asks the acting seat for a decision, applies it, and hands
//! the finished [`Record`](kuhn_gameplay::Record) back to both agents.
//! The [`Arena`] repeats that strictly in sequence, so an agent's model is
//! always fully updated before its next hand starts.
//!
//! ## Coordination
//!
//! - [`Agent`] — Trait for pluggable decision makers
//! - [`Dealer`] — Plays one hand to completion
//! - [`Arena`] — Seeded tournament with seat alternation and mirrored deals
//!
//! ## Results
//!
//! - [`Session`] — Every completed hand of one matchup
//! - [`Entry`] — One hand plus which agent sat where
mod agent;
mod arena;
mod dealer;
mod entry;
mod session;

pub use agent::*;
pub use arena::*;
pub use dealer::*;
pub use entry::*;
pub use session::*;
