//! Aggregate statistics over completed matchups.
//!
//! Consumes a [`Session`](kuhn_gameroom::Session) and never plays a hand.
//!
//! ## Statistics
//!
//! - [`Summary`] — Per-matchup report with a text rendering
//! - [`Standing`] — One agent's profit, spread, actions, and card results
//! - [`Interval`] — Student-t confidence interval on mean profit per hand
//! - [`CardStats`] — Results while holding one card
//!
//! ## Persistence
//!
//! - [`Journal`] — Writes sessions and summaries as JSON files
mod cardstats;
mod interval;
mod journal;
mod standing;
mod summary;

pub use cardstats::*;
pub use interval::*;
pub use journal::*;
pub use standing::*;
pub use summary::*;
