//! Kuhn poker engine: betting protocol, legal actions, and settlement.
//!
//! One street, one bet size, no raises. Seat 0 opens with CHECK or BET;
//! the hand ends at a showdown (check-check, or a called bet) or a fold.
//!
//! ## State Representation
//!
//! - [`Game`] — Cards, contributions, and history of the hand in progress
//! - [`History`] — Append-only action sequence of the current hand
//! - [`Partial`] — One seat's view: own card and public history only
//!
//! ## Actions
//!
//! - [`Action`] — CHECK, BET, CALL, or FOLD
//! - [`Node`] — The four decision points of the betting tree
//! - [`Context`] — Card-independent situation: opening or facing a bet
//! - [`Turn`] — Whose action it is, or terminal
//!
//! ## Resolution
//!
//! - [`Outcome`] — Showdown winner or folding seat
//! - [`Record`] — Completed hand: cards, actions, zero-sum payoffs
//! - [`IllegalAction`] — Rejected transition; the state is left untouched
mod action;
mod game;
mod history;
mod illegal;
mod node;
mod outcome;
mod partial;
mod record;
mod turn;

pub use action::*;
pub use game::*;
pub use history::*;
pub use illegal::*;
pub use node::*;
pub use outcome::*;
pub use partial::*;
pub use record::*;
pub use turn::*;
