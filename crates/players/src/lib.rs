//! Agent implementations for the arena.
//!
//! Concrete types implementing the [`Agent`](kuhn_gameroom::Agent) trait,
//! each owning whatever state its strategy needs. Nothing is shared between
//! agents, so two matchups never contaminate each other's statistics.
//!
//! ## Agents
//!
//! - [`Gto`] — Samples the validated equilibrium table
//! - [`HumanLike`] — Biased rule table with pattern-seeking tilt, optionally backed by a [`Source`]
//! - [`Exploiter`] — Tracks the opponent and deviates from equilibrium when thresholds fire
//!
//! ## Opponent Model
//!
//! - [`Window`] — Fixed-capacity ring buffer of observed actions
//! - [`Profile`] — Windows per (own seat, decision context)
//! - [`Mode`] — Learning, fallback to equilibrium, or exploiting
//! - [`Deviation`] — The three threshold-triggered adjustments
//!
//! ## Decision Sources
//!
//! - [`Source`] — Strict request/response contract for external deciders
//! - [`Remote`] — Source over an async [`Transport`] with a hard timeout
//! - [`Unavailable`] — Why a source could not answer
mod bias;
mod deviation;
mod exploiter;
mod gto;
mod humanlike;
mod mode;
mod profile;
mod remote;
mod source;
mod unavailable;
mod window;

pub use bias::*;
pub use deviation::*;
pub use exploiter::*;
pub use gto::*;
pub use humanlike::*;
pub use mode::*;
pub use profile::*;
pub use remote::*;
pub use source::*;
pub use unavailable::*;
pub use window::*;
