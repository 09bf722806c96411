//! Game-theoretic optimal play for Kuhn poker.
//!
//! The equilibria of Kuhn poker form a one-parameter family indexed by the
//! first-to-act Jack bluff frequency α ∈ [0, 1/3]. This crate writes that
//! family down in closed form, validates it as plain data, samples from it,
//! and measures any strategy against it exactly.
//!
//! ## Strategies
//!
//! - [`Policy`] — Distribution over the legal actions of one decision point
//! - [`Strategy`] — Anything that assigns a policy to each (card, node)
//! - [`Table`] — Explicit strategy data with startup validation
//! - [`Alpha`] — The validated bluff parameter
//! - [`Equilibrium`] — Closed-form Nash strategy for a given α
//! - [`Oracle`] — Validated equilibrium table ready to be sampled
//!
//! ## Evaluation
//!
//! - [`evaluate`] — Exact expected payoff of a strategy profile
//! - [`best_response`] — Best pure counter-strategy and its value
//! - [`exploitability`] — How much a best responder gains per hand
mod alpha;
mod equilibrium;
mod evaluation;
mod oracle;
mod policy;
mod strategy;
mod table;

pub use alpha::*;
pub use equilibrium::*;
pub use evaluation::*;
pub use oracle::*;
pub use policy::*;
pub use strategy::*;
pub use table::*;
