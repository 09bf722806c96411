//! Card representation and dealing for Kuhn poker.
//!
//! ## Core Types
//!
//! - [`Card`] — One of three ranks, ordered Jack < Queen < King
//! - [`Deck`] — The remaining cards, drawn without replacement
//! - [`Deal`] — The two private cards of a hand, one per seat
mod card;
mod deal;
mod deck;

pub use card::*;
pub use deal::*;
pub use deck::*;
