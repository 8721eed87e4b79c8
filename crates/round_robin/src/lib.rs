//! Round-robin match scheduling
//!
//! This crate provides:
//! - Pairing of every player against every other player exactly once
//! - Bye handling for odd player counts
//! - Text rendering of the resulting schedule
//!
//! Player `x` meets player `y` in round `r` when `x + y ≡ r (mod n - 1)`,
//! and meets the last player `n` when `2x ≡ r (mod n - 1)`.
//!
//! # Usage
//!
//! ```bash
//! # Schedule the default eight players
//! cargo run -p round_robin
//!
//! # Schedule seven players (one sits out each round)
//! cargo run -p round_robin -- 7
//! ```

mod congruence;
mod error;
mod player;
mod schedule;
mod scheduler;

pub use congruence::*;
pub use error::*;
pub use player::{PlayerCount, PlayerNumber, MIN_PLAYERS};
pub use schedule::*;
pub use scheduler::*;
