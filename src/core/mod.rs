//! Core building blocks shared by the whole engine: player tags and RNG.
//!
//! Everything here is game-shape-agnostic; the board graph and rules live in
//! their own modules and depend on this one, never the other way around.

pub mod player;
pub mod rng;

pub use player::{InvalidPlayer, Player};
pub use rng::SearchRng;
