//! Turn engine: board and turn state owned and advanced together.
//!
//! `GameRules` is the single authority on legality, capture chains, turn
//! order, and win detection. UIs, network layers, and search agents all go
//! through it, so every consumer observes identical outcomes.

pub mod engine;

pub use engine::{GameRules, TurnState};
