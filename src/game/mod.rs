//! Game assembly: the deal, the move engine, and the state facade.

pub mod deal;
pub mod engine;
pub mod state;

pub use deal::{NUM_CONTAINERS, NUM_FOUNDATIONS, NUM_TABLEAUS};
pub use state::{DrawOutcome, GameState, PressOutcome, ReleaseOutcome};
