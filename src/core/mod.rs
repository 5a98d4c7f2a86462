//! Core engine types: cards, geometry, RNG, errors, configuration.
//!
//! These are the building blocks the container and interaction layers
//! are assembled from.

pub mod card;
pub mod config;
pub mod error;
pub mod geom;
pub mod rng;

pub use card::{standard_deck, Card, Color, Rank, Suit, CARDS_PER_DECK, NUM_RANKS, NUM_SUITS};
pub use config::{GameConfig, Layout};
pub use error::EngineError;
pub use geom::{Point, Rect};
pub use rng::{GameRng, GameRngState};
