//! # klondike-engine
//!
//! The rules-and-interaction core of a Klondike solitaire game: the
//! authoritative model of cards and containers, the legality rules for
//! moving cards between them, and the pointer-driven state machine
//! that turns raw press/move/release events into atomic, validated
//! moves.
//!
//! ## Design Principles
//!
//! 1. **Decoupled from rendering**: the engine owns game state and
//!    move legality; a presentation layer supplies container extents
//!    and layout metrics, forwards input events, and reads state back
//!    to draw. No window, asset, or frame-pacing concern lives here.
//!
//! 2. **Closed container variants**: tableau piles, foundations, stock
//!    and waste are a tagged union with total rule tables, not a class
//!    hierarchy with overrides.
//!
//! 3. **Deterministic interaction**: drop targets are resolved by
//!    largest overlap among legal candidates, with declared-order
//!    tie-breaks; commits are atomic; a release with no legal target
//!    always cancels cleanly.
//!
//! ## Architecture
//!
//! - One [`GameState`](game::GameState) owns all thirteen containers
//!   and the at-most-one active [`DragSession`](interact::DragSession).
//! - Input flows `on_press` / `on_move` / `on_release`; each call runs
//!   to completion synchronously, so there is nothing to lock.
//! - Seeded deals (`ChaCha8`) make any game reproducible from its seed.
//!
//! ## Modules
//!
//! - `core`: cards, geometry, RNG, errors, configuration
//! - `containers`: the four container variants and their rule tables
//! - `interact`: drag sessions and drop-target resolution
//! - `game`: the deal, the move engine, and the state facade

pub mod containers;
pub mod core;
pub mod game;
pub mod interact;

// Re-export commonly used types
pub use crate::core::{
    standard_deck, Card, Color, EngineError, GameConfig, GameRng, GameRngState, Layout, Point,
    Rank, Rect, Suit, CARDS_PER_DECK,
};

pub use crate::containers::{
    Container, ContainerId, ContainerKind, Foundation, Stock, TableauPile, Waste,
};

pub use crate::interact::{DragSession, DragView};

pub use crate::game::{DrawOutcome, GameState, PressOutcome, ReleaseOutcome};
