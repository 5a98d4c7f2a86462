//! Recoverable engine errors.
//!
//! Only genuinely recoverable conditions live here. Presses on
//! face-down cards and rejected moves are ordinary outcomes
//! ([`crate::game::PressOutcome`], [`crate::game::ReleaseOutcome`]),
//! and invariant violations are programming defects that panic.

use thiserror::Error;

/// Errors the engine reports to its caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A draw was requested while the stock had no cards (and recycling
    /// was disabled, or there was nothing to recycle).
    #[error("stock is empty")]
    StockEmpty,
}
