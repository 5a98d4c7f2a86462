//! The stock: the face-down draw pile.
//!
//! Cards leave the stock only through [`Stock::draw`], which removes
//! and flips the top card. The stock is never a drag source or a drop
//! target.

use serde::{Deserialize, Serialize};

use crate::core::{Card, EngineError};

/// Face-down LIFO draw pile. Top card at the end of the vec.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Stock {
    cards: Vec<Card>,
}

impl Stock {
    /// Create a stock from the undealt remainder of the deck.
    #[must_use]
    pub fn new(cards: Vec<Card>) -> Self {
        debug_assert!(cards.iter().all(|c| !c.face_up()));
        Self { cards }
    }

    /// Cards bottom-to-top (all face-down).
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remove the top card and flip it face-up.
    pub fn draw(&mut self) -> Result<Card, EngineError> {
        let mut card = self.cards.pop().ok_or(EngineError::StockEmpty)?;
        card.flip();
        Ok(card)
    }

    /// Refill an exhausted stock with recycled waste cards (already
    /// face-down, ordered so the earliest discard is drawn first).
    pub(crate) fn refill(&mut self, cards: Vec<Card>) {
        debug_assert!(self.cards.is_empty(), "refill of a non-empty stock");
        debug_assert!(cards.iter().all(|c| !c.face_up()));
        self.cards = cards;
    }
}
