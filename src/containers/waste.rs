//! The waste: the face-up discard pile fed by stock draws.
//!
//! The waste retains its full discard history, but only the top card is
//! ever interactive: it can be dragged back into play, and a new draw
//! simply covers it. The waste is never a drop target.

use serde::{Deserialize, Serialize};

use crate::core::Card;

/// Face-up discard stack. Top (exposed) card at the end of the vec.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Waste {
    cards: Vec<Card>,
}

impl Waste {
    /// Create an empty waste.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cards bottom-to-top; only the last is exposed.
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

    /// The exposed card, if any.
    #[must_use]
    pub fn top_card(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Push a freshly drawn card on top, covering the previous one.
    pub fn receive(&mut self, card: Card) {
        debug_assert!(card.face_up(), "waste receives face-up cards");
        self.cards.push(card);
    }

    /// Remove the exposed card as a run of one.
    ///
    /// # Panics
    ///
    /// Panics if `count != 1` or the waste is empty.
    pub fn remove_top_run(&mut self, count: usize) -> Vec<Card> {
        assert_eq!(count, 1, "waste exposes a single draggable card");
        let card = self.cards.pop().expect("removal from empty waste");
        vec![card]
    }

    /// Drain the full history for recycling into the stock: flipped
    /// face-down and reversed, so the earliest discard is drawn first
    /// again.
    pub(crate) fn drain_for_recycle(&mut self) -> Vec<Card> {
        let mut cards = std::mem::take(&mut self.cards);
        for card in &mut cards {
            if card.face_up() {
                card.flip();
            }
        }
        cards.reverse();
        cards
    }
}
