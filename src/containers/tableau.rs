//! Tableau piles: the seven main playing stacks.
//!
//! A tableau pile holds a face-down prefix under a face-up suffix.
//! Cards are stacked downward in alternating colors; an empty pile
//! takes only a King.

use serde::{Deserialize, Serialize};

use crate::core::{Card, Rank};

/// One of the seven main playing piles. Bottom card at index 0.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TableauPile {
    cards: Vec<Card>,
}

impl TableauPile {
    /// Create an empty pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pile from dealt cards (bottom first).
    #[must_use]
    pub fn with_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Cards bottom-to-top.
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

    #[must_use]
    pub fn top_card(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Drop rule: an empty pile takes only a King; otherwise the card
    /// must be one rank below the top on the descending scale and the
    /// opposite color.
    #[must_use]
    pub fn accepts(&self, card: &Card) -> bool {
        match self.cards.last() {
            None => card.rank == Rank::King,
            Some(top) => card.fits_on_tableau(top),
        }
    }

    /// Append a run in captured (bottom-to-top) order.
    pub fn append(&mut self, run: Vec<Card>) {
        self.cards.extend(run);
    }

    /// Remove exactly `count` cards from the top, returned in
    /// bottom-to-top order.
    ///
    /// # Panics
    ///
    /// Panics if the pile holds fewer than `count` cards (programming
    /// defect: runs are always captured from an existing suffix).
    pub fn remove_top_run(&mut self, count: usize) -> Vec<Card> {
        assert!(
            count <= self.cards.len(),
            "run of {count} exceeds pile of {}",
            self.cards.len()
        );
        self.cards.split_off(self.cards.len() - count)
    }

    /// Flip the top card face-up if it is face-down. Returns whether a
    /// flip happened.
    pub fn reveal_top(&mut self) -> bool {
        match self.cards.last_mut() {
            Some(top) if !top.face_up() => {
                top.flip();
                true
            }
            _ => false,
        }
    }

    /// Index of the first face-up card; `len()` when every card is
    /// face-down (or the pile is empty).
    #[must_use]
    pub fn face_up_start(&self) -> usize {
        self.cards
            .iter()
            .position(Card::face_up)
            .unwrap_or(self.cards.len())
    }

    /// Face-down cards form a prefix and face-up cards the suffix.
    #[must_use]
    pub fn face_order_ok(&self) -> bool {
        let start = self.face_up_start();
        self.cards[start..].iter().all(Card::face_up)
    }
}
