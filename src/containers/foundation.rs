//! Foundations: the four suit-bound ascending piles.
//!
//! Each foundation is bound to one suit at creation and holds a
//! contiguous ascending run of that suit starting at the Ace. Filling
//! all four Ace through King is the win condition.

use serde::{Deserialize, Serialize};

use crate::core::{Card, Rank, Suit, NUM_RANKS};

/// A suit-bound collection pile. Bottom card (the Ace) at index 0.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Foundation {
    suit: Suit,
    cards: Vec<Card>,
}

impl Foundation {
    /// Create an empty foundation bound to `suit`.
    #[must_use]
    pub fn new(suit: Suit) -> Self {
        Self {
            suit,
            cards: Vec::with_capacity(NUM_RANKS),
        }
    }

    /// The suit this foundation is bound to.
    #[must_use]
    pub fn suit(&self) -> Suit {
        self.suit
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

    /// Drop rule: empty takes only the Ace of the bound suit; otherwise
    /// the card must match the suit and sit one rank above the top on
    /// the ascending scale.
    #[must_use]
    pub fn accepts(&self, card: &Card) -> bool {
        if card.suit != self.suit {
            return false;
        }
        match self.cards.last() {
            None => card.rank == Rank::Ace,
            Some(top) => card.rank.is_next_above(top.rank),
        }
    }

    /// Append a run of exactly one card.
    ///
    /// # Panics
    ///
    /// Panics on longer runs (programming defect: the resolver never
    /// sends a multi-card run to a foundation).
    pub fn append(&mut self, run: Vec<Card>) {
        assert_eq!(run.len(), 1, "foundations receive single cards only");
        self.cards.extend(run);
    }

    /// Remove the top card as a run of one (foundation withdrawal).
    ///
    /// # Panics
    ///
    /// Panics if `count != 1` or the foundation is empty.
    pub fn remove_top_run(&mut self, count: usize) -> Vec<Card> {
        assert_eq!(count, 1, "foundations expose a single draggable card");
        let card = self.cards.pop().expect("withdrawal from empty foundation");
        vec![card]
    }

    /// Does this foundation hold its full Ace..King run?
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cards.len() == NUM_RANKS
    }

    /// Bottom-to-top ranks are exactly Ace..top of the bound suit.
    #[must_use]
    pub fn run_ok(&self) -> bool {
        self.cards
            .iter()
            .zip(Rank::ALL)
            .all(|(card, rank)| card.suit == self.suit && card.rank == rank)
            && self.cards.len() <= NUM_RANKS
    }
}
