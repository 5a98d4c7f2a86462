//! Card identity: suits, ranks, colors, and face state.
//!
//! A `Card` is a suit/rank identity plus a mutable face-up flag. Exactly
//! one instance of each of the 52 suit/rank combinations exists for the
//! lifetime of a game; after the deal, only face state and container
//! membership ever change.
//!
//! Two walks over the same 13-rank scale drive the rules:
//! - descending (King down to Ace) for tableau stacking, via
//!   [`Rank::is_one_below`]
//! - ascending (Ace up to King) for foundation building, via
//!   [`Rank::is_next_above`]

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of suits in a standard deck.
pub const NUM_SUITS: usize = 4;
/// Number of ranks in a standard deck.
pub const NUM_RANKS: usize = 13;
/// Number of cards in a standard deck.
pub const CARDS_PER_DECK: usize = NUM_SUITS * NUM_RANKS;

/// The four suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

/// Card color, a pure function of suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

impl Suit {
    /// All suits in a fixed, reproducible order.
    pub const ALL: [Suit; NUM_SUITS] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Red for hearts/diamonds, black for clubs/spades.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }

    /// Single-character representation: 'H', 'D', 'C', or 'S'.
    #[must_use]
    pub const fn short_char(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
        }
    }
}

/// The thirteen ranks, Ace low.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Ace = 0,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All ranks in a fixed, reproducible order (Ace..King).
    pub const ALL: [Rank; NUM_RANKS] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Rank number in 1..=13 (Ace=1, King=13).
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// True if `self` sits exactly one step below `other` on the
    /// descending tableau scale (a Six is one below a Seven).
    #[must_use]
    pub const fn is_one_below(self, other: Rank) -> bool {
        self as u8 + 1 == other as u8
    }

    /// True if `self` sits exactly one step above `other` on the
    /// ascending foundation scale (a Two is next above an Ace).
    #[must_use]
    pub const fn is_next_above(self, other: Rank) -> bool {
        other as u8 + 1 == self as u8
    }

    /// Single-character representation: 'A', '2'..'9', 'T', 'J', 'Q', 'K'.
    #[must_use]
    pub const fn short_char(self) -> char {
        match self {
            Rank::Ace => 'A',
            Rank::Two => '2',
            Rank::Three => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
        }
    }
}

/// A playing card: immutable suit/rank identity plus face state.
///
/// Cards are constructed face-down once during the deal and never
/// destroyed. [`Card::flip`] is the only mutator; the engine flips
/// cards only through stock draws and the post-move reveal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    face_up: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            face_up: false,
        }
    }

    /// Is the card currently face-up?
    #[must_use]
    pub const fn face_up(&self) -> bool {
        self.face_up
    }

    /// Toggle face state.
    pub fn flip(&mut self) {
        self.face_up = !self.face_up;
    }

    /// Color of the card's suit.
    #[must_use]
    pub const fn color(&self) -> Color {
        self.suit.color()
    }

    /// Same suit and rank; face state is not part of identity.
    #[must_use]
    pub fn same_identity(&self, other: &Card) -> bool {
        self.suit == other.suit && self.rank == other.rank
    }

    /// Can `self` be stacked on `top` in a tableau: exactly one rank
    /// below on the descending scale and opposite color.
    #[must_use]
    pub fn fits_on_tableau(&self, top: &Card) -> bool {
        self.rank.is_one_below(top.rank) && self.color() != top.color()
    }

    /// Short string like "AH", "7C", "TD", "KS".
    #[must_use]
    pub fn short_str(&self) -> String {
        format!("{}{}", self.rank.short_char(), self.suit.short_char())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.short_char(), self.suit.short_char())
    }
}

/// The 52 unique cards in `Suit::ALL` x `Rank::ALL` order, face-down.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(CARDS_PER_DECK);
    for &suit in Suit::ALL.iter() {
        for &rank in Rank::ALL.iter() {
            cards.push(Card::new(suit, rank));
        }
    }
    cards
}
