//! Container variants and their shared capability surface.
//!
//! Containers are a closed set of variants rather than a hierarchy:
//! the behavior differences between tableau piles, foundations, stock
//! and waste are total rule tables, not incremental overrides. Every
//! container owns an ordered card sequence, bottom at index 0.

pub mod foundation;
pub mod stock;
pub mod tableau;
pub mod waste;

pub use foundation::Foundation;
pub use stock::Stock;
pub use tableau::TableauPile;
pub use waste::Waste;

use serde::{Deserialize, Serialize};

use crate::core::Card;

/// Which variant a container is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContainerKind {
    Tableau,
    Foundation,
    Stock,
    Waste,
}

/// Index of a container in the engine's declared order: tableaus
/// left-to-right, then foundations in creation order, then stock, then
/// waste. The declared order doubles as the resolver's tie-break
/// priority.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContainerId(pub u8);

impl ContainerId {
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A card container: one of the four variants.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Container {
    Tableau(TableauPile),
    Foundation(Foundation),
    Stock(Stock),
    Waste(Waste),
}

impl Container {
    #[must_use]
    pub fn kind(&self) -> ContainerKind {
        match self {
            Container::Tableau(_) => ContainerKind::Tableau,
            Container::Foundation(_) => ContainerKind::Foundation,
            Container::Stock(_) => ContainerKind::Stock,
            Container::Waste(_) => ContainerKind::Waste,
        }
    }

    /// Cards bottom-to-top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        match self {
            Container::Tableau(pile) => pile.cards(),
            Container::Foundation(foundation) => foundation.cards(),
            Container::Stock(stock) => stock.cards(),
            Container::Waste(waste) => waste.cards(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards().is_empty()
    }

    #[must_use]
    pub fn top_card(&self) -> Option<&Card> {
        self.cards().last()
    }

    /// Drop rule table. Stock and waste never accept drops.
    #[must_use]
    pub fn accepts(&self, card: &Card) -> bool {
        match self {
            Container::Tableau(pile) => pile.accepts(card),
            Container::Foundation(foundation) => foundation.accepts(card),
            Container::Stock(_) | Container::Waste(_) => false,
        }
    }

    /// Append a run in captured order.
    ///
    /// # Panics
    ///
    /// Panics on stock or waste (programming defect: the resolver never
    /// selects them as targets).
    pub fn append(&mut self, run: Vec<Card>) {
        match self {
            Container::Tableau(pile) => pile.append(run),
            Container::Foundation(foundation) => foundation.append(run),
            Container::Stock(_) => panic!("stock is not a drop target"),
            Container::Waste(_) => panic!("waste is not a drop target"),
        }
    }

    /// Remove exactly `count` cards from the top, in bottom-to-top
    /// order.
    ///
    /// # Panics
    ///
    /// Panics on stock (cards leave it only through draws) and on
    /// malformed counts for the single-card sources.
    pub fn remove_top_run(&mut self, count: usize) -> Vec<Card> {
        match self {
            Container::Tableau(pile) => pile.remove_top_run(count),
            Container::Foundation(foundation) => foundation.remove_top_run(count),
            Container::Waste(waste) => waste.remove_top_run(count),
            Container::Stock(_) => panic!("stock cards leave only through draws"),
        }
    }

    /// May a drag run start at `index`? Tableaus expose any face-up
    /// suffix; foundations and the waste expose their top card only;
    /// the stock exposes nothing.
    #[must_use]
    pub fn draggable_at(&self, index: usize) -> bool {
        match self {
            Container::Tableau(pile) => {
                pile.cards().get(index).map_or(false, |c| c.face_up())
            }
            Container::Foundation(_) | Container::Waste(_) => {
                !self.is_empty() && index + 1 == self.len()
            }
            Container::Stock(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Rank, Suit};

    fn face_up(suit: Suit, rank: Rank) -> Card {
        let mut card = Card::new(suit, rank);
        card.flip();
        card
    }

    #[test]
    fn test_kind_table() {
        assert_eq!(
            Container::Tableau(TableauPile::new()).kind(),
            ContainerKind::Tableau
        );
        assert_eq!(
            Container::Foundation(Foundation::new(Suit::Hearts)).kind(),
            ContainerKind::Foundation
        );
        assert_eq!(Container::Stock(Stock::default()).kind(), ContainerKind::Stock);
        assert_eq!(Container::Waste(Waste::new()).kind(), ContainerKind::Waste);
    }

    #[test]
    fn test_stock_and_waste_never_accept_drops() {
        let king = face_up(Suit::Spades, Rank::King);

        assert!(!Container::Stock(Stock::default()).accepts(&king));
        assert!(!Container::Waste(Waste::new()).accepts(&king));
    }

    #[test]
    fn test_draggable_at_rule_table() {
        let tableau = Container::Tableau(TableauPile::with_cards(vec![
            Card::new(Suit::Clubs, Rank::Ten),
            face_up(Suit::Hearts, Rank::Nine),
            face_up(Suit::Spades, Rank::Eight),
        ]));
        assert!(!tableau.draggable_at(0)); // face-down
        assert!(tableau.draggable_at(1)); // face-up suffix, not just the top
        assert!(tableau.draggable_at(2));
        assert!(!tableau.draggable_at(3)); // out of range

        let mut foundation = Foundation::new(Suit::Hearts);
        foundation.append(vec![face_up(Suit::Hearts, Rank::Ace)]);
        foundation.append(vec![face_up(Suit::Hearts, Rank::Two)]);
        let foundation = Container::Foundation(foundation);
        assert!(foundation.draggable_at(1)); // top card may be withdrawn
        assert!(!foundation.draggable_at(0));

        let mut waste = Waste::new();
        waste.receive(face_up(Suit::Diamonds, Rank::Four));
        waste.receive(face_up(Suit::Clubs, Rank::Six));
        let waste = Container::Waste(waste);
        assert!(waste.draggable_at(1));
        assert!(!waste.draggable_at(0)); // lower history is inert

        let stock = Container::Stock(Stock::new(vec![Card::new(Suit::Spades, Rank::Two)]));
        assert!(!stock.draggable_at(0));
    }

    #[test]
    #[should_panic(expected = "not a drop target")]
    fn test_append_to_stock_panics() {
        let mut stock = Container::Stock(Stock::default());
        stock.append(vec![face_up(Suit::Spades, Rank::King)]);
    }

    #[test]
    fn test_container_serde_round_trip() {
        let container = Container::Tableau(TableauPile::with_cards(vec![
            Card::new(Suit::Clubs, Rank::Ten),
            face_up(Suit::Hearts, Rank::Nine),
        ]));

        let json = serde_json::to_string(&container).unwrap();
        let deserialized: Container = serde_json::from_str(&json).unwrap();

        assert_eq!(container, deserialized);
    }
}
