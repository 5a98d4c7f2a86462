//! Initial arrangement of a shuffled deck.

use crate::containers::{Container, Foundation, Stock, TableauPile, Waste};
use crate::core::{standard_deck, GameRng, Suit};

/// Number of tableau piles.
pub const NUM_TABLEAUS: usize = 7;
/// Number of foundations (one per suit).
pub const NUM_FOUNDATIONS: usize = 4;
/// Total containers in the declared order: tableaus, foundations,
/// stock, waste.
pub const NUM_CONTAINERS: usize = NUM_TABLEAUS + NUM_FOUNDATIONS + 2;

/// Deal a freshly shuffled 52-card set into the declared container
/// order: seven tableau piles of 1..=7 cards with only the top card
/// face-up, four empty foundations bound one per suit, the remaining
/// 24 cards face-down in the stock, and an empty waste.
pub(crate) fn deal(rng: &mut GameRng) -> Vec<Container> {
    let mut deck = standard_deck();
    rng.shuffle(&mut deck);
    let mut deck = deck.into_iter();

    let mut containers = Vec::with_capacity(NUM_CONTAINERS);

    for pile_index in 0..NUM_TABLEAUS {
        let mut cards: Vec<_> = deck.by_ref().take(pile_index + 1).collect();
        if let Some(top) = cards.last_mut() {
            top.flip();
        }
        containers.push(Container::Tableau(TableauPile::with_cards(cards)));
    }

    for &suit in Suit::ALL.iter() {
        containers.push(Container::Foundation(Foundation::new(suit)));
    }

    containers.push(Container::Stock(Stock::new(deck.collect())));
    containers.push(Container::Waste(Waste::new()));

    containers
}
