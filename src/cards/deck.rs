//! Deck construction and shuffling.
//!
//! A fresh deck is built at the start of every round: 40 unique cards
//! (4 suits x 10 values), all undealt, all in the deck zone. Shuffling is
//! a uniform permutation driven by `GameRng`.

use rustc_hash::FxHashMap;

use super::card::{Card, CardId, CardSlot, Suit, VALUES};
use crate::core::GameRng;

/// Number of cards in a Broom deck.
pub const DECK_SIZE: usize = 40;

/// All 40 card identities, unshuffled.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for value in VALUES {
            cards.push(Card::new(suit, value));
        }
    }
    cards
}

/// Build a fresh shuffled deck.
///
/// Returns the slot table and the deck-zone draw order (index 0 drawn
/// first). Slots carry `zone_index` matching their draw position.
pub(crate) fn build_shuffled(rng: &mut GameRng) -> (FxHashMap<CardId, CardSlot>, Vec<CardId>) {
    let mut order: Vec<CardId> = (0..DECK_SIZE as u8).map(CardId::new).collect();
    rng.shuffle(&mut order);

    let identities = standard_deck();
    let mut slots = FxHashMap::default();
    for (position, &id) in order.iter().enumerate() {
        let mut slot = CardSlot::undealt(identities[id.raw() as usize]);
        slot.zone_index = position;
        slots.insert(id, slot);
    }

    (slots, order)
}
