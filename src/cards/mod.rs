//! Card system: identity, runtime slots, and deck construction.
//!
//! ## Key Types
//!
//! - `Suit`, `Card`: immutable identity (4 suits x values 1..7,10,11,12)
//! - `CardId`: stable handle used by the command surface
//! - `CardSlot`: runtime placement (zone, index, face, selection, owner)
//! - `deck::standard_deck`: the 40-card deck shape

pub mod card;
pub mod deck;

pub use card::{Card, CardId, CardSlot, Owner, Suit, VALUES};
pub use deck::{standard_deck, DECK_SIZE};
