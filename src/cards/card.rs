//! Card identity and runtime placement.
//!
//! A card's identity (suit, value) never changes; its placement (zone,
//! index within the zone, face, selection, owner) does. `CardSlot` keeps
//! the two together so zone moves never reconstruct identity.

use serde::{Deserialize, Serialize};

use crate::core::Side;
use crate::zones::Zone;

/// Card values in a Spanish 40-card deck: no 8s, 9s, or 10s of rank.
pub const VALUES: [u8; 10] = [1, 2, 3, 4, 5, 6, 7, 10, 11, 12];

/// The four suits of a Spanish deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Gold,
    Cups,
    Swords,
    Clubs,
}

impl Suit {
    /// All suits, in deck construction order.
    pub const ALL: [Suit; 4] = [Suit::Gold, Suit::Cups, Suit::Swords, Suit::Clubs];
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Suit::Gold => write!(f, "gold"),
            Suit::Cups => write!(f, "cups"),
            Suit::Swords => write!(f, "swords"),
            Suit::Clubs => write!(f, "clubs"),
        }
    }
}

/// Immutable card identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub value: u8,
}

impl Card {
    /// Create a card identity.
    #[must_use]
    pub const fn new(suit: Suit, value: u8) -> Self {
        Self { suit, value }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-of-{}", self.value, self.suit)
    }
}

/// Stable handle for one of the 40 cards of the current round's deck.
///
/// Handles are reissued when a round rebuilds the deck; they are only
/// meaningful within one round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u8);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Who currently claims a card, for display grouping and selection checks.
///
/// Pool cards are claimed by `Common`; undealt deck cards by nobody.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Owner {
    Side(Side),
    Common,
}

/// Runtime state of a single card: identity plus mutable placement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSlot {
    /// Immutable identity.
    pub card: Card,

    /// Current zone. Source of truth for membership; every card is in
    /// exactly one zone at all times.
    pub zone: Zone,

    /// Position within the zone, dense from 0 with no gaps.
    pub zone_index: usize,

    /// Is this card face-up?
    pub face_up: bool,

    /// Is this card part of the active selection?
    pub selected: bool,

    /// Has this card been consumed from the draw pile?
    pub dealt: bool,

    /// Current claimant. `None` while undealt.
    pub owner: Option<Owner>,
}

impl CardSlot {
    /// Create an undealt slot sitting in the deck.
    #[must_use]
    pub fn undealt(card: Card) -> Self {
        Self {
            card,
            zone: Zone::Deck,
            zone_index: 0,
            face_up: false,
            selected: false,
            dealt: false,
            owner: None,
        }
    }

    /// Check whether a side currently claims this card.
    #[must_use]
    pub fn owned_by(&self, side: Side) -> bool {
        self.owner == Some(Owner::Side(side))
    }

    /// Check whether this card sits in the common pool claim-wise.
    #[must_use]
    pub fn is_common(&self) -> bool {
        self.owner == Some(Owner::Common)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_display() {
        let card = Card::new(Suit::Gold, 7);
        assert_eq!(format!("{card}"), "7-of-gold");
    }

    #[test]
    fn test_card_id_display() {
        assert_eq!(format!("{}", CardId::new(12)), "Card(12)");
    }

    #[test]
    fn test_undealt_slot() {
        let slot = CardSlot::undealt(Card::new(Suit::Cups, 3));

        assert_eq!(slot.zone, Zone::Deck);
        assert!(!slot.dealt);
        assert!(!slot.face_up);
        assert!(!slot.selected);
        assert_eq!(slot.owner, None);
        assert!(!slot.owned_by(Side::Player));
        assert!(!slot.is_common());
    }

    #[test]
    fn test_ownership_checks() {
        let mut slot = CardSlot::undealt(Card::new(Suit::Swords, 1));

        slot.owner = Some(Owner::Side(Side::Dealer));
        assert!(slot.owned_by(Side::Dealer));
        assert!(!slot.owned_by(Side::Player));

        slot.owner = Some(Owner::Common);
        assert!(slot.is_common());
    }

    #[test]
    fn test_slot_serialization() {
        let slot = CardSlot::undealt(Card::new(Suit::Clubs, 12));
        let json = serde_json::to_string(&slot).unwrap();
        let deserialized: CardSlot = serde_json::from_str(&json).unwrap();
        assert_eq!(slot, deserialized);
    }
}
