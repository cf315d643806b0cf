//! Zone system for card locations.
//!
//! Broom has a fixed set of six zones per round. `Zone` is the single
//! enumerated source of truth for membership; no string position tags.
//!
//! `ZoneTable` tracks ordered membership per zone. Order matters
//! everywhere: the deck is drawn front-to-back, hands and piles display in
//! append order, and the common pool appends at the next free index.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::Side;

/// A named partition holding a disjoint subset of the 40 cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// Undealt draw pile.
    Deck,
    /// A side's hand.
    Hand(Side),
    /// The shared face-up pool.
    Common,
    /// A side's capture pile.
    Won(Side),
}

impl Zone {
    /// All six zones.
    pub const ALL: [Zone; 6] = [
        Zone::Deck,
        Zone::Hand(Side::Player),
        Zone::Hand(Side::Dealer),
        Zone::Common,
        Zone::Won(Side::Player),
        Zone::Won(Side::Dealer),
    ];
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Zone::Deck => write!(f, "deck"),
            Zone::Hand(side) => write!(f, "{side}-hand"),
            Zone::Common => write!(f, "common"),
            Zone::Won(side) => write!(f, "{side}-won"),
        }
    }
}

/// Ordered zone membership.
///
/// Every card belongs to exactly one zone; the engine moves cards between
/// zones exclusively through `GameState`, which keeps per-slot indices
/// dense after removals.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneTable {
    order: FxHashMap<Zone, Vec<CardId>>,
}

impl ZoneTable {
    /// Create an empty table with all zones initialized.
    #[must_use]
    pub fn new() -> Self {
        let mut order = FxHashMap::default();
        for zone in Zone::ALL {
            order.insert(zone, Vec::new());
        }
        Self { order }
    }

    /// Append a card at the end of a zone. Returns its index.
    pub fn push(&mut self, zone: Zone, id: CardId) -> usize {
        let list = self.order.entry(zone).or_default();
        list.push(id);
        list.len() - 1
    }

    /// Remove a card from a zone, keeping the remaining order.
    pub fn remove(&mut self, zone: Zone, id: CardId) {
        if let Some(list) = self.order.get_mut(&zone) {
            list.retain(|&c| c != id);
        }
    }

    /// Cards in a zone, in order.
    #[must_use]
    pub fn cards(&self, zone: Zone) -> &[CardId] {
        self.order.get(&zone).map_or(&[], |v| v.as_slice())
    }

    /// Number of cards in a zone.
    #[must_use]
    pub fn len(&self, zone: Zone) -> usize {
        self.cards(zone).len()
    }

    /// Check if a zone is empty.
    #[must_use]
    pub fn is_empty(&self, zone: Zone) -> bool {
        self.cards(zone).is_empty()
    }

    /// Total cards across all zones.
    #[must_use]
    pub fn total(&self) -> usize {
        self.order.values().map(Vec::len).sum()
    }
}
