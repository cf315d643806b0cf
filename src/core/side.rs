//! Side identification and per-side data storage.
//!
//! ## Side
//!
//! Broom is strictly two-sided: the human-facing `Player` and the `Dealer`
//! (whose moves are decided by an external collaborator).
//!
//! ## SideMap
//!
//! Per-side data storage with O(1) access and indexing by `Side`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides of a Broom game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Player,
    Dealer,
}

impl Side {
    /// Both sides, player first (deal order).
    pub const BOTH: [Side; 2] = [Side::Player, Side::Dealer];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Dealer,
            Side::Dealer => Side::Player,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "player"),
            Side::Dealer => write!(f, "dealer"),
        }
    }
}

/// Per-side data storage.
///
/// ## Example
///
/// ```
/// use broom_engine::core::{Side, SideMap};
///
/// let mut scores: SideMap<u32> = SideMap::with_value(0);
/// scores[Side::Player] = 3;
///
/// assert_eq!(scores[Side::Player], 3);
/// assert_eq!(scores[Side::Dealer], 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideMap<T> {
    player: T,
    dealer: T,
}

impl<T> SideMap<T> {
    /// Create a map with explicit values per side.
    pub fn new(player: T, dealer: T) -> Self {
        Self { player, dealer }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            player: value.clone(),
            dealer: value,
        }
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::Player => &self.player,
            Side::Dealer => &self.dealer,
        }
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Player => &mut self.player,
            Side::Dealer => &mut self.dealer,
        }
    }

    /// Iterate over (Side, &T) pairs, player first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        [(Side::Player, &self.player), (Side::Dealer, &self.dealer)].into_iter()
    }

    /// Map both entries to a new SideMap.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> SideMap<U> {
        SideMap {
            player: f(&self.player),
            dealer: f(&self.dealer),
        }
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}
