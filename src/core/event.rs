//! Engine events for presentation pacing.
//!
//! The source system paced deals and resets with artificial delays. Here
//! every state transition instead appends an event to an append-only
//! history; the presentation layer replays it with whatever timing it
//! wants. Events carry card handles, never card state, so readers go back
//! through the query surface for current placement.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::Side;
use crate::zones::Zone;

/// One observable state transition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineEvent {
    /// Full reset: new game with the given points threshold.
    GameReset { points: u32 },
    /// A round began (zones cleared, fresh deck shuffled).
    RoundStarted { round: u32 },
    /// One card left the draw pile.
    CardDealt { id: CardId, zone: Zone },
    /// First turn of the round assigned after the pool deal.
    TurnAssigned { side: Side },
    /// Turn flipped after a resolved play or pass.
    TurnChanged { side: Side },
    /// A play moved these cards into `side`'s won pile.
    CardsCaptured { side: Side, cards: Vec<CardId> },
    /// A hand card was passed into the common pool.
    CardPassed { side: Side, id: CardId },
    /// Dealing exhausted and both hands empty.
    RoundFinished,
    /// Round tally added these points to the current round entries.
    ScoreRecorded { player: u32, dealer: u32 },
    /// Broom bonus point for `side`.
    BonusAwarded { side: Side },
}

/// An event tagged with the round it occurred in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub round: u32,
    pub event: EngineEvent,
}

impl EventRecord {
    /// Create a new event record.
    #[must_use]
    pub fn new(round: u32, event: EngineEvent) -> Self {
        Self { round, event }
    }
}
