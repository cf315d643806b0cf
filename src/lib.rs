//! # broom-engine
//!
//! Rules engine and turn/state machine for Broom, a two-player
//! Escoba-style card game: a 40-card Spanish deck dealt in batches,
//! captures from a shared face-up pool by value match, and round-end
//! scoring over the capture piles.
//!
//! ## Design Principles
//!
//! 1. **Command-driven**: the presentation layer issues commands
//!    (`deal_batch`, `select_card`, `correct_play`, `pass`, ...) and reads
//!    derived view state back through queries. Nothing outside the crate
//!    mutates card placement directly.
//!
//! 2. **Enumerated zones**: a single `Zone` enum is the source of truth
//!    for card membership. Every card is in exactly one zone at all times.
//!
//! 3. **Synchronous with events**: no internal timers. Every state
//!    transition appends an `EngineEvent` to an append-only history so the
//!    presentation layer imposes its own pacing.
//!
//! 4. **Deterministic**: shuffles run off a seeded ChaCha8 RNG; equal
//!    seeds produce equal games.
//!
//! ## Modules
//!
//! - `core`: sides, RNG, errors, events, and the owned game state
//! - `cards`: card identity, runtime slots, deck construction
//! - `zones`: the `Zone` enum and ordered membership tracking
//! - `engine`: the `BroomGame` controller and its command handlers

pub mod cards;
pub mod core;
pub mod engine;
pub mod zones;

// Re-export commonly used types
pub use crate::cards::{Card, CardId, CardSlot, Owner, Suit};
pub use crate::core::{
    EngineError, EngineEvent, EventRecord, GameRng, RoundStatus, Side, SideMap,
    DEFAULT_GAME_POINTS,
};
pub use crate::engine::{BroomGame, BroomGameBuilder, PileCounts};
pub use crate::zones::Zone;
