//! Core engine types: sides, RNG, errors, events, and the game state.
//!
//! These are the building blocks the `engine` command surface operates on.

pub mod error;
pub mod event;
pub mod rng;
pub mod side;
pub mod state;

pub use error::EngineError;
pub use event::{EngineEvent, EventRecord};
pub use rng::GameRng;
pub use side::{Side, SideMap};
pub use state::{GameState, RoundStatus, DEFAULT_GAME_POINTS};
