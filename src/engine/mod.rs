//! The command surface: game controller, deal scheduling, turn/selection
//! state machine, and round scoring.

pub mod deal;
pub mod game;
pub mod scoring;
pub mod turns;

pub use game::{BroomGame, BroomGameBuilder};
pub use scoring::PileCounts;
