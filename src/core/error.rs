//! Engine error taxonomy.
//!
//! Two classes of failure exist:
//!
//! - Invalid selections are *not* errors: `select_card` refuses the
//!   mutation and reports rejection through its return value.
//! - Caller protocol violations (dealing from an empty deck, resolving a
//!   play with nothing selected) surface as `EngineError` so callers get a
//!   reportable failure instead of silently corrupted state.

use crate::cards::CardId;
use crate::core::Side;

/// Errors reported by engine commands.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// Game points threshold must be positive.
    #[error("game points threshold must be positive")]
    InvalidGamePoints,

    /// `deal_batch` found no undealt card in the deck. Cannot occur under
    /// the 6-batch deal plan; indicates a caller protocol violation.
    #[error("no undealt card remains in the deck")]
    DeckExhausted,

    /// `correct_play` requires a selected card from the turn holder's hand.
    #[error("no card from the {0} hand is selected")]
    NoHandCardSelected(Side),

    /// `pass` was given a card outside the turn holder's hand.
    #[error("card {0} is not in the {1} hand")]
    CardNotInHand(CardId, Side),

    /// A command referenced a card id the engine does not know.
    #[error("unknown card id {0}")]
    UnknownCard(CardId),
}
