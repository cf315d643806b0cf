//! Turn and selection state machine.
//!
//! The validated path (`select_card`) only accepts cards the turn holder
//! may touch: the common pool plus the acting side's own hand, with at
//! most one own-hand card selected at a time. The dealer's moves arrive
//! pre-decided from an external collaborator through the trusted
//! `resolve_dealer_selection` path, which skips turn validation.
//!
//! A resolved play captures the selected own-hand card by exact identity
//! and every value-matching pool card (suit-blind), then flips the turn.

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::cards::{CardId, Owner};
use crate::core::{EngineError, EngineEvent, GameState, Side};
use crate::zones::Zone;

/// Try to select a card for the active capture attempt.
///
/// Returns false and leaves state untouched when the selection is invalid:
/// unknown or undealt card, a card the turn holder does not own and is not
/// common, a second own-hand card, or a card already selected.
pub(crate) fn select_card(state: &mut GameState, id: CardId) -> bool {
    let (owner, already_selected) = match state.slot(id) {
        Ok(slot) => (slot.owner, slot.selected),
        Err(_) => return false,
    };
    let Some(owner) = owner else {
        return false; // still in the deck
    };
    if already_selected {
        return false;
    }

    if let Owner::Side(side) = owner {
        if side != state.turn {
            return false;
        }
        // Only one of the acting side's own cards may be selected
        let own_already = state
            .selection
            .iter()
            .any(|sel| state.cards.get(sel).is_some_and(|s| s.owned_by(side)));
        if own_already {
            return false;
        }
    }

    if let Ok(slot) = state.slot_mut(id) {
        slot.selected = true;
        // Selecting a dealer card reveals it
        if owner == Owner::Side(Side::Dealer) {
            slot.face_up = true;
        }
    }
    state.selection.push(id);
    trace!(%id, "card selected");
    true
}

/// Remove a card from the selection. No-op if it was not selected.
pub(crate) fn deselect_card(state: &mut GameState, id: CardId) {
    if let Ok(slot) = state.slot_mut(id) {
        slot.selected = false;
    }
    state.selection.retain(|c| *c != id);
    trace!(%id, "card deselected");
}

/// Install an externally-decided dealer play as the active selection.
///
/// Trusted path: no turn-ownership validation. The previous selection is
/// discarded; dealer-owned cards are revealed.
pub(crate) fn resolve_dealer_selection(
    state: &mut GameState,
    ids: &[CardId],
) -> Result<(), EngineError> {
    for &id in ids {
        state.slot(id)?;
    }

    state.clear_selection();
    for &id in ids {
        {
            let slot = state.slot_mut(id)?;
            slot.selected = true;
            if slot.owner == Some(Owner::Side(Side::Dealer)) {
                slot.face_up = true;
            }
        }
        state.selection.push(id);
    }
    debug!(cards = ids.len(), "dealer selection resolved");
    Ok(())
}

/// Resolve the active selection as a capture for the turn holder.
///
/// Returns the captured card handles in capture order.
pub(crate) fn correct_play(state: &mut GameState) -> Result<Vec<CardId>, EngineError> {
    let turn = state.turn;
    let has_own_card = state
        .selection
        .iter()
        .any(|id| state.cards.get(id).is_some_and(|s| s.owned_by(turn)));
    if !has_own_card {
        return Err(EngineError::NoHandCardSelected(turn));
    }

    let selection: SmallVec<[CardId; 4]> = state.selection.clone();
    let mut captured = Vec::new();

    for sel_id in selection {
        let Ok(sel_card) = state.slot(sel_id).map(|s| s.card) else {
            continue;
        };

        // Exact (suit, value) match from the turn holder's hand first
        let hand_match = state
            .zones
            .cards(Zone::Hand(turn))
            .iter()
            .copied()
            .find(|id| state.cards.get(id).is_some_and(|s| s.card == sel_card));
        if let Some(id) = hand_match {
            capture(state, id, turn)?;
            captured.push(id);
        }

        // Pool capture is by value only: every matching common card comes along
        let pool_matches: Vec<CardId> = state
            .zones
            .cards(Zone::Common)
            .iter()
            .copied()
            .filter(|id| {
                state
                    .cards
                    .get(id)
                    .is_some_and(|s| s.card.value == sel_card.value)
            })
            .collect();
        for id in pool_matches {
            capture(state, id, turn)?;
            captured.push(id);
        }
    }

    state.clear_selection();
    state.push_event(EngineEvent::CardsCaptured {
        side: turn,
        cards: captured.clone(),
    });
    state.flip_turn();
    debug!(side = %turn, captured = captured.len(), "play resolved");
    Ok(captured)
}

/// Pass an own-hand card into the common pool and flip the turn.
pub(crate) fn pass(state: &mut GameState, id: CardId) -> Result<(), EngineError> {
    let turn = state.turn;
    if state.slot(id)?.zone != Zone::Hand(turn) {
        return Err(EngineError::CardNotInHand(id, turn));
    }

    state.move_to(id, Zone::Common)?;
    {
        let slot = state.slot_mut(id)?;
        slot.face_up = true;
        slot.selected = false;
        slot.owner = Some(Owner::Common);
    }

    state.clear_selection();
    state.push_event(EngineEvent::CardPassed { side: turn, id });
    state.flip_turn();
    debug!(side = %turn, %id, "card passed to pool");
    Ok(())
}

/// Move one card into a side's won pile, face-down, appended at the end.
fn capture(state: &mut GameState, id: CardId, side: Side) -> Result<(), EngineError> {
    state.move_to(id, Zone::Won(side))?;
    let slot = state.slot_mut(id)?;
    slot.face_up = false;
    slot.selected = false;
    Ok(())
}
