//! Deal scheduling.
//!
//! A round deals in batches. Every batch issues six single-card deals
//! alternating player/dealer (three cards each); the first batch of a
//! round additionally deals four face-up cards into the common pool and
//! then assigns the first turn. Six batches plus the pool deal consume the
//! whole 40-card deck.

use tracing::debug;

use crate::cards::Owner;
use crate::core::{EngineError, EngineEvent, GameState, RoundStatus, Side};
use crate::zones::Zone;

/// Deal batches per round.
pub(crate) const MAX_DEALS: u8 = 6;

/// Hand-deal order within one batch.
const BATCH_PLAN: [Side; 6] = [
    Side::Player,
    Side::Dealer,
    Side::Player,
    Side::Dealer,
    Side::Player,
    Side::Dealer,
];

/// Cards dealt into the common pool on the first batch.
const POOL_DEAL: usize = 4;

enum DealTarget {
    Hand(Side),
    Common,
}

/// Execute one deal batch.
///
/// With the deal counter already at `MAX_DEALS` the round is marked
/// finished and nothing is dealt.
pub(crate) fn deal_batch(state: &mut GameState) -> Result<(), EngineError> {
    if state.deal_count == MAX_DEALS {
        state.status = RoundStatus::Finished;
        debug!(round = state.round, "deal plan exhausted");
        return Ok(());
    }

    for side in BATCH_PLAN {
        deal_one(state, DealTarget::Hand(side))?;
    }

    if state.deal_count == 0 {
        for _ in 0..POOL_DEAL {
            deal_one(state, DealTarget::Common)?;
        }
        // First turn: player on odd rounds, dealer on even
        let first = if state.round % 2 == 1 {
            Side::Player
        } else {
            Side::Dealer
        };
        state.turn = first;
        state.push_event(EngineEvent::TurnAssigned { side: first });
    }

    state.deal_count += 1;
    state.restarting = false;
    debug!(round = state.round, deal = state.deal_count, "dealt batch");
    Ok(())
}

/// Consume exactly one undealt card from the draw pile.
fn deal_one(state: &mut GameState, target: DealTarget) -> Result<(), EngineError> {
    let id = state.next_undealt().ok_or(EngineError::DeckExhausted)?;

    let (zone, face_up, owner) = match target {
        // Player cards are dealt face-up, dealer cards face-down
        DealTarget::Hand(side) => (Zone::Hand(side), side == Side::Player, Owner::Side(side)),
        DealTarget::Common => (Zone::Common, true, Owner::Common),
    };

    {
        let slot = state.slot_mut(id)?;
        slot.dealt = true;
        slot.face_up = face_up;
        slot.owner = Some(owner);
    }
    state.move_to(id, zone)?;
    state.push_event(EngineEvent::CardDealt { id, zone });
    Ok(())
}
