//! The owned game state.
//!
//! A single structure holds everything one game session mutates: round
//! bookkeeping, the card slot table, zone membership, the active
//! selection, score series, RNG, and the event history. All mutation goes
//! through engine commands; nothing outside the crate can move a card
//! directly.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{deck, CardId, CardSlot};
use crate::core::error::EngineError;
use crate::core::event::{EngineEvent, EventRecord};
use crate::core::rng::GameRng;
use crate::core::side::{Side, SideMap};
use crate::zones::{Zone, ZoneTable};

/// Default points threshold for a game.
pub const DEFAULT_GAME_POINTS: u32 = 5;

/// Per-round status. Reflects dealing/hand exhaustion only; the overall
/// points-threshold comparison is left to the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundStatus {
    Playing,
    Finished,
}

/// Complete engine state for one game session.
pub struct GameState {
    /// Points threshold the caller compares totals against.
    pub(crate) game_points: u32,

    /// Current round status.
    pub(crate) status: RoundStatus,

    /// Whose turn it is.
    pub(crate) turn: Side,

    /// Deal batches executed this round (0..=6).
    pub(crate) deal_count: u8,

    /// Transient window between a reset and the next deal.
    pub(crate) restarting: bool,

    /// Round number, 1-based.
    pub(crate) round: u32,

    /// Score series per side: one entry per round, current round last.
    pub(crate) results: SideMap<Vec<u32>>,

    /// Card slots by handle, rebuilt fresh each round.
    pub(crate) cards: FxHashMap<CardId, CardSlot>,

    /// Ordered zone membership.
    pub(crate) zones: ZoneTable,

    /// Cards selected for the active capture attempt.
    pub(crate) selection: SmallVec<[CardId; 4]>,

    /// Deterministic RNG for shuffles.
    pub(crate) rng: GameRng,

    /// Append-only event history for presentation pacing.
    pub(crate) history: Vector<EventRecord>,
}

impl GameState {
    /// Create state for round 1 with a fresh shuffled deck.
    pub(crate) fn new(game_points: u32, rng: GameRng) -> Result<Self, EngineError> {
        if game_points == 0 {
            return Err(EngineError::InvalidGamePoints);
        }

        let mut state = Self {
            game_points,
            status: RoundStatus::Playing,
            turn: Side::Player,
            deal_count: 0,
            restarting: true,
            round: 1,
            results: SideMap::with_value(vec![0]),
            cards: FxHashMap::default(),
            zones: ZoneTable::new(),
            selection: SmallVec::new(),
            rng,
            history: Vector::new(),
        };
        state.rebuild_deck();
        Ok(state)
    }

    /// Discard the previous round's cards and build a fresh shuffled deck.
    pub(crate) fn rebuild_deck(&mut self) {
        let (slots, order) = deck::build_shuffled(&mut self.rng);
        self.cards = slots;
        self.zones = ZoneTable::new();
        for id in order {
            self.zones.push(Zone::Deck, id);
        }
    }

    /// Append an event tagged with the current round.
    pub(crate) fn push_event(&mut self, event: EngineEvent) {
        self.history.push_back(EventRecord::new(self.round, event));
    }

    /// Look up a card slot.
    pub(crate) fn slot(&self, id: CardId) -> Result<&CardSlot, EngineError> {
        self.cards.get(&id).ok_or(EngineError::UnknownCard(id))
    }

    /// Look up a card slot mutably.
    pub(crate) fn slot_mut(&mut self, id: CardId) -> Result<&mut CardSlot, EngineError> {
        self.cards.get_mut(&id).ok_or(EngineError::UnknownCard(id))
    }

    /// Move a card to another zone, appending at the end.
    ///
    /// Re-indexes the source zone so `zone_index` values stay dense from 0
    /// with no gaps.
    pub(crate) fn move_to(&mut self, id: CardId, zone: Zone) -> Result<(), EngineError> {
        let old = self.slot(id)?.zone;

        self.zones.remove(old, id);
        let remaining: Vec<CardId> = self.zones.cards(old).to_vec();
        for (i, cid) in remaining.into_iter().enumerate() {
            if let Some(slot) = self.cards.get_mut(&cid) {
                slot.zone_index = i;
            }
        }

        let index = self.zones.push(zone, id);
        let slot = self.slot_mut(id)?;
        slot.zone = zone;
        slot.zone_index = index;
        Ok(())
    }

    /// The next undealt card of the draw pile, in deck order.
    pub(crate) fn next_undealt(&self) -> Option<CardId> {
        self.zones
            .cards(Zone::Deck)
            .iter()
            .copied()
            .find(|id| self.cards.get(id).is_some_and(|slot| !slot.dealt))
    }

    /// Clear the selection set and every selected flag.
    pub(crate) fn clear_selection(&mut self) {
        let ids: SmallVec<[CardId; 4]> = std::mem::take(&mut self.selection);
        for id in ids {
            if let Some(slot) = self.cards.get_mut(&id) {
                slot.selected = false;
            }
        }
    }

    /// Hand the turn to the other side; finish the round once dealing is
    /// exhausted and both hands are empty.
    pub(crate) fn flip_turn(&mut self) {
        self.turn = self.turn.opponent();
        self.push_event(EngineEvent::TurnChanged { side: self.turn });

        if self.deal_count == 6
            && self.zones.is_empty(Zone::Hand(Side::Player))
            && self.zones.is_empty(Zone::Hand(Side::Dealer))
        {
            self.status = RoundStatus::Finished;
            self.push_event(EngineEvent::RoundFinished);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::DECK_SIZE;

    fn fresh_state() -> GameState {
        GameState::new(DEFAULT_GAME_POINTS, GameRng::new(42)).unwrap()
    }

    #[test]
    fn test_new_state_round_one() {
        let state = fresh_state();

        assert_eq!(state.round, 1);
        assert_eq!(state.deal_count, 0);
        assert_eq!(state.status, RoundStatus::Playing);
        assert!(state.restarting);
        assert_eq!(state.results[Side::Player], vec![0]);
        assert_eq!(state.results[Side::Dealer], vec![0]);
        assert_eq!(state.zones.len(Zone::Deck), DECK_SIZE);
        assert_eq!(state.zones.total(), DECK_SIZE);
    }

    #[test]
    fn test_zero_points_rejected() {
        let result = GameState::new(0, GameRng::new(1));
        assert_eq!(result.err(), Some(EngineError::InvalidGamePoints));
    }

    #[test]
    fn test_move_to_keeps_indices_dense() {
        let mut state = fresh_state();
        let ids: Vec<CardId> = state.zones.cards(Zone::Deck)[..3].to_vec();

        // Move the middle of the three out of the deck
        state.move_to(ids[1], Zone::Common).unwrap();

        assert_eq!(state.slot(ids[1]).unwrap().zone, Zone::Common);
        assert_eq!(state.slot(ids[1]).unwrap().zone_index, 0);

        // Remaining deck cards re-indexed from 0 with no gap
        for (i, id) in state.zones.cards(Zone::Deck).to_vec().iter().enumerate() {
            assert_eq!(state.slot(*id).unwrap().zone_index, i);
        }
        assert_eq!(state.zones.total(), DECK_SIZE);
    }

    #[test]
    fn test_move_unknown_card() {
        let mut state = fresh_state();
        let err = state.move_to(CardId(99), Zone::Common).unwrap_err();
        assert_eq!(err, EngineError::UnknownCard(CardId(99)));
    }

    #[test]
    fn test_next_undealt_follows_deck_order() {
        let mut state = fresh_state();
        let first = state.zones.cards(Zone::Deck)[0];
        assert_eq!(state.next_undealt(), Some(first));

        state.slot_mut(first).unwrap().dealt = true;
        let second = state.zones.cards(Zone::Deck)[1];
        assert_eq!(state.next_undealt(), Some(second));
    }

    #[test]
    fn test_clear_selection_resets_flags() {
        let mut state = fresh_state();
        let id = state.zones.cards(Zone::Deck)[0];
        state.slot_mut(id).unwrap().selected = true;
        state.selection.push(id);

        state.clear_selection();

        assert!(state.selection.is_empty());
        assert!(!state.slot(id).unwrap().selected);
    }

    #[test]
    fn test_flip_turn_alternates() {
        let mut state = fresh_state();
        assert_eq!(state.turn, Side::Player);

        state.flip_turn();
        assert_eq!(state.turn, Side::Dealer);
        assert_eq!(state.status, RoundStatus::Playing);

        state.flip_turn();
        assert_eq!(state.turn, Side::Player);
    }

    #[test]
    fn test_flip_turn_finishes_exhausted_round() {
        let mut state = fresh_state();
        state.deal_count = 6;

        // Hands are empty (nothing dealt), so the flip ends the round
        state.flip_turn();

        assert_eq!(state.status, RoundStatus::Finished);
        assert!(state
            .history
            .iter()
            .any(|r| r.event == EngineEvent::RoundFinished));
    }
}
