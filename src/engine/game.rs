//! Game controller: the command surface the presentation layer drives.
//!
//! `BroomGame` owns the `GameState` and exposes every mutation as a
//! command plus a read-only query surface. The source system spaced
//! resets and deals with artificial delays; here `new_game`/`new_round`
//! only reset and rebuild the deck, and the caller issues `deal_batch`
//! whenever its own pacing allows. The order of zone mutations within a
//! command is preserved exactly.

use tracing::debug;

use crate::cards::{CardId, CardSlot};
use crate::core::{
    EngineError, EngineEvent, EventRecord, GameRng, GameState, RoundStatus, Side, SideMap,
    DEFAULT_GAME_POINTS,
};
use crate::engine::{deal, scoring, turns};
use crate::zones::Zone;

/// Builder for a Broom game.
///
/// ```
/// use broom_engine::BroomGame;
///
/// let game = BroomGame::builder().game_points(7).build(42).unwrap();
/// assert_eq!(game.game_points(), 7);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct BroomGameBuilder {
    game_points: u32,
}

impl Default for BroomGameBuilder {
    fn default() -> Self {
        Self {
            game_points: DEFAULT_GAME_POINTS,
        }
    }
}

impl BroomGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the points threshold the caller plays to.
    pub fn game_points(mut self, points: u32) -> Self {
        self.game_points = points;
        self
    }

    /// Build with an explicit RNG seed (deterministic deck order).
    pub fn build(self, seed: u64) -> Result<BroomGame, EngineError> {
        let state = GameState::new(self.game_points, GameRng::new(seed))?;
        Ok(BroomGame { state })
    }

    /// Build with a seed drawn from system entropy.
    pub fn build_from_entropy(self) -> Result<BroomGame, EngineError> {
        let state = GameState::new(self.game_points, GameRng::from_entropy())?;
        Ok(BroomGame { state })
    }
}

/// The Broom rules engine for one game session.
pub struct BroomGame {
    state: GameState,
}

impl BroomGame {
    /// Create a game with the default points threshold and an explicit seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        BroomGameBuilder::new()
            .build(seed)
            .expect("default game points are positive")
    }

    /// Start configuring a game.
    #[must_use]
    pub fn builder() -> BroomGameBuilder {
        BroomGameBuilder::new()
    }

    // === Commands ===

    /// Full reset: fresh deck, round 1, zeroed score series.
    ///
    /// `points` overrides the threshold; `None` keeps the current one.
    /// Dealing is the caller's next move (`deal_batch`).
    pub fn new_game(&mut self, points: Option<u32>) -> Result<(), EngineError> {
        let points = points.unwrap_or(self.state.game_points);
        if points == 0 {
            return Err(EngineError::InvalidGamePoints);
        }

        let state = &mut self.state;
        state.game_points = points;
        state.status = RoundStatus::Playing;
        state.turn = Side::Player;
        state.deal_count = 0;
        state.restarting = true;
        state.round = 1;
        state.results = SideMap::with_value(vec![0]);
        state.selection.clear();
        state.rebuild_deck();
        state.push_event(EngineEvent::GameReset { points });
        state.push_event(EngineEvent::RoundStarted { round: 1 });
        debug!(points, "new game");
        Ok(())
    }

    /// Round transition: preserves the score series, appends a zero entry
    /// per side, increments the round number, rebuilds the deck.
    pub fn new_round(&mut self) {
        let state = &mut self.state;
        state.status = RoundStatus::Playing;
        state.deal_count = 0;
        state.restarting = true;
        state.round += 1;
        for side in Side::BOTH {
            state.results[side].push(0);
        }
        state.selection.clear();
        state.rebuild_deck();
        let round = state.round;
        state.push_event(EngineEvent::RoundStarted { round });
        debug!(round, "new round");
    }

    /// Execute one deal batch of the round's plan.
    pub fn deal_batch(&mut self) -> Result<(), EngineError> {
        deal::deal_batch(&mut self.state)
    }

    /// Validated selection. Returns whether the card was accepted.
    pub fn select_card(&mut self, id: CardId) -> bool {
        turns::select_card(&mut self.state, id)
    }

    /// Remove a card from the selection. No-op if not selected.
    pub fn deselect_card(&mut self, id: CardId) {
        turns::deselect_card(&mut self.state, id);
    }

    /// Install an externally-decided dealer play as the selection
    /// (trusted, skips turn validation).
    pub fn resolve_dealer_selection(&mut self, ids: &[CardId]) -> Result<(), EngineError> {
        turns::resolve_dealer_selection(&mut self.state, ids)
    }

    /// Resolve the selection as a capture for the turn holder.
    /// Returns the captured cards in capture order.
    pub fn correct_play(&mut self) -> Result<Vec<CardId>, EngineError> {
        turns::correct_play(&mut self.state)
    }

    /// Pass an own-hand card into the common pool.
    pub fn pass(&mut self, id: CardId) -> Result<(), EngineError> {
        turns::pass(&mut self.state, id)
    }

    /// Broom bonus: one extra point for `side` in the current round.
    pub fn record_bonus(&mut self, side: Side) {
        scoring::record_bonus(&mut self.state, side);
    }

    /// Tally the won piles into the current round entries.
    /// Returns this tally's per-side delta.
    pub fn tally_round_score(&mut self) -> SideMap<u32> {
        scoring::tally_round(&mut self.state)
    }

    // === Queries ===

    /// Whose turn it is.
    #[must_use]
    pub fn turn(&self) -> Side {
        self.state.turn
    }

    /// Current round status (dealing/hand exhaustion only).
    #[must_use]
    pub fn status(&self) -> RoundStatus {
        self.state.status
    }

    /// Current round number, 1-based.
    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.state.round
    }

    /// Deal batches executed this round.
    #[must_use]
    pub fn deal_count(&self) -> u8 {
        self.state.deal_count
    }

    /// The points threshold the caller plays to. The engine never compares
    /// totals against it; that is the caller's round-end responsibility.
    #[must_use]
    pub fn game_points(&self) -> u32 {
        self.state.game_points
    }

    /// In the transient window between a reset and the next deal?
    #[must_use]
    pub fn is_restarting(&self) -> bool {
        self.state.restarting
    }

    /// Cards in a zone, in order.
    #[must_use]
    pub fn zone_cards(&self, zone: Zone) -> &[CardId] {
        self.state.zones.cards(zone)
    }

    /// A side's hand, in deal order.
    #[must_use]
    pub fn hand(&self, side: Side) -> &[CardId] {
        self.zone_cards(Zone::Hand(side))
    }

    /// The common pool, in pool-index order.
    #[must_use]
    pub fn common_cards(&self) -> &[CardId] {
        self.zone_cards(Zone::Common)
    }

    /// A side's won pile, in capture order.
    #[must_use]
    pub fn won_pile(&self, side: Side) -> &[CardId] {
        self.zone_cards(Zone::Won(side))
    }

    /// Cards remaining in the draw pile.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.state.zones.len(Zone::Deck)
    }

    /// Look up a card's identity and placement.
    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&CardSlot> {
        self.state.cards.get(&id)
    }

    /// The active selection, in selection order.
    #[must_use]
    pub fn selection(&self) -> &[CardId] {
        &self.state.selection
    }

    /// On-demand category counts over a side's won pile.
    #[must_use]
    pub fn pile_counts(&self, side: Side) -> crate::engine::PileCounts {
        scoring::pile_counts(&self.state, side)
    }

    /// A side's score series: one entry per round, current round last.
    #[must_use]
    pub fn score_series(&self, side: Side) -> &[u32] {
        &self.state.results[side]
    }

    /// A side's cumulative score across all rounds.
    #[must_use]
    pub fn total_score(&self, side: Side) -> u32 {
        self.state.results[side].iter().sum()
    }

    /// The append-only event history, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &EventRecord> {
        self.state.history.iter()
    }
}
