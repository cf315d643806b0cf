//! Round scoring.
//!
//! Four categories are tallied over the won piles: total cards, sevens,
//! gold cards, and the 7-of-gold. Each category independently awards one
//! point to the strictly greater side; ties award nothing. Points add
//! cumulatively into the current round entries, so the broom bonus (an
//! extra point when a play empties the opponent's hand) can land in the
//! same round through `record_bonus`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::Suit;
use crate::core::{EngineEvent, GameState, Side, SideMap};
use crate::zones::Zone;

/// Category counts for one side's won pile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PileCounts {
    /// Total captured cards.
    pub cards: usize,
    /// Captured value-7 cards.
    pub sevens: usize,
    /// Captured gold-suit cards.
    pub golds: usize,
    /// 1 if the 7-of-gold was captured.
    pub gold_seven: usize,
}

impl PileCounts {
    fn categories(self) -> [usize; 4] {
        [self.cards, self.sevens, self.golds, self.gold_seven]
    }
}

/// Count a side's won pile.
pub(crate) fn pile_counts(state: &GameState, side: Side) -> PileCounts {
    let mut counts = PileCounts::default();
    for id in state.zones.cards(Zone::Won(side)) {
        let Some(slot) = state.cards.get(id) else {
            continue;
        };
        counts.cards += 1;
        if slot.card.value == 7 {
            counts.sevens += 1;
        }
        if slot.card.suit == Suit::Gold {
            counts.golds += 1;
        }
        if slot.card.value == 7 && slot.card.suit == Suit::Gold {
            counts.gold_seven += 1;
        }
    }
    counts
}

/// Tally the round and add the result into the current round entries.
///
/// Returns the per-side delta of this tally.
pub(crate) fn tally_round(state: &mut GameState) -> SideMap<u32> {
    let player = pile_counts(state, Side::Player).categories();
    let dealer = pile_counts(state, Side::Dealer).categories();

    let mut delta: SideMap<u32> = SideMap::with_value(0);
    for (p, d) in player.iter().zip(dealer.iter()) {
        if p > d {
            delta[Side::Player] += 1;
        } else if d > p {
            delta[Side::Dealer] += 1;
        }
    }

    for side in Side::BOTH {
        if let Some(entry) = state.results[side].last_mut() {
            *entry += delta[side];
        }
    }

    state.push_event(EngineEvent::ScoreRecorded {
        player: delta[Side::Player],
        dealer: delta[Side::Dealer],
    });
    debug!(
        round = state.round,
        player = delta[Side::Player],
        dealer = delta[Side::Dealer],
        "round tallied"
    );
    delta
}

/// Broom bonus: one extra point for `side` in the current round.
pub(crate) fn record_bonus(state: &mut GameState, side: Side) {
    if let Some(entry) = state.results[side].last_mut() {
        *entry += 1;
    }
    state.push_event(EngineEvent::BonusAwarded { side });
    debug!(round = state.round, side = %side, "broom bonus");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardId};
    use crate::core::{GameRng, DEFAULT_GAME_POINTS};

    fn fresh_state() -> GameState {
        GameState::new(DEFAULT_GAME_POINTS, GameRng::new(42)).unwrap()
    }

    fn find_card(state: &GameState, suit: Suit, value: u8) -> CardId {
        let wanted = Card::new(suit, value);
        state
            .cards
            .iter()
            .find(|(_, slot)| slot.card == wanted)
            .map(|(id, _)| *id)
            .unwrap()
    }

    fn put_in_pile(state: &mut GameState, side: Side, cards: &[(Suit, u8)]) {
        for &(suit, value) in cards {
            let id = find_card(state, suit, value);
            state.move_to(id, Zone::Won(side)).unwrap();
        }
    }

    #[test]
    fn test_gold_seven_breaks_all_ties() {
        let mut state = fresh_state();
        put_in_pile(&mut state, Side::Player, &[(Suit::Gold, 7), (Suit::Cups, 3)]);
        put_in_pile(&mut state, Side::Dealer, &[(Suit::Cups, 7), (Suit::Gold, 2)]);

        let delta = tally_round(&mut state);

        // cards 2v2, sevens 1v1, golds 1v1: ties. gold seven 1v0: player point.
        assert_eq!(delta[Side::Player], 1);
        assert_eq!(delta[Side::Dealer], 0);
        assert_eq!(state.results[Side::Player], vec![1]);
        assert_eq!(state.results[Side::Dealer], vec![0]);
    }

    #[test]
    fn test_all_categories_score_independently() {
        let mut state = fresh_state();
        put_in_pile(
            &mut state,
            Side::Player,
            &[(Suit::Gold, 7), (Suit::Gold, 1), (Suit::Swords, 7), (Suit::Cups, 2)],
        );
        put_in_pile(&mut state, Side::Dealer, &[(Suit::Clubs, 3)]);

        let delta = tally_round(&mut state);

        assert_eq!(delta[Side::Player], 4);
        assert_eq!(delta[Side::Dealer], 0);
    }

    #[test]
    fn test_empty_piles_tie_everywhere() {
        let mut state = fresh_state();

        let delta = tally_round(&mut state);

        assert_eq!(delta[Side::Player], 0);
        assert_eq!(delta[Side::Dealer], 0);
        assert_eq!(state.results[Side::Player], vec![0]);
    }

    #[test]
    fn test_tally_is_cumulative_within_round() {
        let mut state = fresh_state();
        put_in_pile(&mut state, Side::Dealer, &[(Suit::Gold, 7)]);

        tally_round(&mut state);
        tally_round(&mut state);

        // Two tallies add up rather than overwrite
        assert_eq!(state.results[Side::Dealer], vec![8]);
    }

    #[test]
    fn test_bonus_increments_current_round() {
        let mut state = fresh_state();

        record_bonus(&mut state, Side::Player);
        record_bonus(&mut state, Side::Player);

        assert_eq!(state.results[Side::Player], vec![2]);
        assert_eq!(state.results[Side::Dealer], vec![0]);
        assert!(state
            .history
            .iter()
            .any(|r| r.event == EngineEvent::BonusAwarded { side: Side::Player }));
    }

    #[test]
    fn test_pile_counts() {
        let mut state = fresh_state();
        put_in_pile(
            &mut state,
            Side::Player,
            &[(Suit::Gold, 7), (Suit::Gold, 4), (Suit::Cups, 7)],
        );

        let counts = pile_counts(&state, Side::Player);

        assert_eq!(counts.cards, 3);
        assert_eq!(counts.sevens, 2);
        assert_eq!(counts.golds, 2);
        assert_eq!(counts.gold_seven, 1);
    }
}
