// Copyright © spellclash 2024-present
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Routes a [`CriticalMessage`] to its handler pair (spec §4.4). This is
//! the one place that needs to know about every message kind; handlers
//! themselves stay ignorant of cursor bookkeeping.

use data::board_state::board::Board;
use data::errors::EngineError;
use tracing::instrument;

use crate::handlers::{add_remove_card, counter_change, disable_zones, draw, lp_change, shuffle, swap_cards, turn_phase, update_card};
use crate::messages::CriticalMessage;

#[instrument(err, level = "debug", skip(board, msg))]
pub fn forward(board: &mut Board, msg: &CriticalMessage, state: usize, realtime: bool) -> Result<(), EngineError> {
    match msg {
        CriticalMessage::UpdateCard { reason, previous, current, code, position } => {
            update_card::forward(board, *reason, *previous, *current, *code, *position, realtime)
        }
        CriticalMessage::AddCard { place, code, position } => {
            add_remove_card::add_forward(board, state, *place, *code, *position, realtime)
        }
        CriticalMessage::RemoveCard { place } => add_remove_card::remove_forward(board, state, *place),
        CriticalMessage::Draw { player, cards } => draw::forward(board, *player, cards, realtime),
        CriticalMessage::SwapCards { card1, card2 } => swap_cards::apply(board, *card1, *card2),
        CriticalMessage::ShuffleLocation { player, location, shuffled_cards } => {
            shuffle::location_forward(board, *player, *location, shuffled_cards, realtime)
        }
        CriticalMessage::ShuffleSetCards { previous, current } => {
            shuffle::set_cards_forward(board, previous, current, realtime)
        }
        CriticalMessage::CounterChange { place, counter, change } => {
            counter_change::forward(board, *place, *counter, *change, realtime)
        }
        CriticalMessage::DisableZones { places } => disable_zones::forward(board, places, realtime),
        CriticalMessage::LpChange { player, change, amount } => {
            lp_change::forward(board, *player, *change, *amount, realtime)
        }
        CriticalMessage::NewTurn { turn_player } => turn_phase::new_turn_forward(board, *turn_player, realtime),
        CriticalMessage::NewPhase { phase } => turn_phase::new_phase_forward(board, *phase, realtime),
    }
}

#[instrument(err, level = "debug", skip(board, msg))]
pub fn backward(board: &mut Board, msg: &CriticalMessage, state: usize) -> Result<(), EngineError> {
    match msg {
        CriticalMessage::UpdateCard { reason, previous, current, .. } => {
            update_card::backward(board, *reason, *previous, *current)
        }
        CriticalMessage::AddCard { place, .. } => add_remove_card::add_backward(board, state, *place),
        CriticalMessage::RemoveCard { place } => add_remove_card::remove_backward(board, state, *place),
        CriticalMessage::Draw { player, cards } => draw::backward(board, *player, cards),
        CriticalMessage::SwapCards { card1, card2 } => swap_cards::apply(board, *card1, *card2),
        CriticalMessage::ShuffleLocation { player, location, .. } => {
            shuffle::location_backward(board, *player, *location)
        }
        CriticalMessage::ShuffleSetCards { previous, .. } => shuffle::set_cards_backward(board, previous),
        CriticalMessage::CounterChange { place, counter, change } => {
            counter_change::backward(board, *place, *counter, *change)
        }
        CriticalMessage::DisableZones { .. } => disable_zones::backward(board),
        CriticalMessage::LpChange { player, .. } => lp_change::backward(board, *player),
        CriticalMessage::NewTurn { .. } => turn_phase::new_turn_backward(board),
        CriticalMessage::NewPhase { .. } => turn_phase::new_phase_backward(board),
    }
}
