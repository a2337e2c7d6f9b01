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

use data::board_state::board::Board;
use data::board_state::place::Place;
use data::card_states::card::Card;
use data::core::primitives::Position;
use data::errors::EngineError;
use tracing::instrument;

/// `AddCard` forward (spec §4.4). When `realtime`, this is genuinely new
/// history: a fresh card is inserted at `place`. When re-walking
/// (`!realtime`), the card that a prior `RemoveCard`/`AddCard` backward
/// step parked in `temp_cards` is moved back instead, since it already
/// carries the attribute history this replay is re-walking over.
#[instrument(err, level = "debug", skip(board))]
pub fn add_forward(
    board: &mut Board,
    state: usize,
    place: Place,
    code: u32,
    position: Position,
    realtime: bool,
) -> Result<(), EngineError> {
    if realtime {
        board.insert_card(place, Card::default())?;
    } else {
        board.restore_from_temp(state, place)?;
    }
    let card = board.get_card_mut(place)?;
    card.code.advance_or_append(realtime, code)?;
    card.position.advance_or_append(realtime, position.as_u32())?;
    Ok(())
}

/// `AddCard` backward: retreat the attribute cells, then move the card
/// into the removal graveyard keyed by this message's own index, so a
/// later forward re-walk of this same message can restore it.
#[instrument(err, level = "debug", skip(board))]
pub fn add_backward(board: &mut Board, state: usize, place: Place) -> Result<(), EngineError> {
    let card = board.get_card_mut(place)?;
    card.code.retreat()?;
    card.position.retreat()?;
    board.remove_to_temp(state, place)?;
    Ok(())
}

/// `RemoveCard` forward: exact inverse of `AddCard` backward, with no
/// attribute edits — the card simply ceases to exist on the board.
#[instrument(err, level = "debug", skip(board))]
pub fn remove_forward(board: &mut Board, state: usize, place: Place) -> Result<(), EngineError> {
    board.remove_to_temp(state, place)
}

/// `RemoveCard` backward: exact inverse of `AddCard` forward+not-realtime.
#[instrument(err, level = "debug", skip(board))]
pub fn remove_backward(board: &mut Board, state: usize, place: Place) -> Result<(), EngineError> {
    board.restore_from_temp(state, place)
}
