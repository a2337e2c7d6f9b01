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
use data::core::primitives::{Position, UpdateReason};
use data::errors::EngineError;
use tracing::instrument;

/// `reason` selects how `previous`/`current` are interpreted (spec §4.4):
/// `DeckTop` addresses by reverse offset from the pile top and only
/// updates `code`; `Move` relocates the card and updates `code` and
/// `position`; `PosChange`/`Set` update `code`/`position` in place.
#[instrument(err, level = "debug", skip(board))]
pub fn forward(
    board: &mut Board,
    reason: UpdateReason,
    previous: Place,
    current: Place,
    code: u32,
    position: Position,
    realtime: bool,
) -> Result<(), EngineError> {
    match reason {
        UpdateReason::DeckTop => {
            deck_top_card_mut(board, previous)?.code.advance_or_append(realtime, code)?;
        }
        UpdateReason::Move => {
            board.move_single(previous, current, true)?;
            let card = board.get_card_mut(current)?;
            card.code.advance_or_append(realtime, code)?;
            card.position.advance_or_append(realtime, position.as_u32())?;
        }
        UpdateReason::PosChange | UpdateReason::Set => {
            let card = board.get_card_mut(previous)?;
            card.code.advance_or_append(realtime, code)?;
            card.position.advance_or_append(realtime, position.as_u32())?;
        }
    }
    Ok(())
}

#[instrument(err, level = "debug", skip(board))]
pub fn backward(
    board: &mut Board,
    reason: UpdateReason,
    previous: Place,
    current: Place,
) -> Result<(), EngineError> {
    match reason {
        UpdateReason::DeckTop => {
            deck_top_card_mut(board, previous)?.code.retreat()?;
        }
        UpdateReason::Move => {
            let card = board.get_card_mut(current)?;
            card.code.retreat()?;
            card.position.retreat()?;
            board.move_single(current, previous, false)?;
        }
        UpdateReason::PosChange | UpdateReason::Set => {
            let card = board.get_card_mut(previous)?;
            card.code.retreat()?;
            card.position.retreat()?;
        }
    }
    Ok(())
}

/// `previous.sequence` is a reverse offset from the pile top: `0` is the
/// topmost card, `1` the next one down, and so on.
fn deck_top_card_mut(board: &mut Board, previous: Place) -> Result<&mut data::card_states::card::Card, EngineError> {
    let kind = previous.pile_kind()?;
    let pile = board.get_pile_mut(previous.controller, kind)?;
    let offset = previous.sequence as usize;
    let index = pile
        .len()
        .checked_sub(1 + offset)
        .ok_or(EngineError::MissingCard { place: previous })?;
    pile.get_mut(index).ok_or(EngineError::MissingCard { place: previous })
}
