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
use data::core::primitives::{Controller, Location};
use data::errors::EngineError;
use tracing::instrument;

use crate::messages::{CardFace, PreviousSetCard};

/// `ShuffleLocation`: reveals the post-shuffle code of every card in a
/// pile. `shuffled_cards[i]` is `None` when that slot's identity is
/// unknown to the observer, in which case `0` is recorded (spec §4.4).
#[instrument(err, level = "debug", skip(board, shuffled_cards))]
pub fn location_forward(
    board: &mut Board,
    player: Controller,
    location: Location,
    shuffled_cards: &[Option<u32>],
    realtime: bool,
) -> Result<(), EngineError> {
    let pile = board.get_pile_mut(player, location)?;
    for (i, card) in pile.iter_mut().enumerate() {
        let code = shuffled_cards.get(i).copied().flatten().unwrap_or(0);
        card.code.advance_or_append(realtime, code)?;
    }
    Ok(())
}

#[instrument(err, level = "debug", skip(board))]
pub fn location_backward(board: &mut Board, player: Controller, location: Location) -> Result<(), EngineError> {
    let pile = board.get_pile_mut(player, location)?;
    for card in pile.iter_mut() {
        card.code.retreat()?;
    }
    Ok(())
}

/// `ShuffleSetCards`: reveals (or re-hides) the field-spell/pendulum-zone
/// cards named in `previous[]`. When `current` is non-empty each entry
/// supplies the revealed code/position; when empty, `0`/the prior
/// position is recorded instead (spec §4.4).
#[instrument(err, level = "debug", skip(board, previous, current))]
pub fn set_cards_forward(
    board: &mut Board,
    previous: &[PreviousSetCard],
    current: &[CardFace],
    realtime: bool,
) -> Result<(), EngineError> {
    for (i, prev) in previous.iter().enumerate() {
        let card = board.get_card_mut(prev.place)?;
        if let Some(face) = current.get(i) {
            card.code.advance_or_append(realtime, face.code)?;
            card.position.advance_or_append(realtime, face.position.as_u32())?;
        } else {
            card.code.advance_or_append(realtime, 0)?;
            card.position.advance_or_append(realtime, prev.position.as_u32())?;
        }
    }
    Ok(())
}

#[instrument(err, level = "debug", skip(board, previous))]
pub fn set_cards_backward(board: &mut Board, previous: &[PreviousSetCard]) -> Result<(), EngineError> {
    for prev in previous {
        let card = board.get_card_mut(prev.place)?;
        card.code.retreat()?;
        card.position.retreat()?;
    }
    Ok(())
}
