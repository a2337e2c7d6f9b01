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

/// Moves the top `cards.len()` cards of `player`'s deck to the tail of
/// their hand, revealing each one's code in draw order (spec §4.4):
/// `cards[0]` is drawn first and lands at `handSize + 0`, and so on. "Top
/// of deck" is the end of the deck vector.
#[instrument(err, level = "debug", skip(board))]
pub fn forward(board: &mut Board, player: Controller, cards: &[u32], realtime: bool) -> Result<(), EngineError> {
    for &code in cards {
        let mut card = board
            .get_pile_mut(player, Location::MainDeck)?
            .pop()
            .ok_or(EngineError::MissingCard { place: Place::pile(player, Location::MainDeck, 0) })?;
        card.code.advance_or_append(realtime, code)?;
        board.get_pile_mut(player, Location::Hand)?.push(card);
    }
    Ok(())
}

/// Undoes a draw in reverse order: the last-drawn card (at `handSize -
/// 1`) is the first one returned to the deck top.
#[instrument(err, level = "debug", skip(board))]
pub fn backward(board: &mut Board, player: Controller, cards: &[u32]) -> Result<(), EngineError> {
    for _ in cards {
        let mut card = board
            .get_pile_mut(player, Location::Hand)?
            .pop()
            .ok_or(EngineError::MissingCard { place: Place::pile(player, Location::Hand, 0) })?;
        card.code.retreat()?;
        board.get_pile_mut(player, Location::MainDeck)?.push(card);
    }
    Ok(())
}
