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
use data::errors::EngineError;
use tracing::instrument;

/// Exchanges the cards at `card1` and `card2`, whatever combination of
/// pile/field endpoints they are. The operation is its own inverse (spec
/// §4.4) — applying it twice restores the original arrangement — so both
/// `forward` and `backward` dispatch here.
#[instrument(err, level = "debug", skip(board))]
pub fn apply(board: &mut Board, card1: Place, card2: Place) -> Result<(), EngineError> {
    utils::verify!(card1 != card2, EngineError::IllegalMove { place: card1 });
    let a = board.remove_card(card1)?;
    let b = board.remove_card(card2)?;
    board.insert_card(card2, a)?;
    board.insert_card(card1, b)?;
    Ok(())
}
