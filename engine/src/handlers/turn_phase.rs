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
use data::errors::EngineError;
use tracing::instrument;

/// `turn` is a plain counter with no backward history (spec §3.4): it
/// moves in lockstep with `turn_player`'s cell rather than being stepped
/// independently.
#[instrument(err, level = "debug", skip(board))]
pub fn new_turn_forward(board: &mut Board, turn_player: u32, realtime: bool) -> Result<(), EngineError> {
    board.turn += 1;
    board.turn_player.advance_or_append(realtime, turn_player)
}

#[instrument(err, level = "debug", skip(board))]
pub fn new_turn_backward(board: &mut Board) -> Result<(), EngineError> {
    board.turn_player.retreat()?;
    board.turn -= 1;
    Ok(())
}

#[instrument(err, level = "debug", skip(board))]
pub fn new_phase_forward(board: &mut Board, phase: u32, realtime: bool) -> Result<(), EngineError> {
    board.phase.advance_or_append(realtime, phase)
}

#[instrument(err, level = "debug", skip(board))]
pub fn new_phase_backward(board: &mut Board) -> Result<(), EngineError> {
    board.phase.retreat()
}
