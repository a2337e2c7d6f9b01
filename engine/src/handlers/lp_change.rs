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
use data::core::primitives::{Controller, LpChangeType};
use data::errors::EngineError;
use tracing::instrument;

/// Life-point changes never go negative: `Damage`/`Pay` clamp at `0`
/// (spec §4.4, P7).
#[instrument(err, level = "debug", skip(board))]
pub fn forward(
    board: &mut Board,
    player: Controller,
    change: LpChangeType,
    amount: u32,
    realtime: bool,
) -> Result<(), EngineError> {
    let cell = board.player_lp.get_mut(player);
    let current = *cell.get();
    let new_value = match change {
        LpChangeType::Damage | LpChangeType::Pay => current.saturating_sub(amount),
        LpChangeType::Recover => current + amount,
        LpChangeType::Become => amount,
    };
    cell.advance_or_append(realtime, new_value)
}

#[instrument(err, level = "debug", skip(board))]
pub fn backward(board: &mut Board, player: Controller) -> Result<(), EngineError> {
    board.player_lp.get_mut(player).retreat()
}
