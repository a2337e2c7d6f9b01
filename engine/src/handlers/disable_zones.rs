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

/// Writes `true`/`false` into every cell of the fixed `disabled_zones`
/// domain depending on membership in `places` (spec §4.4). Every cell is
/// touched by every `DisableZones` message, so this is the single
/// operation in the handler set whose cost scales with the domain size
/// rather than with the message payload (see DESIGN.md for the resolved
/// reading of the `!realtime` "sync pass" wording).
#[instrument(err, level = "debug", skip(board, places))]
pub fn forward(board: &mut Board, places: &[Place], realtime: bool) -> Result<(), EngineError> {
    for (place, cell) in board.disabled_zones.iter_mut() {
        let value = places.contains(place);
        cell.advance_or_append(realtime, value)?;
    }
    Ok(())
}

#[instrument(err, level = "debug", skip(board))]
pub fn backward(board: &mut Board) -> Result<(), EngineError> {
    for cell in board.disabled_zones.values_mut() {
        cell.retreat()?;
    }
    Ok(())
}
