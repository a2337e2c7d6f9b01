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
use data::core::primitives::CounterChangeType;
use data::errors::EngineError;
use tracing::instrument;

use crate::messages::Counter;

/// Both ADD and REMOVE append a freshly-computed quantity on forward
/// (`previous + count` or `previous - count`, clamped at `0` the same way
/// `lp_change.rs` clamps life points), and both simply retreat on
/// backward (spec §4.4).
#[instrument(err, level = "debug", skip(board))]
pub fn forward(
    board: &mut Board,
    place: Place,
    counter: Counter,
    change: CounterChangeType,
    realtime: bool,
) -> Result<(), EngineError> {
    let card = board.get_card_mut(place)?;
    let cell = card.counter_cell_mut(counter.counter_type);
    let current = *cell.get();
    let new_value = match change {
        CounterChangeType::Add => current + counter.count,
        CounterChangeType::Remove => current.saturating_sub(counter.count),
    };
    cell.advance_or_append(realtime, new_value)
}

#[instrument(err, level = "debug", skip(board))]
pub fn backward(
    board: &mut Board,
    place: Place,
    counter: Counter,
    _change: CounterChangeType,
) -> Result<(), EngineError> {
    let card = board.get_card_mut(place)?;
    card.counter_cell_mut(counter.counter_type).retreat()
}
