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

//! Core data model for the duel replay engine: the temporal cell, card
//! records, zone classification, and the board state container (spec §3).
//!
//! This crate owns no message-interpretation logic; see the `engine`
//! crate for `forward`/`backward` dispatch.

pub mod board_state {
    pub mod board;
    pub mod per_player;
    pub mod piles;
    pub mod place;
}

pub mod card_states {
    pub mod card;
    pub mod temporal_cell;
}

pub mod core {
    pub mod primitives;
}

pub mod errors;
