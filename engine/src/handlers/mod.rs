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

//! One module per critical message kind (spec §4.4). Every module exposes
//! a `forward` and a `backward` function; the two must be exact inverses
//! with respect to all board state.

pub mod add_remove_card;
pub mod counter_change;
pub mod disable_zones;
pub mod draw;
pub mod lp_change;
pub mod shuffle;
pub mod swap_cards;
pub mod turn_phase;
pub mod update_card;
