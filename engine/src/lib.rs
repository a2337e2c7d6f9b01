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

//! Message interpretation for the duel replay engine: the message
//! alphabet, the per-message handler pairs, their dispatch table, and the
//! cursor that ties them to a [`Board`](data::board_state::board::Board).

pub mod dispatch;
pub mod handlers;
pub mod messages;
pub mod replay;

pub use messages::{AnyMessage, CriticalMessage, Message, NonCriticalMessage};
pub use replay::DuelReplay;
