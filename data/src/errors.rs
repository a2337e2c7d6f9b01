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

//! Error kinds for the replay engine.
//!
//! These are all programming/protocol errors (spec §7): the engine cannot
//! repair them, so handlers validate up front and fail before mutating any
//! board state. Callers are expected to treat any of these as a
//! session-level fault.

use thiserror::Error;

use crate::board_state::place::Place;
use crate::core::primitives::Location;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Pile access with a location tag that isn't one of the five pile
    /// kinds (MainDeck, Hand, Graveyard, Banished, ExtraDeck).
    #[error("{location:?} is not a pile location")]
    UnknownLocation { location: Location },

    /// Lookup at a place that currently holds no card.
    #[error("no card at {place:?}")]
    MissingCard { place: Place },

    /// `MoveSingle(from, to)` called with `from == to`.
    #[error("illegal move: source and destination are both {place:?}")]
    IllegalMove { place: Place },

    /// A message referenced coordinates outside I1-I5, or a reason/type
    /// value outside its enumerated set.
    #[error("malformed message: {reason}")]
    MalformedMessage { reason: String },

    /// Temporal-cell retreat past the sentinel, or advance past the tail
    /// without appending.
    #[error("cursor out of bounds: {reason}")]
    CursorBounds { reason: String },
}

pub type Result<T> = std::result::Result<T, EngineError>;
