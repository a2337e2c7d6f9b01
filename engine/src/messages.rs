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

//! The message alphabet this engine replays (spec §4.4, §9 "Tagged unions
//! for messages").
//!
//! The wire type is a discriminated union with a single `Information`
//! variant, carrying either a critical message (one that mutates board
//! state and must be replayable in both directions) or a non-critical one
//! (diagnostics, hints, chain visuals - surfaced to the caller but never
//! interpreted for stepping).

use data::board_state::place::Place;
use data::core::primitives::{
    CardCode, Controller, CounterChangeType, CounterType, Location, LpChangeType, Position, UpdateReason,
};
use serde::{Deserialize, Serialize};

/// A card revealed by `AddCard`/`UpdateCard`-style messages: its code and
/// facing/battle position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CardFace {
    pub code: CardCode,
    pub position: Position,
}

/// One entry of `ShuffleSetCards`'s `previous[]` array: the pre-shuffle
/// place and position of a field-spell/pendulum-zone card.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PreviousSetCard {
    pub place: Place,
    pub position: Position,
}

/// A single counter quantity, as carried by `CounterChange`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Counter {
    pub counter_type: CounterType,
    pub count: u32,
}

/// The critical message set (spec §4.4): each has a forward and a
/// backward branch that must be exact inverses of one another.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CriticalMessage {
    UpdateCard { reason: UpdateReason, previous: Place, current: Place, code: CardCode, position: Position },
    AddCard { place: Place, code: CardCode, position: Position },
    RemoveCard { place: Place },
    Draw { player: Controller, cards: Vec<CardCode> },
    SwapCards { card1: Place, card2: Place },
    ShuffleLocation { player: Controller, location: Location, shuffled_cards: Vec<Option<CardCode>> },
    ShuffleSetCards { previous: Vec<PreviousSetCard>, current: Vec<CardFace> },
    CounterChange { place: Place, counter: Counter, change: CounterChangeType },
    DisableZones { places: Vec<Place> },
    LpChange { player: Controller, change: LpChangeType, amount: u32 },
    NewTurn { turn_player: u32 },
    NewPhase { phase: u32 },
}

/// Messages that never mutate board state (spec §4.4 "Non-critical
/// messages"): hints, win declarations, chain visuals, and the like. They
/// are surfaced to caller diagnostics but ignored for stepping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum NonCriticalMessage {
    Hint { text: String },
    Win { player: Controller, reason: String },
    ChainVisual { chain_link: u32 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Message {
    Critical(CriticalMessage),
    NonCritical(NonCriticalMessage),
}

/// A tagged union with one variant, `Information`, carrying either a
/// critical or non-critical message (spec §6).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AnyMessage {
    Information(Message),
}

impl AnyMessage {
    pub fn critical(msg: CriticalMessage) -> Self {
        AnyMessage::Information(Message::Critical(msg))
    }

    pub fn non_critical(msg: NonCriticalMessage) -> Self {
        AnyMessage::Information(Message::NonCritical(msg))
    }

    pub fn as_critical(&self) -> Option<&CriticalMessage> {
        match self {
            AnyMessage::Information(Message::Critical(msg)) => Some(msg),
            _ => None,
        }
    }
}
