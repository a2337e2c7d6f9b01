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

use enumset::{EnumSet, EnumSetType};
use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// Identifies one of the two duelists in a match.
///
/// The source protocol addresses players by a raw `0`/`1` index; this is
/// kept as a two-variant enum instead so that an out-of-range index is a
/// `MalformedMessage` at the boundary rather than a silent bug deeper in
/// the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Controller {
    Zero,
    One,
}

impl Controller {
    pub const ALL: [Controller; 2] = [Controller::Zero, Controller::One];

    pub fn as_index(self) -> usize {
        match self {
            Controller::Zero => 0,
            Controller::One => 1,
        }
    }

    pub fn opponent(self) -> Controller {
        match self {
            Controller::Zero => Controller::One,
            Controller::One => Controller::Zero,
        }
    }
}

impl TryFrom<u8> for Controller {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Controller::Zero),
            1 => Ok(Controller::One),
            _ => Err(EngineError::MalformedMessage {
                reason: format!("controller must be 0 or 1, got {value}"),
            }),
        }
    }
}

/// Bitmask of card locations.
///
/// A [`Place`](crate::board_state::place::Place)'s `location` is a bitmask
/// rather than a single tag because overlay slots are simultaneously
/// "a monster zone" and "an overlay stack on that zone" (see
/// [`Place::is_pile`](crate::board_state::place::Place::is_pile)).
#[derive(Debug, Hash, Serialize, Deserialize, EnumSetType)]
pub enum Location {
    MainDeck,
    Hand,
    Graveyard,
    Banished,
    ExtraDeck,
    MonsterZone,
    SpellZone,
    Overlay,
    OnField,
    FieldZone,
    PendulumZone,
}

impl Location {
    /// The bits that, if any are set, make a [`Place`] a field place rather
    /// than a pile place.
    pub const FIELD_BITS: EnumSet<Location> = enumset::enum_set!(
        Location::MonsterZone
            | Location::SpellZone
            | Location::Overlay
            | Location::OnField
            | Location::FieldZone
            | Location::PendulumZone
    );

    /// The five locations that identify an ordered pile rather than an
    /// addressable field slot.
    pub const PILE_KINDS: [Location; 5] = [
        Location::MainDeck,
        Location::Hand,
        Location::Graveyard,
        Location::Banished,
        Location::ExtraDeck,
    ];
}

/// Card facing/battle-position, as communicated by `UpdateCard`/`AddCard`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Position {
    FaceDown,
    FaceUpAttack,
    FaceUpDefense,
    FaceDownAttack,
    FaceDownDefense,
}

impl Position {
    /// Wire-encoding used wherever a `Position` is stored in a `TemporalCell<u32>`
    /// (the card record has no `TemporalCell<Position>` field — only numeric
    /// cells — so every handler that touches position converts at the boundary).
    pub fn as_u32(self) -> u32 {
        match self {
            Position::FaceDown => 0,
            Position::FaceUpAttack => 1,
            Position::FaceUpDefense => 2,
            Position::FaceDownAttack => 3,
            Position::FaceDownDefense => 4,
        }
    }

    pub fn from_u32(value: u32) -> Result<Self, EngineError> {
        match value {
            0 => Ok(Position::FaceDown),
            1 => Ok(Position::FaceUpAttack),
            2 => Ok(Position::FaceUpDefense),
            3 => Ok(Position::FaceDownAttack),
            4 => Ok(Position::FaceDownDefense),
            _ => Err(EngineError::MalformedMessage { reason: format!("unknown position {value}") }),
        }
    }
}

/// Reason code carried by `UpdateCard`, controlling how the embedded
/// `previous`/`current` places are interpreted.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum UpdateReason {
    /// Reveal the code of a card by reverse offset from the top of a pile.
    DeckTop,
    /// Move a card from `previous` to `current`.
    Move,
    /// Update facing/position in place.
    PosChange,
    /// Set a card face-down/face-up in place (e.g. a Set effect).
    Set,
}

/// The two directions a counter's quantity can change.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum CounterChangeType {
    Add,
    Remove,
}

/// The four ways a player's life points can change.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum LpChangeType {
    Damage,
    Pay,
    Recover,
    Become,
}

/// Raw numeric counter-type identifier, matching the simulator's wire
/// encoding (e.g. "spell counter", "+1/+1 counter"). Unlike a fixed enum of
/// named counter kinds, this stays an opaque integer because the set of
/// counter types the simulator may report is open-ended and this engine
/// never interprets their meaning, only their count.
pub type CounterType = u32;

/// A card's printed/current numeric code, as assigned by the card database
/// (out of scope for this engine - we only ever store and replay the value
/// the simulator reports).
pub type CardCode = u32;
