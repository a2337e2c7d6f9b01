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

use serde::{Deserialize, Serialize};

use crate::card_states::card::Card;
use crate::core::primitives::Location;
use crate::errors::EngineError;

/// The five ordered piles belonging to a single player.
///
/// Index 0 is the pile bottom for every pile except the hand, where index
/// 0 is leftmost (spec §3.4).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Piles {
    pub main_deck: Vec<Card>,
    pub hand: Vec<Card>,
    pub graveyard: Vec<Card>,
    pub banished: Vec<Card>,
    pub extra_deck: Vec<Card>,
}

impl Piles {
    pub fn get(&self, location: Location) -> Result<&Vec<Card>, EngineError> {
        match location {
            Location::MainDeck => Ok(&self.main_deck),
            Location::Hand => Ok(&self.hand),
            Location::Graveyard => Ok(&self.graveyard),
            Location::Banished => Ok(&self.banished),
            Location::ExtraDeck => Ok(&self.extra_deck),
            _ => utils::fail!(EngineError::UnknownLocation { location }),
        }
    }

    pub fn get_mut(&mut self, location: Location) -> Result<&mut Vec<Card>, EngineError> {
        match location {
            Location::MainDeck => Ok(&mut self.main_deck),
            Location::Hand => Ok(&mut self.hand),
            Location::Graveyard => Ok(&mut self.graveyard),
            Location::Banished => Ok(&mut self.banished),
            Location::ExtraDeck => Ok(&mut self.extra_deck),
            _ => utils::fail!(EngineError::UnknownLocation { location }),
        }
    }
}
