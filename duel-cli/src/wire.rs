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

//! On-disk shape of a duel log file: seeding hooks plus the message
//! sequence itself. The engine has no file format of its own (spec §6)
//! — this is purely a convenience for the CLI, not a protocol the engine
//! cares about.

use data::core::primitives::{Controller, Location};
use engine::AnyMessage;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct DuelLog {
    #[serde(default)]
    pub fill_piles: Vec<FillPile>,
    #[serde(default)]
    pub starting_lp: Vec<StartingLp>,
    pub messages: Vec<AnyMessage>,
}

#[derive(Debug, Deserialize)]
pub struct FillPile {
    pub controller: Controller,
    pub location: Location,
    pub count: u32,
}

#[derive(Debug, Deserialize)]
pub struct StartingLp {
    pub controller: Controller,
    pub amount: u32,
}
