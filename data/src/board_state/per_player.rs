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

use crate::core::primitives::Controller;

/// A value associated 1:1 with each of the two players.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PerPlayer<T> {
    zero: T,
    one: T,
}

impl<T> PerPlayer<T> {
    pub fn get(&self, controller: Controller) -> &T {
        match controller {
            Controller::Zero => &self.zero,
            Controller::One => &self.one,
        }
    }

    pub fn get_mut(&mut self, controller: Controller) -> &mut T {
        match controller {
            Controller::Zero => &mut self.zero,
            Controller::One => &mut self.one,
        }
    }
}
