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

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::card_states::temporal_cell::TemporalCell;
use crate::core::primitives::CounterType;
use crate::errors::EngineError;

/// A card (or overlay material / token) tracked by the board.
///
/// Every attribute is its own [`TemporalCell`] rather than a plain field,
/// so that stepping the replay cursor backward restores each attribute to
/// its value at the prior state without recomputing anything from the
/// message log (spec §3.3).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Card {
    pub position: TemporalCell<u32>,
    pub code: TemporalCell<u32>,
    pub alias: TemporalCell<u32>,
    pub kind: TemporalCell<u32>,
    pub rank: TemporalCell<u32>,
    pub attribute: TemporalCell<u32>,
    pub race: TemporalCell<u32>,
    pub owner: TemporalCell<u32>,
    pub left_scale: TemporalCell<u32>,
    pub right_scale: TemporalCell<u32>,
    pub link_arrows: TemporalCell<u32>,

    pub level: TemporalCell<i32>,
    pub atk: TemporalCell<i32>,
    pub def: TemporalCell<i32>,
    pub base_atk: TemporalCell<i32>,
    pub base_def: TemporalCell<i32>,

    /// Counter entries are created lazily the first time a counter type is
    /// observed on this card (spec §3.3).
    pub counters: HashMap<CounterType, TemporalCell<u32>>,
}

impl Card {
    /// Returns the counter cell for `counter_type`, creating it (at its
    /// sentinel value) on first access.
    pub fn counter_cell_mut(&mut self, counter_type: CounterType) -> &mut TemporalCell<u32> {
        self.counters.entry(counter_type).or_default()
    }

    /// Advances or retreats every counter cell on this card, per the
    /// `MoveSingle` "clear all counters" step (spec §4.3): when moving
    /// onto the field or back off of it, a card's counters are reset.
    /// `advancing` selects direction: forward steps append a `0`,
    /// backward steps retreat.
    pub fn clear_all_counters(&mut self, advancing: bool) -> Result<(), EngineError> {
        for cell in self.counters.values_mut() {
            if advancing {
                cell.advance_or_append(true, 0)?;
            } else {
                cell.retreat()?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_cell_is_created_lazily() {
        let mut card = Card::default();
        assert!(card.counters.is_empty());
        let cell = card.counter_cell_mut(7);
        assert_eq!(*cell.get(), 0);
        assert_eq!(card.counters.len(), 1);
    }

    #[test]
    fn clear_all_counters_appends_zero_when_advancing() {
        let mut card = Card::default();
        card.counter_cell_mut(7).advance_or_append(true, 3).unwrap();
        card.clear_all_counters(true).unwrap();
        assert_eq!(*card.counters[&7].get(), 0);
    }

    #[test]
    fn clear_all_counters_retreats_when_regressing() {
        let mut card = Card::default();
        card.counter_cell_mut(7).advance_or_append(true, 3).unwrap();
        card.clear_all_counters(true).unwrap();
        card.clear_all_counters(false).unwrap();
        assert_eq!(*card.counters[&7].get(), 3);
    }
}
