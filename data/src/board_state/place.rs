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

use std::cmp::Ordering;

use enumset::EnumSet;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{Controller, Location};
use crate::errors::EngineError;

/// Identifies a card's home: which player controls it, which location
/// bitmask it lives under, its index within that location, and (for
/// overlay slots only) its position within the overlay stack.
///
/// This is the sole source of truth for whether a card lives in a pile or
/// on the field — see [`Place::is_pile`].
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Place {
    pub controller: Controller,
    pub location: EnumSet<Location>,
    pub sequence: u32,
    /// Position within an overlay stack, 0 = bottom. Negative (represented
    /// here as `-1`) means "not an overlay slot".
    pub overlay_sequence: i32,
}

impl Place {
    pub const NOT_OVERLAY: i32 = -1;

    pub fn pile(controller: Controller, location: Location, sequence: u32) -> Self {
        Self {
            controller,
            location: EnumSet::only(location),
            sequence,
            overlay_sequence: Self::NOT_OVERLAY,
        }
    }

    pub fn field(controller: Controller, location: EnumSet<Location>, sequence: u32) -> Self {
        Self { controller, location, sequence, overlay_sequence: Self::NOT_OVERLAY }
    }

    pub fn overlay(
        controller: Controller,
        location: EnumSet<Location>,
        sequence: u32,
        overlay_sequence: u32,
    ) -> Self {
        Self { controller, location, sequence, overlay_sequence: overlay_sequence as i32 }
    }

    /// True iff none of the field-only bits are set in `location` (§3.1):
    /// this is the sole source of truth for container selection.
    pub fn is_pile(&self) -> bool {
        (self.location & Location::FIELD_BITS).is_empty()
    }

    pub fn is_overlay(&self) -> bool {
        self.overlay_sequence >= 0
    }

    /// Resolves this place's single pile kind, failing if `location` isn't
    /// exactly one of the five pile locations.
    pub fn pile_kind(&self) -> Result<Location, EngineError> {
        Location::PILE_KINDS
            .into_iter()
            .find(|kind| self.location.contains(*kind))
            .filter(|_| self.is_pile())
            .ok_or(EngineError::UnknownLocation { location: single_or_empty(self.location) })
    }
}

fn single_or_empty(set: EnumSet<Location>) -> Location {
    set.iter().next().unwrap_or(Location::MainDeck)
}

impl PartialOrd for Place {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Place {
    fn cmp(&self, other: &Self) -> Ordering {
        self.controller
            .cmp(&other.controller)
            .then_with(|| self.location.as_u32().cmp(&other.location.as_u32()))
            .then_with(|| self.sequence.cmp(&other.sequence))
            .then_with(|| self.overlay_sequence.cmp(&other.overlay_sequence))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pile_places_have_no_field_bits() {
        let place = Place::pile(Controller::Zero, Location::Hand, 0);
        assert!(place.is_pile());
    }

    #[test]
    fn field_places_are_not_piles() {
        let place = Place::field(Controller::Zero, EnumSet::only(Location::MonsterZone), 2);
        assert!(!place.is_pile());
    }

    #[test]
    fn overlay_places_are_not_piles_either() {
        let place = Place::overlay(
            Controller::Zero,
            EnumSet::only(Location::MonsterZone) | Location::Overlay,
            2,
            0,
        );
        assert!(!place.is_pile());
        assert!(place.is_overlay());
    }

    #[test]
    fn ordering_is_lexicographic() {
        let a = Place::pile(Controller::Zero, Location::Hand, 0);
        let b = Place::pile(Controller::Zero, Location::Hand, 1);
        assert!(a < b);
        let c = Place::pile(Controller::One, Location::Hand, 0);
        assert!(a < c);
    }

    #[test]
    fn unknown_location_is_rejected() {
        let place = Place::field(Controller::Zero, EnumSet::only(Location::MonsterZone), 2);
        assert_eq!(
            place.pile_kind(),
            Err(EngineError::UnknownLocation { location: Location::MonsterZone })
        );
    }
}
