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

use std::collections::{BTreeMap, HashMap};

use enumset::EnumSet;
use serde::{Deserialize, Serialize};

use crate::board_state::per_player::PerPlayer;
use crate::board_state::piles::Piles;
use crate::board_state::place::Place;
use crate::card_states::card::Card;
use crate::card_states::temporal_cell::TemporalCell;
use crate::core::primitives::{Controller, Location};
use crate::errors::EngineError;

/// Mutable ownership root for a single duel (spec §3.4).
///
/// Every [`Card`] is owned by exactly one of a pile, [`Self::field_zones`],
/// or [`Self::temp_cards`] at any instant (invariant I4); transitions
/// between them are moves, never copies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Board {
    pub piles: PerPlayer<Piles>,

    /// Field slots: monster/spell/pendulum zones and overlay stacks,
    /// addressed by [`Place`]. Ordered so field-slot iteration is
    /// deterministic (spec §3.1: "field-slot maps use lexicographic
    /// order").
    pub field_zones: BTreeMap<Place, Card>,

    /// Fixed-domain map from every zone that can be disabled to its
    /// disabled/enabled history. The keyset never changes after
    /// construction (invariant I5).
    pub disabled_zones: BTreeMap<Place, TemporalCell<bool>>,

    /// The "graveyard of removals": cards that ceased to exist at a known
    /// forward-state, keyed by `(state, place)` so that a second card
    /// removed at the same place on the same state index never collides
    /// (spec §9, "Temp-card keying").
    pub temp_cards: HashMap<(usize, Place), Card>,

    pub player_lp: PerPlayer<TemporalCell<u32>>,
    pub turn_player: TemporalCell<u32>,
    pub phase: TemporalCell<u32>,

    /// Plain turn counter; unlike the other scalars this has no
    /// backward-stepping history because nothing in spec §4.4 ever reads
    /// a past turn number, only increments/decrements it in lockstep with
    /// `NewTurn`.
    pub turn: u32,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            piles: PerPlayer::default(),
            field_zones: BTreeMap::new(),
            disabled_zones: Self::initial_disabled_zones(),
            temp_cards: HashMap::new(),
            player_lp: PerPlayer::default(),
            turn_player: TemporalCell::default(),
            phase: TemporalCell::default(),
            turn: 0,
        }
    }

    /// Builds the fixed `disabled_zones` domain for both controllers (see
    /// DESIGN.md for why a one-sided domain was rejected).
    fn initial_disabled_zones() -> BTreeMap<Place, TemporalCell<bool>> {
        let mut map = BTreeMap::new();
        for controller in Controller::ALL {
            for sequence in 0..=6u32 {
                map.insert(
                    Place::field(controller, EnumSet::only(Location::MonsterZone), sequence),
                    TemporalCell::default(),
                );
            }
            for sequence in 0..=5u32 {
                map.insert(
                    Place::field(controller, EnumSet::only(Location::SpellZone), sequence),
                    TemporalCell::default(),
                );
            }
            for sequence in 0..=1u32 {
                map.insert(
                    Place::field(controller, EnumSet::only(Location::PendulumZone), sequence),
                    TemporalCell::default(),
                );
            }
        }
        map
    }

    pub fn get_pile(&self, controller: Controller, location: Location) -> Result<&Vec<Card>, EngineError> {
        self.piles.get(controller).get(location)
    }

    pub fn get_pile_mut(
        &mut self,
        controller: Controller,
        location: Location,
    ) -> Result<&mut Vec<Card>, EngineError> {
        self.piles.get_mut(controller).get_mut(location)
    }

    /// Looks up the card at `place`: a pile element at `sequence` for pile
    /// places, or the `field_zones` entry for field places (spec §4.2).
    pub fn get_card(&self, place: Place) -> Result<&Card, EngineError> {
        if place.is_pile() {
            let pile = self.get_pile(place.controller, place.pile_kind()?)?;
            pile.get(place.sequence as usize)
                .ok_or(EngineError::MissingCard { place })
        } else {
            self.field_zones.get(&place).ok_or(EngineError::MissingCard { place })
        }
    }

    pub fn get_card_mut(&mut self, place: Place) -> Result<&mut Card, EngineError> {
        if place.is_pile() {
            let kind = place.pile_kind()?;
            let pile = self.get_pile_mut(place.controller, kind)?;
            pile.get_mut(place.sequence as usize).ok_or(EngineError::MissingCard { place })
        } else {
            self.field_zones.get_mut(&place).ok_or(EngineError::MissingCard { place })
        }
    }

    /// Transfers exactly one card between `from` and `to`, handling all
    /// four combinations of pile/field endpoints (spec §4.3). Counters are
    /// cleared whenever a card crosses the pile/field boundary, and
    /// overlay stacks are compacted/expanded as needed.
    pub fn move_single(&mut self, from: Place, to: Place, advancing: bool) -> Result<(), EngineError> {
        utils::verify!(from != to, EngineError::IllegalMove { place: from });

        match (from.is_pile(), to.is_pile()) {
            (true, true) => {
                let card = self.remove_from_pile(from)?;
                self.insert_into_pile(to, card)?;
            }
            (true, false) => {
                let mut card = self.remove_from_pile(from)?;
                card.clear_all_counters(advancing)?;
                self.insert_overlay_aware(to, card)?;
            }
            (false, true) => {
                let mut card = self.remove_field(from)?;
                card.clear_all_counters(advancing)?;
                self.insert_into_pile(to, card)?;
            }
            (false, false) => {
                let card = self.remove_field(from)?;
                self.insert_overlay_aware(to, card)?;
            }
        }

        Ok(())
    }

    /// Places a brand-new card at `place` (pile insertion, or overlay-aware
    /// field insertion). Used by `AddCard`'s forward+realtime branch and by
    /// `SwapCards`.
    pub fn insert_card(&mut self, place: Place, card: Card) -> Result<(), EngineError> {
        if place.is_pile() {
            self.insert_into_pile(place, card)
        } else {
            self.insert_overlay_aware(place, card)
        }
    }

    /// Removes and returns the card at `place` (pile removal, or
    /// overlay-compacting field removal). Used by `SwapCards`.
    pub fn remove_card(&mut self, place: Place) -> Result<Card, EngineError> {
        if place.is_pile() {
            self.remove_from_pile(place)
        } else {
            self.remove_field(place)
        }
    }

    fn remove_from_pile(&mut self, place: Place) -> Result<Card, EngineError> {
        let kind = place.pile_kind()?;
        let pile = self.get_pile_mut(place.controller, kind)?;
        utils::verify!((place.sequence as usize) < pile.len(), EngineError::MissingCard { place });
        Ok(pile.remove(place.sequence as usize))
    }

    fn insert_into_pile(&mut self, place: Place, card: Card) -> Result<(), EngineError> {
        let kind = place.pile_kind()?;
        let pile = self.get_pile_mut(place.controller, kind)?;
        let index = (place.sequence as usize).min(pile.len());
        pile.insert(index, card);
        Ok(())
    }

    fn remove_field(&mut self, place: Place) -> Result<Card, EngineError> {
        let card = self.field_zones.remove(&place).ok_or(EngineError::MissingCard { place })?;
        if place.is_overlay() {
            self.compact_overlays_after_removal(place);
        }
        Ok(card)
    }

    fn insert_overlay_aware(&mut self, place: Place, card: Card) -> Result<(), EngineError> {
        if place.is_overlay() {
            self.shift_overlays_before_insertion(place);
        }
        self.field_zones.insert(place, card);
        Ok(())
    }

    fn host_siblings(&self, place: Place, predicate: impl Fn(i32) -> bool) -> Vec<Place> {
        self.field_zones
            .keys()
            .filter(|p| {
                p.controller == place.controller
                    && p.sequence == place.sequence
                    && p.location == place.location
                    && p.is_overlay()
                    && predicate(p.overlay_sequence)
            })
            .copied()
            .collect()
    }

    /// After removing the overlay at index `k`, every overlay on the same
    /// host above `k` shifts down by one, closing the gap (spec §4.3,
    /// §9 "Overlay compaction").
    fn compact_overlays_after_removal(&mut self, removed: Place) {
        let mut affected = self.host_siblings(removed, |seq| seq > removed.overlay_sequence);
        affected.sort_by_key(|p| p.overlay_sequence);
        for place in affected {
            let card = self.field_zones.remove(&place).expect("sibling overlay vanished");
            let mut shifted = place;
            shifted.overlay_sequence -= 1;
            self.field_zones.insert(shifted, card);
        }
    }

    /// Before inserting a new overlay at index `k`, every existing overlay
    /// on the same host at or above `k` shifts up by one to make room.
    fn shift_overlays_before_insertion(&mut self, inserted: Place) {
        let mut affected = self.host_siblings(inserted, |seq| seq >= inserted.overlay_sequence);
        affected.sort_by_key(|p| std::cmp::Reverse(p.overlay_sequence));
        for place in affected {
            let card = self.field_zones.remove(&place).expect("sibling overlay vanished");
            let mut shifted = place;
            shifted.overlay_sequence += 1;
            self.field_zones.insert(shifted, card);
        }
    }

    /// Seeding hook: appends `count` fresh face-down cards to the bottom
    /// of a pile before the first forward step (spec §4.5).
    pub fn fill_pile(
        &mut self,
        controller: Controller,
        location: Location,
        count: u32,
    ) -> Result<(), EngineError> {
        let pile = self.get_pile_mut(controller, location)?;
        for _ in 0..count {
            let mut card = Card::default();
            card.position.advance_or_append(true, 0)?;
            pile.push(card);
        }
        Ok(())
    }

    /// Seeding hook: appends a player's starting life total.
    pub fn set_lp(&mut self, controller: Controller, amount: u32) -> Result<(), EngineError> {
        self.player_lp.get_mut(controller).advance_or_append(true, amount)
    }

    /// Moves the card at `place` into the removal graveyard, keyed by the
    /// current `state` index. Used by `RemoveCard`'s forward branch and
    /// `AddCard`'s backward branch.
    pub fn remove_to_temp(&mut self, state: usize, place: Place) -> Result<(), EngineError> {
        let card = if place.is_pile() {
            self.remove_from_pile(place)?
        } else {
            self.remove_field(place)?
        };
        self.temp_cards.insert((state, place), card);
        Ok(())
    }

    /// Moves a card back out of the removal graveyard onto the board.
    /// Used by `AddCard`'s forward-not-realtime branch and `RemoveCard`'s
    /// backward branch.
    pub fn restore_from_temp(&mut self, state: usize, place: Place) -> Result<(), EngineError> {
        let card = self
            .temp_cards
            .remove(&(state, place))
            .ok_or(EngineError::MissingCard { place })?;
        if place.is_pile() {
            self.insert_into_pile(place, card)
        } else {
            self.insert_overlay_aware(place, card)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_zones_domain_covers_both_controllers() {
        let board = Board::new();
        assert!(board
            .disabled_zones
            .keys()
            .any(|p| p.controller == Controller::Zero));
        assert!(board
            .disabled_zones
            .keys()
            .any(|p| p.controller == Controller::One));
        // 2 controllers * (7 monster + 6 spell + 2 pendulum) = 30
        assert_eq!(board.disabled_zones.len(), 30);
    }

    #[test]
    fn move_single_rejects_identical_endpoints() {
        let mut board = Board::new();
        board.fill_pile(Controller::Zero, Location::Hand, 1).unwrap();
        let place = Place::pile(Controller::Zero, Location::Hand, 0);
        assert_eq!(
            board.move_single(place, place, true),
            Err(EngineError::IllegalMove { place })
        );
    }

    #[test]
    fn pile_to_pile_move_relocates_the_card() {
        let mut board = Board::new();
        board.fill_pile(Controller::Zero, Location::Hand, 1).unwrap();
        let from = Place::pile(Controller::Zero, Location::Hand, 0);
        let to = Place::pile(Controller::Zero, Location::Graveyard, 0);
        board.move_single(from, to, true).unwrap();
        assert!(board.get_pile(Controller::Zero, Location::Hand).unwrap().is_empty());
        assert_eq!(board.get_pile(Controller::Zero, Location::Graveyard).unwrap().len(), 1);
    }

    #[test]
    fn pile_to_field_move_clears_counters() {
        let mut board = Board::new();
        board.fill_pile(Controller::Zero, Location::Hand, 1).unwrap();
        let from = Place::pile(Controller::Zero, Location::Hand, 0);
        board.get_card_mut(from).unwrap().counter_cell_mut(3).advance_or_append(true, 5).unwrap();
        let to = Place::field(Controller::Zero, EnumSet::only(Location::MonsterZone), 2);
        board.move_single(from, to, true).unwrap();
        let card = board.get_card(to).unwrap();
        assert_eq!(*card.counters[&3].get(), 0);
    }

    #[test]
    fn overlay_removal_compacts_higher_overlays_down() {
        let mut board = Board::new();
        let host = EnumSet::only(Location::MonsterZone) | Location::Overlay;
        let bottom = Place::overlay(Controller::Zero, host, 2, 0);
        let middle = Place::overlay(Controller::Zero, host, 2, 1);
        let top = Place::overlay(Controller::Zero, host, 2, 2);
        board.field_zones.insert(bottom, Card::default());
        board.field_zones.insert(middle, Card::default());
        board.field_zones.insert(top, Card::default());

        // Remove the bottom overlay directly (bypassing move_single's pile
        // precondition) to exercise compaction in isolation.
        board.field_zones.remove(&bottom);
        board.compact_overlays_after_removal(bottom);

        assert!(!board.field_zones.contains_key(&middle));
        assert!(!board.field_zones.contains_key(&top));
        assert!(board.field_zones.contains_key(&Place::overlay(Controller::Zero, host, 2, 0)));
        assert!(board.field_zones.contains_key(&Place::overlay(Controller::Zero, host, 2, 1)));
    }

    #[test]
    fn temp_cards_round_trip() {
        let mut board = Board::new();
        board.fill_pile(Controller::Zero, Location::MainDeck, 1).unwrap();
        let place = Place::pile(Controller::Zero, Location::MainDeck, 0);
        board.remove_to_temp(5, place).unwrap();
        assert!(board.get_card(place).is_err());
        board.restore_from_temp(5, place).unwrap();
        assert!(board.get_card(place).is_ok());
    }
}
