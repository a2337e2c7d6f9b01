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

//! The cursor: owns the board, the message log, and the `state` /
//! `processed_state` bookkeeping described in spec §3.5 and §4.5.

use data::board_state::board::Board;
use data::board_state::place::Place;
use data::card_states::card::Card;
use data::core::primitives::{Controller, Location};
use data::errors::EngineError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::instrument;

use crate::dispatch;
use crate::messages::{AnyMessage, Message};

/// A deterministic, reversible view over a duel's message log.
///
/// `state` is the index of the next message `forward()` would interpret;
/// `processed_state` is the high-water mark of states ever reached by
/// forward stepping. `realtime` (`state == processed_state`) and
/// `advancing` (last direction stepped) are not stored fields — they are
/// derived at the moment each step runs, exactly as spec §3.5 defines
/// them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DuelReplay {
    board: Board,
    msgs: Vec<AnyMessage>,
    state: usize,
    processed_state: usize,
}

impl DuelReplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeding hook: appends `count` fresh face-down cards to the bottom
    /// of a pile before the first forward step.
    pub fn fill_pile(&mut self, controller: Controller, location: Location, count: u32) -> Result<(), EngineError> {
        self.board.fill_pile(controller, location, count)
    }

    /// Seeding hook: appends a player's starting life total.
    pub fn set_lp(&mut self, controller: Controller, amount: u32) -> Result<(), EngineError> {
        self.board.set_lp(controller, amount)
    }

    /// Seeding hook: places a card with the given code directly onto the
    /// field, bypassing the message log. Used by callers that want a card
    /// already in play before the first forward step, the same way
    /// `fill_pile`/`set_lp` seed piles and life totals.
    pub fn seed_field_card(&mut self, place: Place, code: u32) -> Result<(), EngineError> {
        let mut card = Card::default();
        card.code.advance_or_append(true, code)?;
        self.board.insert_card(place, card)
    }

    /// Mutable access to a card already on the board, for seeding
    /// additional attributes (e.g. counters) before the first forward
    /// step.
    pub fn card_mut(&mut self, place: Place) -> Result<&mut Card, EngineError> {
        self.board.get_card_mut(place)
    }

    /// Enqueues a message. Never moves the cursor (spec §4.5, P8).
    pub fn append(&mut self, msg: AnyMessage) {
        self.msgs.push(msg);
    }

    /// No-op if there is nothing left to interpret. Otherwise computes
    /// `realtime`, advances `processed_state` when realtime, dispatches
    /// the message at `state`, then increments `state`.
    ///
    /// `temp_cards` is keyed by the *post-increment* state (spec §3.4's
    /// "forward-state s"), not the message's own index — confirmed by
    /// spec §8 scenario 6, which removes the message at index 0 and
    /// finds it parked at `temp_cards[(1, place)]`.
    #[instrument(err, level = "debug", skip(self))]
    pub fn forward(&mut self) -> Result<(), EngineError> {
        if self.msgs.is_empty() || self.state > self.msgs.len() - 1 {
            return Ok(());
        }
        let realtime = self.state == self.processed_state;
        if realtime {
            self.processed_state += 1;
        }
        let temp_key = self.state + 1;
        if let Message::Critical(critical) = as_message(&self.msgs[self.state]) {
            dispatch::forward(&mut self.board, critical, temp_key, realtime)?;
        }
        self.state += 1;
        Ok(())
    }

    /// No-op if the cursor is already at the start. Otherwise regresses
    /// `state` and dispatches the message now at the new position, using
    /// the pre-decrement `state` as the `temp_cards` key so it matches
    /// the key the corresponding forward step produced.
    #[instrument(err, level = "debug", skip(self))]
    pub fn backward(&mut self) -> Result<(), EngineError> {
        if self.state == 0 {
            return Ok(());
        }
        let temp_key = self.state;
        self.state -= 1;
        if let Message::Critical(critical) = as_message(&self.msgs[self.state]) {
            dispatch::backward(&mut self.board, critical, temp_key)?;
        }
        Ok(())
    }

    pub fn total_states(&self) -> usize {
        self.msgs.len()
    }

    pub fn processed_states(&self) -> usize {
        self.processed_state
    }

    pub fn current_state(&self) -> usize {
        self.state
    }

    pub fn is_realtime(&self) -> bool {
        self.state == self.processed_state
    }

    pub fn pile(&self, controller: Controller, location: Location) -> Result<&Vec<Card>, EngineError> {
        self.board.get_pile(controller, location)
    }

    pub fn field_zones(&self) -> &BTreeMap<Place, Card> {
        &self.board.field_zones
    }

    pub fn disabled_zones(&self) -> &BTreeMap<Place, data::card_states::temporal_cell::TemporalCell<bool>> {
        &self.board.disabled_zones
    }

    pub fn player_lp(&self, controller: Controller) -> u32 {
        *self.board.player_lp.get(controller).get()
    }

    pub fn turn(&self) -> u32 {
        self.board.turn
    }

    pub fn turn_player(&self) -> u32 {
        *self.board.turn_player.get()
    }

    pub fn phase(&self) -> u32 {
        *self.board.phase.get()
    }
}

fn as_message(msg: &AnyMessage) -> &Message {
    let AnyMessage::Information(message) = msg;
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::CriticalMessage;
    use enumset::EnumSet;

    fn place(controller: Controller, location: Location, sequence: u32) -> Place {
        Place::field(controller, EnumSet::only(location), sequence)
    }

    #[test]
    fn draw_then_undraw_round_trips() {
        let mut replay = DuelReplay::new();
        replay.fill_pile(Controller::Zero, Location::MainDeck, 40).unwrap();
        replay.append(AnyMessage::critical(CriticalMessage::Draw {
            player: Controller::Zero,
            cards: vec![1234, 5678],
        }));

        replay.forward().unwrap();
        assert_eq!(replay.pile(Controller::Zero, Location::Hand).unwrap().len(), 2);
        assert_eq!(replay.pile(Controller::Zero, Location::MainDeck).unwrap().len(), 38);
        let codes: Vec<u32> = replay
            .pile(Controller::Zero, Location::Hand)
            .unwrap()
            .iter()
            .map(|c| *c.code.get())
            .collect();
        assert_eq!(codes, vec![1234, 5678]);

        replay.backward().unwrap();
        assert_eq!(replay.pile(Controller::Zero, Location::MainDeck).unwrap().len(), 40);
        assert!(replay.pile(Controller::Zero, Location::Hand).unwrap().is_empty());
    }

    #[test]
    fn summon_to_monster_zone_round_trips() {
        let mut replay = DuelReplay::new();
        replay.fill_pile(Controller::Zero, Location::Hand, 1).unwrap();
        let previous = Place::pile(Controller::Zero, Location::Hand, 0);
        let current = place(Controller::Zero, Location::MonsterZone, 2);
        replay.append(AnyMessage::critical(CriticalMessage::UpdateCard {
            reason: data::core::primitives::UpdateReason::Move,
            previous,
            current,
            code: 111,
            position: data::core::primitives::Position::FaceUpAttack,
        }));

        replay.forward().unwrap();
        assert!(replay.pile(Controller::Zero, Location::Hand).unwrap().is_empty());
        let card = replay.field_zones().get(&current).unwrap();
        assert_eq!(*card.code.get(), 111);

        replay.backward().unwrap();
        assert_eq!(replay.pile(Controller::Zero, Location::Hand).unwrap().len(), 1);
        assert!(!replay.field_zones().contains_key(&current));
    }

    #[test]
    fn lp_clamps_at_zero() {
        let mut replay = DuelReplay::new();
        replay.set_lp(Controller::Zero, 1000).unwrap();
        replay.append(AnyMessage::critical(CriticalMessage::LpChange {
            player: Controller::Zero,
            change: data::core::primitives::LpChangeType::Damage,
            amount: 4000,
        }));

        replay.forward().unwrap();
        assert_eq!(replay.player_lp(Controller::Zero), 0);
        replay.backward().unwrap();
        assert_eq!(replay.player_lp(Controller::Zero), 1000);
    }

    #[test]
    fn disable_zones_marks_only_named_places() {
        let mut replay = DuelReplay::new();
        let a = place(Controller::Zero, Location::MonsterZone, 2);
        let b = place(Controller::One, Location::SpellZone, 0);
        replay.append(AnyMessage::critical(CriticalMessage::DisableZones { places: vec![a, b] }));

        replay.forward().unwrap();
        for (p, cell) in replay.disabled_zones() {
            let expected = *p == a || *p == b;
            assert_eq!(*cell.get(), expected);
        }

        replay.backward().unwrap();
        for cell in replay.disabled_zones().values() {
            assert_eq!(*cell.get(), false);
        }
    }

    #[test]
    fn remove_then_add_restores_identity() {
        let mut replay = DuelReplay::new();
        let p = place(Controller::Zero, Location::MonsterZone, 0);
        replay.board.insert_card(p, Card::default()).unwrap();
        replay.board.get_card_mut(p).unwrap().code.advance_or_append(true, 999).unwrap();
        replay.board.get_card_mut(p).unwrap().counter_cell_mut(7).advance_or_append(true, 3).unwrap();

        replay.append(AnyMessage::critical(CriticalMessage::RemoveCard { place: p }));
        replay.forward().unwrap();
        assert!(replay.field_zones().get(&p).is_none());
        assert!(replay.board.temp_cards.contains_key(&(1, p)));

        replay.append(AnyMessage::critical(CriticalMessage::AddCard {
            place: p,
            code: 999,
            position: data::core::primitives::Position::FaceUpAttack,
        }));
        replay.forward().unwrap();

        replay.backward().unwrap();
        replay.backward().unwrap();
        assert!(replay.field_zones().get(&p).is_none());
    }
}
