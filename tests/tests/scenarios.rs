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

//! End-to-end replay scenarios, one per testable property's worked
//! example (spec §8).

use data::board_state::place::Place;
use data::core::primitives::{Controller, CounterChangeType, Location, LpChangeType, Position, UpdateReason};
use engine::messages::Counter;
use engine::{AnyMessage, CriticalMessage, DuelReplay};
use enumset::EnumSet;

fn field_place(controller: Controller, location: Location, sequence: u32) -> Place {
    Place::field(controller, EnumSet::only(location), sequence)
}

#[test]
fn draw_then_undraw() {
    let mut replay = DuelReplay::new();
    replay.fill_pile(Controller::Zero, Location::MainDeck, 40).unwrap();

    replay.append(AnyMessage::critical(CriticalMessage::Draw {
        player: Controller::Zero,
        cards: vec![1234, 5678],
    }));

    replay.forward().unwrap();
    let hand = replay.pile(Controller::Zero, Location::Hand).unwrap();
    assert_eq!(hand.iter().map(|c| *c.code.get()).collect::<Vec<_>>(), vec![1234, 5678]);
    assert_eq!(replay.pile(Controller::Zero, Location::MainDeck).unwrap().len(), 38);

    replay.backward().unwrap();
    assert_eq!(replay.pile(Controller::Zero, Location::MainDeck).unwrap().len(), 40);
    assert!(replay.pile(Controller::Zero, Location::Hand).unwrap().is_empty());
}

#[test]
fn summon_to_monster_zone() {
    let mut replay = DuelReplay::new();
    replay.fill_pile(Controller::Zero, Location::Hand, 1).unwrap();
    let previous = Place::pile(Controller::Zero, Location::Hand, 0);
    let current = field_place(Controller::Zero, Location::MonsterZone, 2);

    replay.append(AnyMessage::critical(CriticalMessage::UpdateCard {
        reason: UpdateReason::Move,
        previous,
        current,
        code: 111,
        position: Position::FaceUpAttack,
    }));

    replay.forward().unwrap();
    assert!(replay.pile(Controller::Zero, Location::Hand).unwrap().is_empty());
    let card = replay.field_zones().get(&current).expect("card on field");
    assert_eq!(*card.code.get(), 111);
    assert_eq!(*card.position.get(), Position::FaceUpAttack.as_u32());

    replay.backward().unwrap();
    assert!(replay.field_zones().get(&current).is_none());
    assert_eq!(replay.pile(Controller::Zero, Location::Hand).unwrap().len(), 1);
}

#[test]
fn counter_add_and_remove() {
    let mut replay = DuelReplay::new();
    let place = field_place(Controller::Zero, Location::MonsterZone, 3);
    let counter_type = 7;
    replay.seed_field_card(place, 0).unwrap();

    replay.append(AnyMessage::critical(CriticalMessage::CounterChange {
        place,
        counter: Counter { counter_type, count: 2 },
        change: CounterChangeType::Add,
    }));
    replay.append(AnyMessage::critical(CriticalMessage::CounterChange {
        place,
        counter: Counter { counter_type, count: 3 },
        change: CounterChangeType::Add,
    }));
    replay.append(AnyMessage::critical(CriticalMessage::CounterChange {
        place,
        counter: Counter { counter_type, count: 1 },
        change: CounterChangeType::Remove,
    }));

    let expected = [2u32, 5, 4];
    for &value in &expected {
        replay.forward().unwrap();
        assert_eq!(*replay.field_zones()[&place].counters[&counter_type].get(), value);
    }
    for _ in 0..3 {
        replay.backward().unwrap();
    }
    assert_eq!(*replay.field_zones()[&place].counters[&counter_type].get(), 0);
}

#[test]
fn lp_clamps_at_zero() {
    let mut replay = DuelReplay::new();
    replay.set_lp(Controller::Zero, 1000).unwrap();
    replay.append(AnyMessage::critical(CriticalMessage::LpChange {
        player: Controller::Zero,
        change: LpChangeType::Damage,
        amount: 4000,
    }));

    replay.forward().unwrap();
    assert_eq!(replay.player_lp(Controller::Zero), 0);
    replay.backward().unwrap();
    assert_eq!(replay.player_lp(Controller::Zero), 1000);
}

#[test]
fn disable_zones_forward_and_back() {
    let mut replay = DuelReplay::new();
    let a = field_place(Controller::Zero, Location::MonsterZone, 2);
    let b = field_place(Controller::One, Location::SpellZone, 0);

    replay.append(AnyMessage::critical(CriticalMessage::DisableZones { places: vec![a, b] }));

    replay.forward().unwrap();
    for (place, cell) in replay.disabled_zones() {
        assert_eq!(*cell.get(), *place == a || *place == b);
    }

    replay.backward().unwrap();
    assert!(replay.disabled_zones().values().all(|cell| !*cell.get()));
}

#[test]
fn remove_then_add_restores_identity() {
    let mut replay = DuelReplay::new();
    let place = field_place(Controller::Zero, Location::MonsterZone, 0);
    replay.seed_field_card(place, 555).unwrap();
    replay.card_mut(place).unwrap().counter_cell_mut(9).advance_or_append(true, 4).unwrap();

    replay.append(AnyMessage::critical(CriticalMessage::RemoveCard { place }));
    replay.forward().unwrap();
    assert!(replay.field_zones().get(&place).is_none());

    replay.append(AnyMessage::critical(CriticalMessage::AddCard {
        place,
        code: 555,
        position: Position::FaceUpAttack,
    }));
    replay.forward().unwrap();

    replay.backward().unwrap();
    replay.backward().unwrap();

    let card = replay.field_zones().get(&place).expect("original card restored");
    assert_eq!(*card.code.get(), 555);
    assert_eq!(*card.counters[&9].get(), 4);
}
