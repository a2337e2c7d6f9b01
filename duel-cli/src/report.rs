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

use data::core::primitives::{Controller, Location};
use engine::DuelReplay;

/// Prints a human-readable snapshot of the board at the replay's current
/// cursor position. This is a debugging aid, not a rendering surface —
/// actual presentation is explicitly out of scope (spec §1).
pub fn print_summary(replay: &DuelReplay) {
    println!(
        "state {}/{} (processed {}, realtime={})",
        replay.current_state(),
        replay.total_states(),
        replay.processed_states(),
        replay.is_realtime()
    );
    println!("turn {} (player {:?}), phase {}", replay.turn(), replay.turn_player(), replay.phase());

    for controller in Controller::ALL {
        println!(
            "player {controller:?}: lp={} hand={} deck={} graveyard={} banished={} extra={}",
            replay.player_lp(controller),
            pile_len(replay, controller, Location::Hand),
            pile_len(replay, controller, Location::MainDeck),
            pile_len(replay, controller, Location::Graveyard),
            pile_len(replay, controller, Location::Banished),
            pile_len(replay, controller, Location::ExtraDeck),
        );
    }

    println!("field zones: {}", replay.field_zones().len());
    for (place, card) in replay.field_zones() {
        println!("  {place:?} -> code={} position={}", card.code.get(), card.position.get());
    }

    let disabled = replay.disabled_zones().iter().filter(|(_, cell)| *cell.get()).count();
    println!("disabled zones: {disabled}/{}", replay.disabled_zones().len());
}

fn pile_len(replay: &DuelReplay, controller: Controller, location: Location) -> usize {
    replay.pile(controller, location).map(|p| p.len()).unwrap_or(0)
}
