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

use std::fs;

use clap::Parser;
use color_eyre::eyre::Result;
use engine::DuelReplay;
use tracing::info;

mod cli;
mod logging;
mod report;
mod wire;

use cli::Cli;
use wire::DuelLog;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    logging::initialize(cli.log_level.as_deref());

    let contents = fs::read_to_string(&cli.log_path)?;
    let log: DuelLog = serde_json::from_str(&contents)?;

    let mut replay = DuelReplay::new();
    for fill in &log.fill_piles {
        replay.fill_pile(fill.controller, fill.location, fill.count)?;
    }
    for lp in &log.starting_lp {
        replay.set_lp(lp.controller, lp.amount)?;
    }

    let message_count = log.messages.len();
    for msg in log.messages {
        replay.append(msg);
    }

    info!(message_count, "Replaying duel log");
    for _ in 0..message_count {
        replay.forward()?;
    }

    report::print_summary(&replay);
    Ok(())
}
