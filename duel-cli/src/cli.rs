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

use std::path::PathBuf;

use clap::Parser;

/// Replays a duel message log against the engine, stepping forward
/// through every message, and prints the resulting board.
#[derive(Debug, Parser)]
#[command(name = "duel-cli", version)]
pub struct Cli {
    /// Path to a JSON duel log (see `wire::DuelLog`).
    pub log_path: PathBuf,

    /// Overrides the `RUST_LOG` filter string.
    #[arg(long)]
    pub log_level: Option<String>,
}
