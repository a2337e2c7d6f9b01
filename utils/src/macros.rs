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

/// Returns early with the given error value unless `condition` holds.
///
/// Handler boundaries use this to validate preconditions before any board
/// mutation happens, so a failed `verify!` never leaves partial state
/// behind.
#[macro_export]
macro_rules! verify {
    ($condition:expr, $err:expr) => {
        if !($condition) {
            return Err($err);
        }
    };
}

/// Returns early with the given error value unconditionally.
#[macro_export]
macro_rules! fail {
    ($err:expr) => {
        return Err($err)
    };
}
