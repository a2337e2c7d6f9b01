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

//! The per-attribute versioned value described in spec §3.2.
//!
//! A [`TemporalCell`] is a dynamic array plus an integer cursor. It
//! encodes "the value of attribute A at logical state s" with O(1) step in
//! either direction and O(1) append on the live tail, replacing any notion
//! of shared mutable state with a linear log per attribute.

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// Types that can serve as a [`TemporalCell`] element need a sentinel
/// "nothing happened yet" value to seed the cell at construction.
pub trait Sentinel {
    fn sentinel() -> Self;
}

impl Sentinel for u32 {
    fn sentinel() -> Self {
        0
    }
}

impl Sentinel for i32 {
    fn sentinel() -> Self {
        -1
    }
}

impl Sentinel for bool {
    fn sentinel() -> Self {
        false
    }
}

/// An ordered sequence of `T` values with a movable read cursor.
///
/// Invariants (spec §3.2): at construction the sequence contains exactly
/// one sentinel value and the cursor points at it; `retreat` is illegal
/// while the cursor is at that sentinel; `advance_or_append(false, _)` is
/// illegal if the cursor is already at the last element.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemporalCell<T> {
    values: Vec<T>,
    cursor: usize,
}

impl<T: Sentinel> Default for TemporalCell<T> {
    fn default() -> Self {
        Self { values: vec![T::sentinel()], cursor: 0 }
    }
}

impl<T: Clone> TemporalCell<T> {
    /// Either appends `v` as the next element and then moves the cursor
    /// forward onto it, or (when `append` is false) moves the cursor
    /// forward onto an already-recorded element.
    pub fn advance_or_append(&mut self, append: bool, v: T) -> Result<(), EngineError> {
        if append {
            self.values.push(v);
            self.cursor += 1;
        } else {
            debug_assert!(
                self.cursor + 1 < self.values.len(),
                "advance_or_append(false, _) past the recorded tail"
            );
            utils::verify!(
                self.cursor + 1 < self.values.len(),
                EngineError::CursorBounds { reason: "advance past tail without append".to_string() }
            );
            self.cursor += 1;
        }
        Ok(())
    }

    /// Moves the cursor back one position.
    pub fn retreat(&mut self) -> Result<(), EngineError> {
        debug_assert!(self.cursor > 0, "retreat past the sentinel");
        utils::verify!(self.cursor > 0, EngineError::CursorBounds { reason: "retreat past sentinel".to_string() });
        self.cursor -= 1;
        Ok(())
    }

    /// Returns the value at the current cursor position.
    pub fn get(&self) -> &T {
        &self.values[self.cursor]
    }

    /// Cursor position, exposed for invariant checks (I3) and tests.
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_sentinel() {
        let cell = TemporalCell::<u32>::default();
        assert_eq!(*cell.get(), 0);
        assert_eq!(cell.cursor(), 0);
    }

    #[test]
    fn signed_sentinel_is_negative_one() {
        let cell = TemporalCell::<i32>::default();
        assert_eq!(*cell.get(), -1);
    }

    #[test]
    fn append_then_retreat_round_trips() {
        let mut cell = TemporalCell::<u32>::default();
        cell.advance_or_append(true, 42).unwrap();
        assert_eq!(*cell.get(), 42);
        cell.retreat().unwrap();
        assert_eq!(*cell.get(), 0);
    }

    #[test]
    fn retreat_past_sentinel_fails() {
        let mut cell = TemporalCell::<u32>::default();
        assert!(cell.retreat().is_err());
    }

    #[test]
    fn advance_without_append_past_tail_fails() {
        let mut cell = TemporalCell::<u32>::default();
        assert!(cell.advance_or_append(false, 0).is_err());
    }

    #[test]
    fn re_walking_history_does_not_append() {
        let mut cell = TemporalCell::<u32>::default();
        cell.advance_or_append(true, 7).unwrap();
        cell.retreat().unwrap();
        cell.advance_or_append(false, 999).unwrap();
        assert_eq!(*cell.get(), 7);
    }
}
