// tuxline — Interactive line editor for TuxCalculator frontends
// Copyright (C) 2025  Simon Peter Rothgang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Tab-completion cycling.
//!
//! The first step asks the engine for candidates and swaps the token before
//! the cursor for the first (or last) one. Later steps swap the inserted
//! candidate for its neighbour in place. A candidate ending in `)` leaves the
//! cursor inside the parentheses, so the next step first moves back over the
//! `)` before removing it.

use crate::engine::TabCompletion;

/// Candidate offered when completing an empty identifier: an empty call.
const EMPTY_CALL: &str = "()";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    fn first(self, len: usize) -> usize {
        match self {
            Self::Forward => 0,
            Self::Backward => len - 1,
        }
    }

    fn advance(self, index: usize, len: usize) -> usize {
        match self {
            Self::Forward => (index + 1) % len,
            Self::Backward => (index + len - 1) % len,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveCycle {
    /// Engine-reported text before the completed token.
    prefix: String,
    candidates: Vec<String>,
    index: usize,
    /// Code-point offset where the current candidate starts.
    site: usize,
    /// Cursor position this cycle left behind after its last step.
    expected_cursor: usize,
}

impl ActiveCycle {
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> &str {
        &self.candidates[self.index]
    }

    pub fn site(&self) -> usize {
        self.site
    }

    pub fn expected_cursor(&self) -> usize {
        self.expected_cursor
    }
}

/// New buffer contents produced by a cycle step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferEdit {
    pub text: String,
    pub cursor: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CompletionCycle {
    #[default]
    Idle,
    Active(ActiveCycle),
}

impl CompletionCycle {
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active(_))
    }

    pub fn active(&self) -> Option<&ActiveCycle> {
        match self {
            Self::Active(cycle) => Some(cycle),
            Self::Idle => None,
        }
    }

    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }

    /// Whether the buffer changed under an active cycle: the cursor left the
    /// position of the last step, or text is selected.
    #[must_use]
    pub fn is_stale(&self, cursor: usize, has_selection: bool) -> bool {
        match self {
            Self::Active(cycle) => has_selection || cycle.expected_cursor != cursor,
            Self::Idle => has_selection,
        }
    }

    /// Advance the cycle one candidate in `direction`.
    ///
    /// A stale cycle is dropped first, so a step after a cursor move starts
    /// over. Returns the edit to apply to the buffer, or `None` when text is
    /// selected or there are no candidates. `complete` is only called when
    /// starting a new cycle.
    pub fn step<F>(
        &mut self,
        text: &str,
        cursor: usize,
        has_selection: bool,
        direction: Direction,
        complete: F,
    ) -> anyhow::Result<Option<BufferEdit>>
    where
        F: FnOnce(&str) -> anyhow::Result<TabCompletion>,
    {
        if self.is_stale(cursor, has_selection) {
            self.cancel();
            if has_selection {
                return Ok(None);
            }
        }

        let chars: Vec<char> = text.chars().collect();
        let mut cursor = cursor.min(chars.len());

        let (replaced_len, mut cycle) = match std::mem::take(self) {
            Self::Idle => {
                let before: String = chars[..cursor].iter().collect();
                let completion = complete(&before)?;
                let mut candidates = completion.matches;
                if completion.completion_string.is_empty() && completion.is_identifier {
                    candidates.insert(0, EMPTY_CALL.to_owned());
                }
                if candidates.is_empty() {
                    return Ok(None);
                }
                let index = direction.first(candidates.len());
                let cycle = ActiveCycle {
                    prefix: completion.prefix,
                    candidates,
                    index,
                    site: 0,
                    expected_cursor: 0,
                };
                (completion.completion_string.chars().count(), cycle)
            }
            Self::Active(mut cycle) => {
                let former = cycle.current();
                let former_len = former.chars().count();
                if former.ends_with(')') {
                    cursor = (cursor + 1).min(chars.len());
                }
                cycle.index = direction.advance(cycle.index, cycle.candidates.len());
                (former_len, cycle)
            }
        };

        let site = cursor.saturating_sub(replaced_len);
        let candidate = cycle.current();
        let candidate_len = candidate.chars().count();

        let mut new_text: String = chars[..site].iter().collect();
        new_text.push_str(candidate);
        new_text.extend(&chars[cursor..]);

        let new_cursor = if candidate.ends_with(')') {
            site + candidate_len - 1
        } else {
            site + candidate_len
        };

        cycle.site = site;
        cycle.expected_cursor = new_cursor;
        *self = Self::Active(cycle);
        Ok(Some(BufferEdit { text: new_text, cursor: new_cursor }))
    }
}
