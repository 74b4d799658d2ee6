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

/// Single-line edit buffer with a code-point cursor.
#[derive(Debug, Default)]
pub struct InputState {
    pub line: String,
    pub cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.line
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.line.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.line.chars().count()
    }

    pub fn set_text(&mut self, text: &str) {
        self.line = text.replace(['\n', '\r'], " ");
        self.cursor = self.cursor.min(self.len());
    }

    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor.min(self.len());
    }

    pub fn clear(&mut self) {
        self.line.clear();
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        let byte_idx = char_to_byte_index(&self.line, self.cursor);
        self.line.insert(byte_idx, c);
        self.cursor += 1;
    }

    /// Insert pasted text. Line breaks become spaces: the calculator takes
    /// one line at a time.
    pub fn insert_str(&mut self, s: &str) {
        for c in s.chars() {
            if c == '\n' || c == '\r' {
                self.insert_char(' ');
            } else {
                self.insert_char(c);
            }
        }
    }

    pub fn delete_char_before(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let byte_idx = char_to_byte_index(&self.line, self.cursor);
        self.line.remove(byte_idx);
        true
    }

    pub fn delete_char_after(&mut self) -> bool {
        if self.cursor >= self.len() {
            return false;
        }
        let byte_idx = char_to_byte_index(&self.line, self.cursor);
        self.line.remove(byte_idx);
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.len() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.len();
    }
}

/// Convert a character index to a byte index within a string.
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices().nth(char_idx).map_or(s.len(), |(i, _)| i)
}
