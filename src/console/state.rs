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

use super::input::InputState;
use crate::editor::{Adapter, Exchange, HighlightSpan};

/// Terminal-side state: the prompt buffer, what has been evaluated so far,
/// and the error banner.
#[derive(Debug, Default)]
pub struct ConsoleAdapter {
    pub banner: String,
    pub input: InputState,
    pub input_highlights: Vec<HighlightSpan>,
    pub scrollback: Vec<Exchange>,
    pub error: Option<String>,
    pub should_quit: bool,
    /// Set whenever the buffer text changes; the event loop answers with a
    /// re-highlight.
    text_dirty: bool,
}

impl ConsoleAdapter {
    pub fn new(banner: impl Into<String>) -> Self {
        Self { banner: banner.into(), ..Self::default() }
    }

    pub fn mark_text_dirty(&mut self) {
        self.text_dirty = true;
    }

    pub fn take_text_dirty(&mut self) -> bool {
        std::mem::take(&mut self.text_dirty)
    }
}

impl Adapter for ConsoleAdapter {
    fn text(&self) -> String {
        self.input.text().to_owned()
    }

    fn set_text(&mut self, text: &str) {
        self.input.set_text(text);
        self.text_dirty = true;
    }

    fn cursor(&self) -> usize {
        self.input.cursor
    }

    fn set_cursor(&mut self, cursor: usize) {
        self.input.set_cursor(cursor);
    }

    fn supports_highlighting(&self) -> bool {
        true
    }

    fn apply_highlight(&mut self, spans: &[HighlightSpan]) {
        self.input_highlights = spans.to_vec();
    }

    fn append_entry(&mut self, exchange: Exchange) {
        self.scrollback.push(exchange);
    }

    fn show_error(&mut self, message: &str) {
        self.error = Some(message.to_owned());
    }
}
