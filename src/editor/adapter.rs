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

use super::highlight::HighlightSpan;

/// One submitted line and its result, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exchange {
    pub input: String,
    pub input_highlights: Vec<HighlightSpan>,
    pub output: String,
    pub is_error: bool,
    /// `None` for non-errors, `Some("")` for an error without a trace.
    pub trace: Option<String>,
}

/// The text widget a host exposes to the line editor.
///
/// Cursor positions are code-point offsets. Hosts whose UI runs on another
/// thread marshal these calls themselves.
pub trait Adapter {
    fn text(&self) -> String;

    fn set_text(&mut self, text: &str);

    fn cursor(&self) -> usize;

    fn set_cursor(&mut self, cursor: usize);

    fn has_selection(&self) -> bool {
        false
    }

    fn supports_highlighting(&self) -> bool {
        false
    }

    fn apply_highlight(&mut self, _spans: &[HighlightSpan]) {}

    fn append_entry(&mut self, exchange: Exchange);

    fn focus_input(&mut self) {}

    /// Report an engine or controller failure, as opposed to a calculator
    /// error result.
    fn show_error(&mut self, message: &str);
}
