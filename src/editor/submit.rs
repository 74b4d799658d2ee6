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

use super::highlight::{self, HighlightSpan};
use super::{Adapter, Exchange, LineEditor};
use crate::engine::Engine;

impl<E: Engine, A: Adapter> LineEditor<E, A> {
    pub(super) fn submit(&mut self) {
        let text = self.adapter.text();
        self.adapter.set_text("");
        self.adapter.set_cursor(0);

        // A blank submission repeats the previous line. Whitespace-only
        // input counts as blank.
        let line = if text.trim().is_empty() {
            self.last_input.clone()
        } else {
            self.last_input.clone_from(&text);
            text
        };
        if line.trim().is_empty() {
            return;
        }

        self.history.add(line.as_str());
        self.navigation.reset();

        let input_highlights = self.submitted_highlights(&line);
        let result = match self.engine.parse(&line) {
            Ok(result) => result,
            Err(err) => {
                self.report_engine_failure(&err);
                self.adapter.focus_input();
                return;
            }
        };
        tracing::debug!(is_error = result.is_error(), "evaluated submitted line");

        self.adapter.append_entry(Exchange {
            input: line,
            input_highlights,
            output: result.to_string(),
            is_error: result.is_error(),
            trace: result.trace_detail(),
        });
        self.adapter.focus_input();
    }

    /// Spans for the echoed input line. Falls back to unstyled text when the
    /// host cannot render highlights or the engine fails to produce them.
    fn submitted_highlights(&mut self, line: &str) -> Vec<HighlightSpan> {
        if !self.adapter.supports_highlighting() {
            return Vec::new();
        }
        match self.engine.highlight(line) {
            Ok(fragments) => highlight::project(&fragments),
            Err(err) => {
                tracing::debug!("highlighting submitted line failed: {err:#}");
                Vec::new()
            }
        }
    }
}
