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

use super::theme;
use crate::editor::HighlightSpan;
use crate::editor::highlight::clamp_spans;
use ratatui::text::Span;

/// Split `text` into ratatui spans styled by `highlights`. Stale or
/// overlapping ranges are clamped rather than rejected.
pub fn highlighted_spans(text: &str, highlights: &[HighlightSpan]) -> Vec<Span<'static>> {
    let chars: Vec<char> = text.chars().collect();
    let mut out = Vec::new();
    let mut pos = 0;

    for span in clamp_spans(highlights, chars.len()) {
        let start = span.start.max(pos);
        let end = span.end.max(start);
        if start > pos {
            out.push(Span::raw(chars[pos..start].iter().collect::<String>()));
        }
        if end > start {
            out.push(Span::styled(
                chars[start..end].iter().collect::<String>(),
                theme::highlight_style(span.kind),
            ));
        }
        pos = end;
    }
    if pos < chars.len() {
        out.push(Span::raw(chars[pos..].iter().collect::<String>()));
    }
    out
}
