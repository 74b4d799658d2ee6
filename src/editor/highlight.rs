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

use crate::engine::{Fragment, HighlightKind};

/// A styled `[start, end)` range in code points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightSpan {
    pub kind: HighlightKind,
    pub start: usize,
    pub end: usize,
}

/// Turn engine fragments into sparse spans over their concatenated text.
/// Plain fragments only advance the offset.
pub fn project(fragments: &[Fragment]) -> Vec<HighlightSpan> {
    project_at(fragments, 0)
}

/// Like [`project`], with every span shifted by `offset` code points.
pub fn project_at(fragments: &[Fragment], offset: usize) -> Vec<HighlightSpan> {
    let mut spans = Vec::with_capacity(fragments.len());
    let mut pos = offset;
    for fragment in fragments {
        let len = fragment.text.chars().count();
        if fragment.kind != HighlightKind::Plain {
            spans.push(HighlightSpan { kind: fragment.kind, start: pos, end: pos + len });
        }
        pos += len;
    }
    spans
}

/// Clamp spans into a buffer of `len` code points. The buffer may have
/// shrunk since the fragments were computed.
pub fn clamp_spans(spans: &[HighlightSpan], len: usize) -> Vec<HighlightSpan> {
    spans
        .iter()
        .map(|span| HighlightSpan {
            kind: span.kind,
            start: span.start.min(len),
            end: span.end.min(len),
        })
        .collect()
}
