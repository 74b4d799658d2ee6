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

use super::{styled, theme};
use crate::console::ConsoleAdapter;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthChar;

/// Prompt prefix width: "❯ " = 2 columns
const PROMPT_WIDTH: u16 = 2;

pub fn render(frame: &mut Frame, area: Rect, console: &ConsoleAdapter) {
    let text = console.input.text();
    let content_width = usize::from(area.width.saturating_sub(PROMPT_WIDTH));

    // Scroll horizontally so the cursor stays visible on long lines
    let cursor_col = display_width(text.chars().take(console.input.cursor));
    let scroll = cursor_col.saturating_sub(content_width.saturating_sub(1));
    let skip_chars = chars_within_width(text, scroll);

    let mut spans = vec![Span::styled(
        format!("{} ", theme::PROMPT_CHAR),
        Style::default().fg(theme::TUX_GREEN),
    )];
    let highlighted = styled::highlighted_spans(text, &console.input_highlights);
    spans.extend(skip_leading_chars(highlighted, skip_chars));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);

    let visible_col = cursor_col.saturating_sub(display_width(text.chars().take(skip_chars)));
    let visible_col = u16::try_from(visible_col).unwrap_or(u16::MAX);
    let cursor_x = (area.x + PROMPT_WIDTH).saturating_add(visible_col);
    if cursor_x < area.right() {
        frame.set_cursor_position((cursor_x, area.y));
    }
}

fn display_width(chars: impl Iterator<Item = char>) -> usize {
    chars.map(|c| c.width().unwrap_or(0)).sum()
}

/// Number of leading chars whose combined width reaches at least `width`.
fn chars_within_width(text: &str, width: usize) -> usize {
    let mut acc = 0;
    let mut count = 0;
    for c in text.chars() {
        if acc >= width {
            break;
        }
        acc += c.width().unwrap_or(0);
        count += 1;
    }
    count
}

fn skip_leading_chars(spans: Vec<Span<'static>>, mut skip: usize) -> Vec<Span<'static>> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        let len = span.content.chars().count();
        if skip >= len {
            skip -= len;
            continue;
        }
        if skip > 0 {
            let rest: String = span.content.chars().skip(skip).collect();
            out.push(Span::styled(rest, span.style));
            skip = 0;
        } else {
            out.push(span);
        }
    }
    out
}
