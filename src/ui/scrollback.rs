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
use crate::editor::Exchange;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Indent for result lines, aligned with input text after the prompt.
const RESULT_INDENT: &str = "  ";

pub fn render(frame: &mut Frame, area: Rect, console: &ConsoleAdapter) {
    let lines = build_lines(console);
    // Bottom-anchored: show the newest lines that fit
    let skip = lines.len().saturating_sub(usize::from(area.height));
    let visible: Vec<Line<'static>> = lines.into_iter().skip(skip).collect();
    frame.render_widget(Paragraph::new(visible), area);
}

pub fn build_lines(console: &ConsoleAdapter) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(1 + console.scrollback.len() * 2);
    lines.push(Line::from(Span::styled(
        console.banner.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for exchange in &console.scrollback {
        exchange_lines(exchange, &mut lines);
    }
    lines
}

fn exchange_lines(exchange: &Exchange, out: &mut Vec<Line<'static>>) {
    let mut input = vec![Span::styled(
        format!("{} ", theme::PROMPT_CHAR),
        Style::default().fg(theme::DIM),
    )];
    input.extend(styled::highlighted_spans(&exchange.input, &exchange.input_highlights));
    out.push(Line::from(input));

    let color = if exchange.is_error { theme::RESULT_ERROR } else { theme::RESULT_OK };
    out.push(Line::from(Span::styled(
        format!("{RESULT_INDENT}{}", exchange.output),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )));

    if let Some(first) = exchange.trace.as_deref().and_then(|t| t.lines().next()) {
        out.push(Line::from(Span::styled(
            format!("{RESULT_INDENT}{RESULT_INDENT}{first}"),
            Style::default().fg(theme::DIM),
        )));
    }
}
