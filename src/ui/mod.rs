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

mod input;
mod scrollback;
pub mod styled;
pub mod theme;

pub use scrollback::build_lines;

use crate::console::ConsoleAdapter;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, console: &ConsoleAdapter) {
    let error_height = u16::from(console.error.is_some());
    let [body, error, input_sep, input] = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(error_height),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    scrollback::render(frame, body, console);
    if let Some(message) = console.error.as_deref() {
        render_error(frame, error, message);
    }
    render_separator(frame, input_sep);
    input::render(frame, input, console);
}

fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    // Only the first line fits; the rest went to the log
    let first = message.lines().next().unwrap_or_default();
    let line = Line::from(Span::styled(
        format!(" {first}  (Esc to dismiss)"),
        Style::default().fg(theme::BANNER_ERROR_FG).bg(theme::BANNER_ERROR_BG),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

fn render_separator(frame: &mut Frame, area: Rect) {
    if area.height == 0 {
        return;
    }
    let sep_str = theme::SEPARATOR_CHAR.repeat(area.width as usize);
    let line = Line::from(Span::styled(sep_str, Style::default().fg(theme::DIM)));
    frame.render_widget(Paragraph::new(line), area);
}
