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

use crate::engine::HighlightKind;
use ratatui::style::{Color, Modifier, Style};

// Accent
pub const TUX_GREEN: Color = Color::LightGreen;

// UI chrome
pub const DIM: Color = Color::DarkGray;
pub const PROMPT_CHAR: &str = "❯";
pub const SEPARATOR_CHAR: &str = "─";

// Results
pub const RESULT_OK: Color = Color::LightCyan;
pub const RESULT_ERROR: Color = Color::LightRed;

// Error banner
pub const BANNER_ERROR_BG: Color = Color::Red;
pub const BANNER_ERROR_FG: Color = Color::White;

// Syntax highlight colors
pub const HL_NUMBER: Color = Color::Rgb(104, 151, 187);
pub const HL_OPERATOR: Color = Color::Rgb(204, 120, 50);
pub const HL_REFERENCE: Color = Color::Rgb(152, 118, 170);
pub const HL_SPECIAL: Color = Color::Rgb(187, 181, 41);
pub const HL_ERROR: Color = Color::Red;
pub const HL_COMMAND: Color = Color::Rgb(106, 135, 89);
pub const HL_CONSTRUCT: Color = Color::Rgb(204, 120, 50);
pub const HL_COMMENT: Color = Color::Rgb(128, 128, 128);

/// Style for a highlight tag. `Plain` is the unstyled default.
pub fn highlight_style(kind: HighlightKind) -> Style {
    let style = Style::default();
    match kind {
        HighlightKind::Plain => style,
        HighlightKind::Number => style.fg(HL_NUMBER),
        HighlightKind::Global => style.add_modifier(Modifier::ITALIC),
        HighlightKind::Operator => style.fg(HL_OPERATOR).add_modifier(Modifier::BOLD),
        HighlightKind::Reference => style.fg(HL_REFERENCE).add_modifier(Modifier::BOLD),
        HighlightKind::Special => style.fg(HL_SPECIAL),
        HighlightKind::Error => style.fg(HL_ERROR),
        HighlightKind::Command => style.fg(HL_COMMAND).add_modifier(Modifier::BOLD),
        HighlightKind::Construct => style.fg(HL_CONSTRUCT),
        HighlightKind::Comment => style.fg(HL_COMMENT),
    }
}
