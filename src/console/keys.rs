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

use super::state::ConsoleAdapter;
use crate::editor::{Action, ActionSender};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

fn is_ctrl_shortcut(modifiers: KeyModifiers) -> bool {
    modifiers.contains(KeyModifiers::CONTROL) && !modifiers.contains(KeyModifiers::ALT)
}

fn is_ctrl_char_shortcut(key: KeyEvent, expected: char) -> bool {
    is_ctrl_shortcut(key.modifiers)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&expected))
}

pub fn handle_event(console: &mut ConsoleAdapter, actions: &ActionSender, event: Event) {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => {
            handle_key(console, actions, key);
        }
        Event::Paste(text) => {
            actions.perform(Action::CancelCompletion);
            console.input.insert_str(&text);
            console.mark_text_dirty();
        }
        _ => {}
    }
}

/// Apply plain edits to the buffer directly and queue everything the line
/// editor owns.
pub fn handle_key(console: &mut ConsoleAdapter, actions: &ActionSender, key: KeyEvent) {
    if is_ctrl_char_shortcut(key, 'c') {
        console.should_quit = true;
        return;
    }
    if is_ctrl_char_shortcut(key, 'd') {
        if console.input.is_empty() {
            console.should_quit = true;
        } else {
            delete_after(console, actions);
        }
        return;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Enter, m) if !m.contains(KeyModifiers::ALT) => {
            actions.perform(Action::Submit);
        }
        (KeyCode::Up, _) => {
            actions.perform(Action::HistoryUp);
        }
        (KeyCode::Down, _) => {
            actions.perform(Action::HistoryDown);
        }
        (KeyCode::Tab, m) if m.contains(KeyModifiers::SHIFT) => {
            actions.perform(Action::CompletionPrev);
        }
        (KeyCode::Tab, _) => {
            actions.perform(Action::CompletionNext);
        }
        (KeyCode::BackTab, _) => {
            actions.perform(Action::CompletionPrev);
        }
        (KeyCode::Esc, _) => {
            console.error = None;
        }
        (KeyCode::Backspace, _) => {
            actions.perform(Action::CancelCompletion);
            if console.input.delete_char_before() {
                console.mark_text_dirty();
            }
        }
        (KeyCode::Delete, _) => delete_after(console, actions),
        (KeyCode::Left, _) => console.input.move_left(),
        (KeyCode::Right, _) => console.input.move_right(),
        (KeyCode::Home, _) => console.input.move_home(),
        (KeyCode::End, _) => console.input.move_end(),
        (KeyCode::Char(c), m) if !m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            actions.perform(Action::CancelCompletion);
            console.input.insert_char(c);
            console.mark_text_dirty();
        }
        _ => {}
    }
}

/// Forward delete leaves the cursor in place, so the cycle has to be
/// cancelled explicitly.
fn delete_after(console: &mut ConsoleAdapter, actions: &ActionSender) {
    actions.perform(Action::CancelCompletion);
    if console.input.delete_char_after() {
        console.mark_text_dirty();
    }
}
