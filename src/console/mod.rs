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

//! Terminal host for the line editor.

mod input;
mod keys;
mod state;

pub use input::InputState;
pub use keys::{handle_event, handle_key};
pub use state::ConsoleAdapter;

use crate::config::EditorConfig;
use crate::editor::{Action, ActionReceiver, ActionSender, LineEditor, action_channel};
use crate::engine::Engine;
use crate::error::AppError;
use crossterm::event::EventStream;
use futures::{FutureExt as _, StreamExt};
use ratatui::DefaultTerminal;
use std::io::IsTerminal as _;

pub fn banner(ini: bool) -> String {
    let version = env!("CARGO_PKG_VERSION");
    if ini {
        format!("This is TuxCalculator line editor, Version {version} (INI)")
    } else {
        format!("This is TuxCalculator line editor, Version {version}")
    }
}

// ---------------------------------------------------------------------------
// TUI event loop
// ---------------------------------------------------------------------------

pub async fn run<E: Engine>(engine: E, config: &EditorConfig) -> anyhow::Result<()> {
    if !std::io::stdin().is_terminal() || !std::io::stdout().is_terminal() {
        return Err(AppError::TerminalUnavailable.into());
    }

    let console = ConsoleAdapter::new(banner(engine.is_ini()));
    let mut editor = LineEditor::from_config(engine, console, config);
    tracing::info!(history = ?editor.history().path(), "starting console line editor");
    let (actions, mut worker) = action_channel();

    let mut terminal = ratatui::init();
    // Bracketed paste is optional; ignore terminals that reject it
    let _ = crossterm::execute!(std::io::stdout(), crossterm::event::EnableBracketedPaste);

    let result = event_loop(&mut terminal, &mut editor, &actions, &mut worker).await;

    let _ = crossterm::execute!(std::io::stdout(), crossterm::event::DisableBracketedPaste);
    ratatui::restore();

    editor.save_history();
    result
}

async fn event_loop<E: Engine>(
    terminal: &mut DefaultTerminal,
    editor: &mut LineEditor<E, ConsoleAdapter>,
    actions: &ActionSender,
    worker: &mut ActionReceiver,
) -> anyhow::Result<()> {
    let mut events = EventStream::new();

    loop {
        terminal.draw(|f| crate::ui::render(f, editor.adapter()))?;

        // Phase 1: wait for at least one event
        let Some(event) = events.next().await else {
            break;
        };
        handle_and_perform(editor, actions, worker, event?);

        // Phase 2: drain remaining queued events before the next frame
        while let Some(Some(event)) = events.next().now_or_never() {
            handle_and_perform(editor, actions, worker, event?);
        }

        if editor.adapter().should_quit {
            break;
        }
    }

    Ok(())
}

/// Each event's actions run before the next event touches the buffer, so a
/// pasted burst followed by Enter submits exactly what was typed before it.
fn handle_and_perform<E: Engine>(
    editor: &mut LineEditor<E, ConsoleAdapter>,
    actions: &ActionSender,
    worker: &mut ActionReceiver,
    event: crossterm::event::Event,
) {
    handle_event(editor.adapter_mut(), actions, event);
    worker.drain(editor);
    if editor.adapter_mut().take_text_dirty() {
        actions.perform(Action::Rehighlight);
        worker.drain(editor);
    }
}
