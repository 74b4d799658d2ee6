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

mod adapter;
pub mod completion;
pub mod highlight;
mod history;
mod navigation;
mod submit;
mod worker;

pub use adapter::{Adapter, Exchange};
pub use completion::{CompletionCycle, Direction};
pub use highlight::HighlightSpan;
pub use history::HistoryStore;
pub use worker::{ActionReceiver, ActionSender, action_channel};

use crate::config::EditorConfig;
use crate::engine::Engine;
use navigation::HistoryNavigation;

/// Everything a host can ask the line editor to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Submit,
    HistoryUp,
    HistoryDown,
    CompletionNext,
    CompletionPrev,
    CancelCompletion,
    Rehighlight,
}

/// Toolkit-agnostic controller behind every frontend's input line.
///
/// Not thread-safe: hosts serialize actions through one worker, see
/// [`action_channel`].
#[derive(Debug)]
pub struct LineEditor<E, A> {
    engine: E,
    adapter: A,
    history: HistoryStore,
    completion: CompletionCycle,
    navigation: HistoryNavigation,
    /// Last non-blank submission. Tracked apart from history because history
    /// rejects repeats.
    last_input: String,
}

impl<E: Engine, A: Adapter> LineEditor<E, A> {
    pub fn new(engine: E, adapter: A, history: HistoryStore) -> Self {
        Self {
            engine,
            adapter,
            history,
            completion: CompletionCycle::default(),
            navigation: HistoryNavigation::default(),
            last_input: String::new(),
        }
    }

    pub fn from_config(engine: E, adapter: A, config: &EditorConfig) -> Self {
        Self::new(engine, adapter, config.open_history())
    }

    pub fn perform(&mut self, action: Action) {
        match action {
            Action::Submit => {
                self.completion.cancel();
                self.submit();
            }
            Action::HistoryUp => {
                self.completion.cancel();
                self.navigate(navigation::Step::Older);
            }
            Action::HistoryDown => {
                self.completion.cancel();
                self.navigate(navigation::Step::Newer);
            }
            Action::CompletionNext => self.cycle_completion(Direction::Forward),
            Action::CompletionPrev => self.cycle_completion(Direction::Backward),
            Action::CancelCompletion => self.completion.cancel(),
            Action::Rehighlight => self.rehighlight(),
        }
    }

    fn cycle_completion(&mut self, direction: Direction) {
        let text = self.adapter.text();
        let cursor = self.adapter.cursor();
        let has_selection = self.adapter.has_selection();
        let engine = &mut self.engine;

        match self.completion.step(&text, cursor, has_selection, direction, |before| {
            engine.tab_complete(before)
        }) {
            Ok(Some(edit)) => {
                self.adapter.set_text(&edit.text);
                self.adapter.set_cursor(edit.cursor);
            }
            Ok(None) => {}
            Err(err) => self.report_engine_failure(&err),
        }
    }

    fn rehighlight(&mut self) {
        if !self.adapter.supports_highlighting() {
            return;
        }
        let text = self.adapter.text();
        match self.engine.highlight(&text) {
            Ok(fragments) => {
                let spans = highlight::project(&fragments);
                let len = self.adapter.text().chars().count();
                self.adapter.apply_highlight(&highlight::clamp_spans(&spans, len));
            }
            Err(err) => self.report_engine_failure(&err),
        }
    }

    fn report_engine_failure(&mut self, err: &anyhow::Error) {
        tracing::warn!("engine failure: {err:#}");
        self.adapter.show_error(&format!("TuxCalculator encountered an error: {err:#}"));
    }

    /// Flush session history to disk. Failures are logged only.
    pub fn save_history(&mut self) {
        self.history.save();
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn completion(&self) -> &CompletionCycle {
        &self.completion
    }
}
