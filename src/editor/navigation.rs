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

use super::{Adapter, LineEditor};
use crate::engine::Engine;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Step {
    Older,
    Newer,
}

/// Position while browsing history. `None` is the draft: whatever was in the
/// buffer when browsing started.
#[derive(Debug, Default)]
pub(super) struct HistoryNavigation {
    index: Option<usize>,
    draft: String,
}

impl HistoryNavigation {
    pub(super) fn reset(&mut self) {
        self.index = None;
    }

    /// Move one entry and clamp into `[draft, len - 1]`.
    fn step(&mut self, step: Step, len: usize) -> Option<usize> {
        let next = match (step, self.index) {
            (Step::Older, None) => Some(0),
            (Step::Older, Some(i)) => Some(i + 1),
            (Step::Newer, None | Some(0)) => None,
            (Step::Newer, Some(i)) => Some(i - 1),
        };
        self.index = next.and_then(|i| if i < len { Some(i) } else { len.checked_sub(1) });
        self.index
    }
}

impl<E: Engine, A: Adapter> LineEditor<E, A> {
    pub(super) fn navigate(&mut self, step: Step) {
        if self.navigation.index.is_none() {
            self.navigation.draft = self.adapter.text();
        }

        let text = match self.navigation.step(step, self.history.len()) {
            None => self.navigation.draft.clone(),
            Some(index) => match self.history.get(index) {
                Ok(line) => line.to_owned(),
                Err(err) => {
                    tracing::error!("history navigation out of sync: {err}");
                    self.adapter.show_error(&err.to_string());
                    return;
                }
            },
        };

        self.adapter.set_text(&text);
        self.adapter.set_cursor(text.chars().count());
    }
}
