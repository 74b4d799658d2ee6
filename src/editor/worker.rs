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

//! Single-worker action queue. Actions run one at a time, in the order they
//! were sent, against whatever the buffer holds when they run.

use super::{Action, Adapter, LineEditor};
use crate::engine::Engine;
use tokio::sync::mpsc;

pub fn action_channel() -> (ActionSender, ActionReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    (ActionSender { tx }, ActionReceiver { rx })
}

#[derive(Debug, Clone)]
pub struct ActionSender {
    tx: mpsc::UnboundedSender<Action>,
}

impl ActionSender {
    /// Queue `action`. Returns `false` once the worker has gone away.
    pub fn perform(&self, action: Action) -> bool {
        self.tx.send(action).is_ok()
    }
}

#[derive(Debug)]
pub struct ActionReceiver {
    rx: mpsc::UnboundedReceiver<Action>,
}

impl ActionReceiver {
    /// Perform actions until every sender is dropped.
    pub async fn run<E: Engine, A: Adapter>(&mut self, editor: &mut LineEditor<E, A>) {
        while let Some(action) = self.rx.recv().await {
            editor.perform(action);
        }
    }

    /// Perform everything already queued without waiting. Returns how many
    /// actions ran.
    pub fn drain<E: Engine, A: Adapter>(&mut self, editor: &mut LineEditor<E, A>) -> usize {
        let mut performed = 0;
        while let Ok(action) = self.rx.try_recv() {
            editor.perform(action);
            performed += 1;
        }
        performed
    }
}
