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

use crate::Cli;
use crate::editor::HistoryStore;
use std::path::PathBuf;

pub const DEFAULT_HISTORY_SIZE: usize = 1000;

const HISTORY_FILE_ENV: &str = "TUXLINE_HISTORY_FILE";
const DATA_DIR_NAME: &str = "tuxline";
const HISTORY_FILE: &str = "history";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    /// `None` keeps history in memory only.
    pub history_path: Option<PathBuf>,
    /// Lines kept on save. Zero disables saving.
    pub history_size: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self { history_path: default_history_path(), history_size: DEFAULT_HISTORY_SIZE }
    }
}

impl EditorConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        let history_path = if cli.no_history {
            None
        } else {
            cli.history_file.clone().or_else(default_history_path)
        };
        Self { history_path, history_size: cli.history_size }
    }

    pub fn open_history(&self) -> HistoryStore {
        match &self.history_path {
            Some(path) => HistoryStore::load(path, self.history_size),
            None => HistoryStore::in_memory(),
        }
    }
}

fn default_history_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(HISTORY_FILE_ENV).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(path));
    }
    dirs::data_dir().map(|dir| dir.join(DATA_DIR_NAME).join(HISTORY_FILE))
}
