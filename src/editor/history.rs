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

//! Submitted-line history: lines persisted by earlier runs plus lines
//! submitted during this run, addressed newest-first.
//!
//! I/O failures never reach the user. A file that cannot be read behaves as
//! if no history file was configured; a failed save loses the session lines
//! but never leaves a half-written file behind.

use crate::error::HistoryError;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

#[derive(Debug, Default)]
pub struct HistoryStore {
    path: Option<PathBuf>,
    max_retained: usize,
    /// Lines loaded from disk, oldest first.
    persisted: Vec<String>,
    /// Lines added during this run, oldest first.
    session: Vec<String>,
}

impl HistoryStore {
    /// A store that is never loaded from or saved to disk.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Load history from `path`. A missing file yields an empty store that
    /// will still be saved; an unreadable one disables persistence.
    pub fn load(path: impl Into<PathBuf>, max_retained: usize) -> Self {
        let path = path.into();
        if !path.is_file() {
            return Self { path: Some(path), max_retained, ..Self::default() };
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => {
                let mut persisted: Vec<String> = Vec::new();
                for line in content.lines() {
                    if persisted.last().is_none_or(|last| last != line) {
                        persisted.push(line.to_owned());
                    }
                }
                tracing::debug!("Loaded {} history lines from {}", persisted.len(), path.display());
                Self { path: Some(path), max_retained, persisted, session: Vec::new() }
            }
            Err(err) => {
                tracing::warn!(
                    "history file {} unreadable, persistence disabled: {err}",
                    path.display()
                );
                Self::in_memory()
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.persisted.len() + self.session.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.persisted.is_empty() && self.session.is_empty()
    }

    /// Entry `index` counted back from the most recent one (index 0).
    pub fn get(&self, index: usize) -> Result<&str, HistoryError> {
        if index < self.session.len() {
            return Ok(&self.session[self.session.len() - index - 1]);
        }
        let older = index - self.session.len();
        if older < self.persisted.len() {
            return Ok(&self.persisted[self.persisted.len() - older - 1]);
        }
        Err(HistoryError::OutOfRange { index, len: self.len() })
    }

    /// Entries newest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.session.iter().rev().chain(self.persisted.iter().rev()).map(String::as_str)
    }

    /// Append `line` unless it repeats the most recent entry.
    pub fn add(&mut self, line: impl Into<String>) {
        let line = line.into();
        if self.iter().next() == Some(line.as_str()) {
            return;
        }
        self.session.push(line);
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Merge session lines into the history file, keeping the newest
    /// `max_retained` lines. Errors are logged and otherwise ignored.
    pub fn save(&mut self) {
        let Some(path) = self.path.as_deref() else {
            return;
        };
        if self.max_retained == 0 {
            return;
        }

        match write_merged(path, &self.session, self.max_retained) {
            Ok(written) => {
                tracing::debug!("Saved {written} history lines to {}", path.display());
                self.persisted.append(&mut self.session);
            }
            Err(err) => {
                tracing::warn!("history save to {} failed: {err:#}", path.display());
            }
        }
    }
}

/// Re-read `path` so lines saved by other processes survive, append
/// `session`, and replace the file with the newest `max_retained` lines.
fn write_merged(path: &Path, session: &[String], max_retained: usize) -> anyhow::Result<usize> {
    let absolute = std::path::absolute(path)?;
    let parent = absolute.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(parent)?;

    let on_disk = if absolute.is_file() {
        std::fs::read_to_string(&absolute)?
    } else {
        String::new()
    };
    let lines: Vec<&str> =
        on_disk.lines().chain(session.iter().map(String::as_str)).collect();
    let skip = lines.len().saturating_sub(max_retained);

    let mut content = String::new();
    for line in &lines[skip..] {
        content.push_str(line.trim_end());
        content.push('\n');
    }

    let mut tmp_file = NamedTempFile::new_in(parent)?;
    tmp_file.write_all(content.as_bytes())?;
    tmp_file.flush()?;
    tmp_file.persist(&absolute)?;
    Ok(lines.len() - skip)
}
