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

pub mod config;
pub mod console;
pub mod editor;
pub mod engine;
pub mod error;
pub mod ui;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tuxline", version, about = "Interactive line editor for TuxCalculator")]
pub struct Cli {
    /// History file (defaults to <data dir>/tuxline/history)
    #[arg(long, value_name = "PATH")]
    pub history_file: Option<PathBuf>,

    /// Maximum lines kept in the history file (0 disables saving)
    #[arg(long, default_value_t = config::DEFAULT_HISTORY_SIZE)]
    pub history_size: usize,

    /// Neither load nor save history
    #[arg(long)]
    pub no_history: bool,

    /// Write tracing diagnostics to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Tracing filter directives (defaults to RUST_LOG, then `info`)
    #[arg(long, value_name = "FILTER")]
    pub log_filter: Option<String>,

    /// Append to the log file instead of truncating it
    #[arg(long)]
    pub log_append: bool,
}
