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

//! The calculator engine boundary.
//!
//! The line editor never evaluates anything itself. It hands complete lines to
//! [`Engine::parse`], the text before the cursor to [`Engine::tab_complete`],
//! and buffer contents to [`Engine::highlight`]. An `Err` from any of these is
//! an unexpected engine failure, not a calculator error; calculator errors are
//! carried by [`EvalResult::Error`].

pub mod echo;

use std::fmt;

/// Outcome of evaluating one submitted line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalResult {
    Success(String),
    Empty,
    Error { message: String, trace: Vec<String> },
}

impl EvalResult {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error { message: message.into(), trace: Vec::new() }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// Detail payload for the rendered exchange: `None` unless this is an
    /// error, `Some("")` for an error without a trace.
    #[must_use]
    pub fn trace_detail(&self) -> Option<String> {
        match self {
            Self::Error { trace, .. } => Some(trace.join("\n")),
            Self::Success(_) | Self::Empty => None,
        }
    }
}

impl fmt::Display for EvalResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => f.write_str(value),
            Self::Empty => f.write_str("()"),
            Self::Error { message, .. } => write!(f, "Error: {message}"),
        }
    }
}

/// Tab completion information for the text before the cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabCompletion {
    /// Text before the token being completed.
    pub prefix: String,
    /// The token being completed. Every match replaces exactly this text.
    pub completion_string: String,
    /// Replacements for `completion_string`, in presentation order.
    pub matches: Vec<String>,
    /// Whether the completion site is a regular identifier position.
    pub is_identifier: bool,
}

/// Style tag attached to a fragment of highlighted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightKind {
    Plain,
    Number,
    Global,
    Operator,
    Reference,
    Special,
    Error,
    Command,
    Construct,
    Comment,
}

/// One contiguous run of uniformly styled text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub kind: HighlightKind,
    pub text: String,
}

impl Fragment {
    pub fn new(kind: HighlightKind, text: impl Into<String>) -> Self {
        Self { kind, text: text.into() }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(HighlightKind::Plain, text)
    }
}

/// Capability set the line editor consumes from a calculator.
pub trait Engine {
    fn parse(&mut self, line: &str) -> anyhow::Result<EvalResult>;

    fn tab_complete(&mut self, text_before_cursor: &str) -> anyhow::Result<TabCompletion>;

    fn highlight(&mut self, line: &str) -> anyhow::Result<Vec<Fragment>>;

    /// Whether the calculator runs in INI mode.
    fn is_ini(&self) -> bool {
        false
    }
}

impl<E: Engine + ?Sized> Engine for Box<E> {
    fn parse(&mut self, line: &str) -> anyhow::Result<EvalResult> {
        (**self).parse(line)
    }

    fn tab_complete(&mut self, text_before_cursor: &str) -> anyhow::Result<TabCompletion> {
        (**self).tab_complete(text_before_cursor)
    }

    fn highlight(&mut self, line: &str) -> anyhow::Result<Vec<Fragment>> {
        (**self).highlight(line)
    }

    fn is_ini(&self) -> bool {
        (**self).is_ini()
    }
}

/// Engine used by the binary when no calculator is linked in.
pub fn create_default() -> Box<dyn Engine> {
    Box::new(echo::EchoEngine::new())
}
