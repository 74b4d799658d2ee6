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

//! A non-evaluating engine: echoes lines back, completes a fixed vocabulary
//! and tokenizes input for highlighting.

use super::{Engine, EvalResult, Fragment, HighlightKind, TabCompletion};

/// Function names complete with their call parentheses.
const FUNCTIONS: &[&str] = &[
    "abs", "acos", "asin", "atan", "ceil", "cos", "exp", "floor", "ln", "log", "max", "min",
    "round", "sin", "sqrt", "tan",
];

const CONSTANTS: &[&str] = &["e", "phi", "pi"];

const OPERATOR_CHARS: &str = "+-*/^%=<>!&|";

#[derive(Debug, Default)]
pub struct EchoEngine {
    vocabulary: Vec<String>,
}

impl EchoEngine {
    pub fn new() -> Self {
        let mut vocabulary: Vec<String> = FUNCTIONS
            .iter()
            .map(|name| format!("{name}()"))
            .chain(CONSTANTS.iter().map(|name| (*name).to_owned()))
            .collect();
        vocabulary.sort();
        Self { vocabulary }
    }

    fn is_known(&self, name: &str) -> bool {
        FUNCTIONS.contains(&name) || CONSTANTS.contains(&name)
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn starts_identifier(prev: Option<char>) -> bool {
    prev.is_none_or(|c| c.is_whitespace() || OPERATOR_CHARS.contains(c) || c == '(' || c == ',')
}

fn strip_comment(line: &str) -> &str {
    line.split_once('#').map_or(line, |(code, _)| code)
}

fn parens_balanced(code: &str) -> bool {
    let mut depth: usize = 0;
    for c in code.chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                let Some(next) = depth.checked_sub(1) else {
                    return false;
                };
                depth = next;
            }
            _ => {}
        }
    }
    depth == 0
}

impl Engine for EchoEngine {
    fn parse(&mut self, line: &str) -> anyhow::Result<EvalResult> {
        let code = strip_comment(line).trim();
        if code.is_empty() {
            return Ok(EvalResult::Empty);
        }
        if !parens_balanced(code) {
            return Ok(EvalResult::Error {
                message: "unbalanced parentheses".to_owned(),
                trace: vec![format!("in: {code}")],
            });
        }
        Ok(EvalResult::Success(code.to_owned()))
    }

    fn tab_complete(&mut self, text_before_cursor: &str) -> anyhow::Result<TabCompletion> {
        let chars: Vec<char> = text_before_cursor.chars().collect();
        let mut start = chars.len();
        while start > 0 && is_ident_char(chars[start - 1]) {
            start -= 1;
        }
        let prefix: String = chars[..start].iter().collect();
        let token: String = chars[start..].iter().collect();

        if token.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            return Ok(TabCompletion {
                prefix,
                completion_string: token,
                ..TabCompletion::default()
            });
        }

        let is_identifier = token.is_empty() && starts_identifier(chars[..start].last().copied());
        if token.is_empty() && !is_identifier {
            return Ok(TabCompletion { prefix, ..TabCompletion::default() });
        }

        let needle = token.to_lowercase();
        let matches = self
            .vocabulary
            .iter()
            .filter(|candidate| candidate.to_lowercase().starts_with(&needle))
            .cloned()
            .collect();
        Ok(TabCompletion { prefix, completion_string: token, matches, is_identifier })
    }

    fn highlight(&mut self, line: &str) -> anyhow::Result<Vec<Fragment>> {
        let chars: Vec<char> = line.chars().collect();
        let mut fragments = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];
            let start = i;
            let kind = if c == '#' {
                i = chars.len();
                HighlightKind::Comment
            } else if c.is_whitespace() {
                while i < chars.len() && chars[i].is_whitespace() {
                    i += 1;
                }
                HighlightKind::Plain
            } else if c.is_ascii_digit() {
                while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                    i += 1;
                }
                HighlightKind::Number
            } else if is_ident_char(c) {
                while i < chars.len() && is_ident_char(chars[i]) {
                    i += 1;
                }
                let name: String = chars[start..i].iter().collect();
                if self.is_known(&name) { HighlightKind::Reference } else { HighlightKind::Global }
            } else if OPERATOR_CHARS.contains(c) {
                while i < chars.len() && OPERATOR_CHARS.contains(chars[i]) {
                    i += 1;
                }
                HighlightKind::Operator
            } else if matches!(c, '(' | ')' | ',') {
                i += 1;
                HighlightKind::Construct
            } else {
                i += 1;
                HighlightKind::Special
            };
            fragments.push(Fragment::new(kind, chars[start..i].iter().collect::<String>()));
        }

        Ok(fragments)
    }
}
