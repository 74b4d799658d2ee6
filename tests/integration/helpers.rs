use std::collections::VecDeque;
use tuxline::editor::{Adapter, Exchange, HighlightSpan, HistoryStore, LineEditor};
use tuxline::engine::{Engine, EvalResult, Fragment, HighlightKind, TabCompletion};

/// Engine double: records calls and replays canned answers.
#[derive(Debug, Default)]
pub struct ScriptedEngine {
    pub parsed: Vec<String>,
    pub completion_requests: Vec<String>,
    /// Returned by every `tab_complete` call.
    pub completion: TabCompletion,
    /// Returned by `parse` in order; `Success(line)` once exhausted.
    pub results: VecDeque<EvalResult>,
    pub fail_parse: bool,
    pub fail_complete: bool,
    pub fail_highlight: bool,
}

impl ScriptedEngine {
    pub fn completing(token: &str, matches: &[&str]) -> Self {
        Self {
            completion: TabCompletion {
                prefix: String::new(),
                completion_string: token.to_owned(),
                matches: matches.iter().map(|m| (*m).to_owned()).collect(),
                is_identifier: false,
            },
            ..Self::default()
        }
    }
}

impl Engine for ScriptedEngine {
    fn parse(&mut self, line: &str) -> anyhow::Result<EvalResult> {
        self.parsed.push(line.to_owned());
        if self.fail_parse {
            anyhow::bail!("engine exploded");
        }
        Ok(self.results.pop_front().unwrap_or_else(|| EvalResult::Success(line.to_owned())))
    }

    fn tab_complete(&mut self, text_before_cursor: &str) -> anyhow::Result<TabCompletion> {
        self.completion_requests.push(text_before_cursor.to_owned());
        if self.fail_complete {
            anyhow::bail!("completion table missing");
        }
        Ok(self.completion.clone())
    }

    /// Digit runs are numbers, everything else plain.
    fn highlight(&mut self, line: &str) -> anyhow::Result<Vec<Fragment>> {
        if self.fail_highlight {
            anyhow::bail!("highlighter crashed");
        }
        let mut fragments: Vec<Fragment> = Vec::new();
        for c in line.chars() {
            let kind =
                if c.is_ascii_digit() { HighlightKind::Number } else { HighlightKind::Plain };
            match fragments.last_mut() {
                Some(last) if last.kind == kind => last.text.push(c),
                _ => fragments.push(Fragment::new(kind, c.to_string())),
            }
        }
        Ok(fragments)
    }
}

/// Adapter double: an in-memory buffer that records every callback.
#[derive(Debug, Default)]
pub struct RecordingAdapter {
    pub text: String,
    pub cursor: usize,
    pub selection: bool,
    pub highlighting: bool,
    pub highlights: Vec<HighlightSpan>,
    pub entries: Vec<Exchange>,
    pub errors: Vec<String>,
    pub focus_requests: usize,
}

impl RecordingAdapter {
    pub fn highlighting() -> Self {
        Self { highlighting: true, ..Self::default() }
    }
}

impl Adapter for RecordingAdapter {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) {
        text.clone_into(&mut self.text);
    }

    fn cursor(&self) -> usize {
        self.cursor
    }

    fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor;
    }

    fn has_selection(&self) -> bool {
        self.selection
    }

    fn supports_highlighting(&self) -> bool {
        self.highlighting
    }

    fn apply_highlight(&mut self, spans: &[HighlightSpan]) {
        self.highlights = spans.to_vec();
    }

    fn append_entry(&mut self, exchange: Exchange) {
        self.entries.push(exchange);
    }

    fn focus_input(&mut self) {
        self.focus_requests += 1;
    }

    fn show_error(&mut self, message: &str) {
        self.errors.push(message.to_owned());
    }
}

pub type TestEditor = LineEditor<ScriptedEngine, RecordingAdapter>;

pub fn test_editor(engine: ScriptedEngine, adapter: RecordingAdapter) -> TestEditor {
    LineEditor::new(engine, adapter, HistoryStore::in_memory())
}

/// Replace the buffer like a user typing, cursor at the end.
pub fn type_text(editor: &mut TestEditor, text: &str) {
    let adapter = editor.adapter_mut();
    adapter.text = text.to_owned();
    adapter.cursor = text.chars().count();
}
