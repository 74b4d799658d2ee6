// =====
// TESTS: 9
// =====
//
// Submit action: buffer handling, blank resubmission, history, rendering
// payload, and engine failure routing.

use pretty_assertions::assert_eq;
use tuxline::editor::{Action, HighlightSpan};
use tuxline::engine::{EvalResult, HighlightKind};

use crate::helpers::{RecordingAdapter, ScriptedEngine, test_editor, type_text};

#[test]
fn submit_renders_exchange_and_clears_buffer() {
    let mut editor = test_editor(ScriptedEngine::default(), RecordingAdapter::default());
    type_text(&mut editor, "1 + 1");

    editor.perform(Action::Submit);

    let adapter = editor.adapter();
    assert_eq!(adapter.text, "");
    assert_eq!(adapter.cursor, 0);
    assert_eq!(adapter.entries.len(), 1);
    assert_eq!(adapter.entries[0].input, "1 + 1");
    assert_eq!(adapter.entries[0].output, "1 + 1");
    assert!(!adapter.entries[0].is_error);
    assert_eq!(adapter.entries[0].trace, None);
    assert_eq!(adapter.focus_requests, 1);
    assert_eq!(editor.history().get(0).unwrap(), "1 + 1");
}

#[test]
fn blank_submit_resubmits_last_line() {
    let mut editor = test_editor(ScriptedEngine::default(), RecordingAdapter::default());
    type_text(&mut editor, "2+2");
    editor.perform(Action::Submit);

    type_text(&mut editor, "   ");
    editor.perform(Action::Submit);

    assert_eq!(editor.engine().parsed, vec!["2+2", "2+2"]);
    assert_eq!(editor.adapter().entries.len(), 2);
    assert_eq!(editor.history().len(), 1);
}

#[test]
fn blank_submit_without_previous_line_does_nothing() {
    let mut editor = test_editor(ScriptedEngine::default(), RecordingAdapter::default());
    type_text(&mut editor, "");
    editor.perform(Action::Submit);
    type_text(&mut editor, " ");
    editor.perform(Action::Submit);

    assert!(editor.engine().parsed.is_empty());
    assert!(editor.history().is_empty());
    assert!(editor.adapter().entries.is_empty());
    assert_eq!(editor.adapter().focus_requests, 0);
}

#[test]
fn error_results_carry_trace_detail() {
    let mut engine = ScriptedEngine::default();
    engine.results.push_back(EvalResult::error("undefined: x"));
    engine.results.push_back(EvalResult::Error {
        message: "division by zero".to_owned(),
        trace: vec!["at /".to_owned(), "at eval".to_owned()],
    });
    let mut editor = test_editor(engine, RecordingAdapter::default());

    type_text(&mut editor, "x");
    editor.perform(Action::Submit);
    type_text(&mut editor, "1/0");
    editor.perform(Action::Submit);

    let entries = &editor.adapter().entries;
    assert!(entries[0].is_error);
    assert_eq!(entries[0].output, "Error: undefined: x");
    assert_eq!(entries[0].trace.as_deref(), Some(""));
    assert_eq!(entries[1].trace.as_deref(), Some("at /\nat eval"));
}

#[test]
fn empty_result_renders_as_unit() {
    let mut engine = ScriptedEngine::default();
    engine.results.push_back(EvalResult::Empty);
    let mut editor = test_editor(engine, RecordingAdapter::default());

    type_text(&mut editor, "let x = 1");
    editor.perform(Action::Submit);

    assert_eq!(editor.adapter().entries[0].output, "()");
    assert!(!editor.adapter().entries[0].is_error);
}

#[test]
fn engine_failure_is_reported_and_input_refocused() {
    let engine = ScriptedEngine { fail_parse: true, ..ScriptedEngine::default() };
    let mut editor = test_editor(engine, RecordingAdapter::default());
    type_text(&mut editor, "boom");

    editor.perform(Action::Submit);

    let adapter = editor.adapter();
    assert_eq!(adapter.text, "");
    assert!(adapter.entries.is_empty());
    assert_eq!(adapter.errors.len(), 1);
    assert!(adapter.errors[0].contains("engine exploded"));
    assert_eq!(adapter.focus_requests, 1);
    // The line still made it into history
    assert_eq!(editor.history().get(0).unwrap(), "boom");
}

#[test]
fn submitted_input_is_highlighted_when_supported() {
    let mut editor = test_editor(ScriptedEngine::default(), RecordingAdapter::highlighting());
    type_text(&mut editor, "12 + 3");

    editor.perform(Action::Submit);

    assert_eq!(
        editor.adapter().entries[0].input_highlights,
        vec![
            HighlightSpan { kind: HighlightKind::Number, start: 0, end: 2 },
            HighlightSpan { kind: HighlightKind::Number, start: 5, end: 6 },
        ]
    );
}

#[test]
fn submitted_input_is_plain_without_highlight_support() {
    let mut editor = test_editor(ScriptedEngine::default(), RecordingAdapter::default());
    type_text(&mut editor, "12 + 3");

    editor.perform(Action::Submit);

    assert!(editor.adapter().entries[0].input_highlights.is_empty());
}

#[test]
fn highlight_failure_on_submit_falls_back_to_plain() {
    let engine = ScriptedEngine { fail_highlight: true, ..ScriptedEngine::default() };
    let mut editor = test_editor(engine, RecordingAdapter::highlighting());
    type_text(&mut editor, "7");

    editor.perform(Action::Submit);

    let adapter = editor.adapter();
    assert_eq!(adapter.entries.len(), 1);
    assert!(adapter.entries[0].input_highlights.is_empty());
    assert!(adapter.errors.is_empty());
}
