// =====
// TESTS: 5
// =====
//
// History-up / history-down: draft snapshot, clamping, reset on submit.

use pretty_assertions::assert_eq;
use tuxline::editor::Action;

use crate::helpers::{RecordingAdapter, ScriptedEngine, TestEditor, test_editor, type_text};

fn editor_with_history(lines: &[&str]) -> TestEditor {
    let mut editor = test_editor(ScriptedEngine::default(), RecordingAdapter::default());
    for line in lines {
        type_text(&mut editor, line);
        editor.perform(Action::Submit);
    }
    editor
}

#[test]
fn up_walks_older_and_down_returns_to_draft() {
    let mut editor = editor_with_history(&["1", "2", "3"]);
    type_text(&mut editor, "dra");

    editor.perform(Action::HistoryUp);
    assert_eq!(editor.adapter().text, "3");
    assert_eq!(editor.adapter().cursor, 1);
    editor.perform(Action::HistoryUp);
    assert_eq!(editor.adapter().text, "2");

    editor.perform(Action::HistoryDown);
    assert_eq!(editor.adapter().text, "3");
    editor.perform(Action::HistoryDown);
    assert_eq!(editor.adapter().text, "dra");
    assert_eq!(editor.adapter().cursor, 3);
}

#[test]
fn up_stops_at_oldest_entry() {
    let mut editor = editor_with_history(&["first", "second"]);

    for _ in 0..5 {
        editor.perform(Action::HistoryUp);
    }
    assert_eq!(editor.adapter().text, "first");
}

#[test]
fn down_from_draft_keeps_draft() {
    let mut editor = editor_with_history(&["a"]);
    type_text(&mut editor, "partial");

    editor.perform(Action::HistoryDown);
    assert_eq!(editor.adapter().text, "partial");
}

#[test]
fn empty_history_keeps_draft() {
    let mut editor = editor_with_history(&[]);
    type_text(&mut editor, "x");

    editor.perform(Action::HistoryUp);
    assert_eq!(editor.adapter().text, "x");
}

#[test]
fn submit_resets_navigation() {
    let mut editor = editor_with_history(&["a", "b"]);
    editor.perform(Action::HistoryUp);
    editor.perform(Action::HistoryUp);
    assert_eq!(editor.adapter().text, "a");
    editor.perform(Action::Submit);

    editor.perform(Action::HistoryUp);
    assert_eq!(editor.adapter().text, "a");
    editor.perform(Action::HistoryUp);
    assert_eq!(editor.adapter().text, "b");
}
