// =====
// TESTS: 3
// =====
//
// Single-worker action queue: ordering, drain, and shutdown.

use pretty_assertions::assert_eq;
use tuxline::editor::{Action, action_channel};

use crate::helpers::{RecordingAdapter, ScriptedEngine, test_editor, type_text};

#[tokio::test]
async fn run_performs_actions_in_order_until_senders_drop() {
    let engine = ScriptedEngine::completing("c", &["cos", "cosh"]);
    let mut editor = test_editor(engine, RecordingAdapter::default());
    type_text(&mut editor, "c");
    let (tx, mut rx) = action_channel();

    assert!(tx.perform(Action::CompletionNext));
    assert!(tx.perform(Action::CompletionNext));
    assert!(tx.perform(Action::Submit));
    drop(tx);

    rx.run(&mut editor).await;

    assert_eq!(editor.engine().parsed, vec!["cosh"]);
    assert_eq!(editor.adapter().text, "");
}

#[tokio::test]
async fn cloned_senders_share_the_queue() {
    let mut editor = test_editor(ScriptedEngine::default(), RecordingAdapter::default());
    type_text(&mut editor, "1");
    let (tx, mut rx) = action_channel();
    let other = tx.clone();

    let handle = tokio::spawn(async move {
        other.perform(Action::Submit);
    });
    handle.await.unwrap();
    tx.perform(Action::HistoryUp);
    drop(tx);

    rx.run(&mut editor).await;

    assert_eq!(editor.adapter().entries.len(), 1);
    assert_eq!(editor.adapter().text, "1");
}

#[test]
fn drain_runs_only_queued_actions() {
    let mut editor = test_editor(ScriptedEngine::default(), RecordingAdapter::default());
    let (tx, mut rx) = action_channel();
    assert_eq!(rx.drain(&mut editor), 0);

    type_text(&mut editor, "5");
    tx.perform(Action::Submit);
    tx.perform(Action::HistoryUp);

    assert_eq!(rx.drain(&mut editor), 2);
    assert_eq!(editor.adapter().text, "5");
    assert_eq!(rx.drain(&mut editor), 0);

    drop(rx);
    assert!(!tx.perform(Action::Submit));
}
