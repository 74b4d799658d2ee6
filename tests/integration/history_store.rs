// =====
// TESTS: 5
// =====
//
// History persistence against real files in a temp directory.

use pretty_assertions::assert_eq;
use tuxline::editor::HistoryStore;

fn lines(store: &HistoryStore) -> Vec<String> {
    store.iter().map(str::to_owned).collect()
}

#[test]
fn save_keeps_only_the_newest_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history");

    let mut store = HistoryStore::load(&path, 3);
    for line in ["1", "2", "3", "4", "5"] {
        store.add(line);
    }
    store.save();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "3\n4\n5\n");
    let reloaded = HistoryStore::load(&path, 3);
    assert_eq!(reloaded.len(), 3);
    assert_eq!(lines(&reloaded), vec!["5", "4", "3"]);
}

#[test]
fn session_lines_come_before_persisted_ones() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history");
    std::fs::write(&path, "old 1\nold 2\n").unwrap();

    let mut store = HistoryStore::load(&path, 100);
    store.add("new");

    assert_eq!(lines(&store), vec!["new", "old 2", "old 1"]);
    assert_eq!(store.get(2).unwrap(), "old 1");
    assert!(store.get(3).is_err());
}

#[test]
fn saving_twice_does_not_duplicate_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("history");

    let mut store = HistoryStore::load(&path, 100);
    store.add("a");
    store.save();
    store.add("b");
    store.save();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "a\nb\n");
}

#[test]
fn unreadable_file_disables_persistence() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history");
    std::fs::write(&path, [0xff, 0xfe, 0x00, 0x80]).unwrap();

    let mut store = HistoryStore::load(&path, 100);
    assert!(store.is_empty());
    assert_eq!(store.path(), None);

    store.add("x");
    store.save();
    assert_eq!(std::fs::read(&path).unwrap(), vec![0xff, 0xfe, 0x00, 0x80]);
}

#[test]
fn in_memory_store_never_writes() {
    let mut store = HistoryStore::in_memory();
    store.add("1");
    store.add("1");
    store.save();

    assert_eq!(store.len(), 1);
    assert_eq!(store.path(), None);
}
