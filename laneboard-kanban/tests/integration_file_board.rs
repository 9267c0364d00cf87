//! Integration tests for a board persisted through the file store

use laneboard_kanban::{
    BlobStore, BoardState, Card, CardStorage, FileBlobStore, DEFAULT_STORAGE_KEY,
};
use tempfile::TempDir;

fn open(root: &std::path::Path) -> BoardState<FileBlobStore> {
    BoardState::load(CardStorage::new(FileBlobStore::new(root)))
}

fn texts(board: &BoardState<FileBlobStore>, column: &str) -> Vec<String> {
    board
        .column_cards(&column.into())
        .iter()
        .map(|c| c.text.clone())
        .collect()
}

#[test]
fn test_board_survives_reopen() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join(".laneboard");

    let mut board = open(&root);
    assert!(board.is_empty());

    let a = board.add_card("a", "todo").unwrap();
    let b = board.add_card("b", "todo").unwrap();
    let c = board.add_card("c", "done").unwrap();
    board.move_card(&b.id, "todo", 0).unwrap();
    board.move_card(&c.id, "todo", 1).unwrap();
    board.delete_card(&a.id).unwrap();
    drop(board);

    let reopened = open(&root);
    assert_eq!(texts(&reopened, "todo"), ["b", "c"]);
    assert!(texts(&reopened, "done").is_empty());
    assert_eq!(reopened.len(), 2);
}

#[test]
fn test_corrupt_file_starts_empty_and_is_replaced() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join(".laneboard");
    let mut store = FileBlobStore::new(&root);
    store.set(DEFAULT_STORAGE_KEY, "{ not json").unwrap();

    let mut board = open(&root);
    assert!(board.is_empty());

    board.add_card("fresh", "todo").unwrap();

    let raw = store.get(DEFAULT_STORAGE_KEY).unwrap().unwrap();
    let saved: Vec<Card> = serde_json::from_str(&raw).unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].text, "fresh");
}

#[test]
fn test_blob_is_plain_json_array() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join(".laneboard");

    let mut board = open(&root);
    let card = board.add_card("hello", "todo").unwrap();

    let path = root.join(format!("{}.json", DEFAULT_STORAGE_KEY));
    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{"id": card.id.as_str(), "text": "hello", "column": "todo"}])
    );
}

#[test]
fn test_write_while_locked_reports_error_but_keeps_memory_state() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join(".laneboard");
    let store = FileBlobStore::new(&root);

    let mut board = open(&root);
    let _held = store.lock().unwrap();

    let result = board.add_card("a", "todo");
    assert!(matches!(
        result,
        Err(laneboard_kanban::KanbanError::LockBusy)
    ));
    assert_eq!(board.len(), 1);
}
