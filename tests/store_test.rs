//! ファイル版ストアのテスト

use somm_directory::store::FileStore;
use somm_directory_common::{KeyValueStore, ReviewState, SEEN_ITEMS_KEY};
use tempfile::tempdir;

/// 存在しないストアファイルは空
#[test]
fn test_open_missing_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("store.json");
    let store = FileStore::open(&path);
    assert_eq!(store.path(), path.as_path());
    assert!(store.get(SEEN_ITEMS_KEY).is_none());
    assert!(ReviewState::load(&store).is_empty());
}

/// 書き込みと再読み込み
#[test]
fn test_set_and_reopen() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("store.json");

    let mut store = FileStore::open(&path);
    store.set(SEEN_ITEMS_KEY, r#"["r1","r7"]"#).expect("保存失敗");
    store.set("other", "value").expect("保存失敗");
    assert!(path.exists());

    let reopened = FileStore::open(&path);
    assert_eq!(reopened.get(SEEN_ITEMS_KEY).as_deref(), Some(r#"["r1","r7"]"#));
    assert_eq!(reopened.get("other").as_deref(), Some("value"));
    assert_eq!(ReviewState::load(&reopened).ids(), &["r1".to_string(), "r7".to_string()]);
}

/// 壊れたストアファイルは空として扱う
#[test]
fn test_malformed_store_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("store.json");
    std::fs::write(&path, "not json at all").unwrap();

    let mut store = FileStore::open(&path);
    assert!(store.get(SEEN_ITEMS_KEY).is_none());

    // 上書き保存で復旧する
    store.set(SEEN_ITEMS_KEY, "[]").expect("保存失敗");
    assert_eq!(FileStore::open(&path).get(SEEN_ITEMS_KEY).as_deref(), Some("[]"));
}

/// スロットの値が壊れていてもレビュー状態は空で起動
#[test]
fn test_malformed_slot_payload() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("store.json");
    std::fs::write(&path, r#"{"sommSeenItems": "[broken"}"#).unwrap();

    let store = FileStore::open(&path);
    assert!(ReviewState::load(&store).is_empty());
}

/// 一時ファイルが残らない
#[test]
fn test_no_temp_file_left() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("store.json");
    let mut store = FileStore::open(&path);
    store.set(SEEN_ITEMS_KEY, "[]").unwrap();

    let names: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["store.json".to_string()]);
}
