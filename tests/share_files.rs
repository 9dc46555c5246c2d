use std::fs;
use std::path::PathBuf;

use keysplit::commands::{load_shares, reconstruct_from_store, split_to_store};
use keysplit::{FsShareStore, KeysplitError, ShareId};

fn scratch_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("keysplit-{}-{}", name, std::process::id()))
}

#[test]
fn numbers_and_paths_resolve_to_the_same_shares() {
    let dir = scratch_dir("resolve");
    let mut store = FsShareStore::new(&dir);
    split_to_store(&mut store, "launch codes", 3, 5).unwrap();

    let by_number = load_shares(&store, &ShareId::parse_args(&["2", "4", "5"]).unwrap()).unwrap();

    let paths: Vec<String> = [2, 4, 5]
        .iter()
        .map(|i| dir.join(format!("share_{}.txt", i)).display().to_string())
        .collect();
    let by_path = load_shares(&store, &ShareId::parse_args(&paths).unwrap()).unwrap();

    assert_eq!(by_number, by_path);
    let ids = ShareId::parse_args(&paths).unwrap();
    assert_eq!(reconstruct_from_store(&store, &ids, true).unwrap(), "launch codes");

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn resplitting_overwrites_previous_shares() {
    let dir = scratch_dir("overwrite");
    let mut store = FsShareStore::new(&dir);
    split_to_store(&mut store, "old", 2, 2).unwrap();
    split_to_store(&mut store, "new", 2, 2).unwrap();

    let ids = ShareId::parse_args(&["1", "2"]).unwrap();
    assert_eq!(reconstruct_from_store(&store, &ids, false).unwrap(), "new");

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn corrupted_record_aborts() {
    let dir = scratch_dir("corrupt");
    let mut store = FsShareStore::new(&dir);
    split_to_store(&mut store, "fragile", 2, 3).unwrap();
    fs::write(dir.join("share_2.txt"), "2 17").unwrap();

    let ids = ShareId::parse_args(&["1", "2"]).unwrap();
    assert!(matches!(
        reconstruct_from_store(&store, &ids, false),
        Err(KeysplitError::MalformedShare { .. })
    ));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn deleted_share_is_missing() {
    let dir = scratch_dir("deleted");
    let mut store = FsShareStore::new(&dir);
    split_to_store(&mut store, "gone", 2, 3).unwrap();
    fs::remove_file(dir.join("share_3.txt")).unwrap();

    let ids = ShareId::parse_args(&["1", "3"]).unwrap();
    assert!(matches!(
        reconstruct_from_store(&store, &ids, false),
        Err(KeysplitError::MissingShare(_))
    ));

    fs::remove_dir_all(&dir).unwrap();
}
