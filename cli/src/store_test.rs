use session::{Credential, TOKEN_KEY, clear_credential, load_credential, save_credential};

use super::*;

fn temp_store() -> (tempfile::TempDir, FileStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("nested").join("session.json"));
    (dir, store)
}

#[test]
fn missing_file_reads_as_empty() {
    let (_dir, store) = temp_store();
    assert_eq!(store.get(TOKEN_KEY), Ok(None));
    assert!(load_credential(&store).is_none());
}

#[test]
fn set_creates_parent_dirs_and_persists() {
    let (_dir, store) = temp_store();
    save_credential(&store, &Credential::new("tok123").unwrap()).unwrap();

    let reopened = FileStore::new(store.path());
    assert_eq!(reopened.get(TOKEN_KEY), Ok(Some("tok123".to_owned())));
}

#[test]
fn remove_keeps_other_keys() {
    let (_dir, store) = temp_store();
    store.set("theme", "dark").unwrap();
    store.set(TOKEN_KEY, "tok").unwrap();

    clear_credential(&store);

    assert_eq!(store.get(TOKEN_KEY), Ok(None));
    assert_eq!(store.get("theme"), Ok(Some("dark".to_owned())));
}

#[test]
fn remove_missing_key_does_not_create_file() {
    let (_dir, store) = temp_store();
    store.remove(TOKEN_KEY).unwrap();
    assert!(!store.path().exists());
}

#[test]
fn corrupt_file_is_a_read_error() {
    let (_dir, store) = temp_store();
    std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    std::fs::write(store.path(), "not json").unwrap();

    assert!(matches!(store.get(TOKEN_KEY), Err(StorageError::Read(_))));
    assert!(load_credential(&store).is_none());
}

#[cfg(unix)]
#[test]
fn token_file_is_private_to_owner() {
    use std::os::unix::fs::PermissionsExt;

    let (_dir, store) = temp_store();
    save_credential(&store, &Credential::new("secret").unwrap()).unwrap();

    let mode = std::fs::metadata(store.path()).unwrap().permissions().mode();
    assert_eq!(mode & 0o077, 0, "token file mode {mode:o}");
}

#[cfg(unix)]
#[test]
fn rewrite_tightens_existing_file_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let (_dir, store) = temp_store();
    std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    std::fs::write(store.path(), "{}").unwrap();
    std::fs::set_permissions(store.path(), std::fs::Permissions::from_mode(0o644)).unwrap();

    save_credential(&store, &Credential::new("secret").unwrap()).unwrap();

    let mode = std::fs::metadata(store.path()).unwrap().permissions().mode();
    assert_eq!(mode & 0o077, 0, "token file mode {mode:o}");
}
