use shelf::catalog::CatalogStore;
use shelf::credentials::CredentialStore;
use shelf::error::ShelfError;
use shelf::model::{Book, User};
use shelf::password::hash_password;
use shelf::store::fs_backend::FsBackend;
use std::fs;
use tempfile::TempDir;

fn backend(dir: &TempDir) -> FsBackend {
    FsBackend::new(dir.path().to_path_buf())
}

#[test]
fn test_example_scenario() {
    let dir = TempDir::new().unwrap();
    let mut users = CredentialStore::open(backend(&dir)).unwrap();
    let mut books = CatalogStore::open(backend(&dir)).unwrap();

    assert!(users.register("Ann", "pw1", "pw1").unwrap());
    assert!(!users.register("ann", "pw2", "pw2").unwrap());
    assert!(users.login("Ann", "pw1"));
    assert!(!users.login("Ann", "wrong"));

    books.add_book("Dune", "Herbert", 1965).unwrap();
    books.add_book("1984", "Orwell", 1949).unwrap();

    assert_eq!(books.search("herb"), vec![&Book::new("Dune", "Herbert", 1965)]);
    assert_eq!(
        books.list_all(),
        &[
            Book::new("Dune", "Herbert", 1965),
            Book::new("1984", "Orwell", 1949)
        ]
    );
}

#[test]
fn test_users_round_trip_through_disk() {
    let dir = TempDir::new().unwrap();
    {
        let mut users = CredentialStore::open(backend(&dir)).unwrap();
        users.register("Ann", "pw1", "pw1").unwrap();
        users.register("Bob", "pw2", "pw2").unwrap();
    }

    let reopened = CredentialStore::open(backend(&dir)).unwrap();
    assert_eq!(
        reopened.users(),
        &[
            User::new("Ann", hash_password("pw1")),
            User::new("Bob", hash_password("pw2"))
        ]
    );
    assert!(reopened.login("Bob", "pw2"));
    assert!(reopened.is_username_taken("BOB"));
}

#[test]
fn test_books_round_trip_through_disk() {
    let dir = TempDir::new().unwrap();
    let titles = ["A", "B", "C", "B"];
    {
        let mut books = CatalogStore::open(backend(&dir)).unwrap();
        for (i, title) in titles.iter().enumerate() {
            books.add_book(title, "Someone", 1900 + i as u32).unwrap();
        }
    }

    let reopened = CatalogStore::open(backend(&dir)).unwrap();
    let listed: Vec<_> = reopened.list_all().iter().map(|b| b.title.as_str()).collect();
    assert_eq!(listed, titles);
}

#[test]
fn test_stores_use_separate_files() {
    let dir = TempDir::new().unwrap();
    let mut users = CredentialStore::open(backend(&dir)).unwrap();
    let mut books = CatalogStore::open(backend(&dir)).unwrap();

    users.register("Ann", "secret", "secret").unwrap();
    books.add_book("Dune", "Herbert", 1965).unwrap();

    let users_json = fs::read_to_string(dir.path().join("users.json")).unwrap();
    let books_json = fs::read_to_string(dir.path().join("books.json")).unwrap();
    assert!(users_json.contains("\"username\": \"Ann\""));
    assert!(!users_json.contains("secret"));
    assert!(books_json.contains("\"year_of_publication\": 1965"));
    assert!(!books_json.contains("Ann"));
}

#[test]
fn test_reads_hand_written_files() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("books.json"),
        r#"[{"title": "Emma", "author": "Jane Austen", "year_of_publication": 1815}]"#,
    )
    .unwrap();
    fs::write(dir.path().join("users.json"), "null").unwrap();

    let books = CatalogStore::open(backend(&dir)).unwrap();
    assert_eq!(books.search("austen").len(), 1);
    let users = CredentialStore::open(backend(&dir)).unwrap();
    assert!(users.users().is_empty());
}

#[test]
fn test_corrupt_users_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("users.json"), "{ truncated").unwrap();

    match CredentialStore::open(backend(&dir)) {
        Err(ShelfError::Corrupt {
            collection, path, ..
        }) => {
            assert_eq!(collection, "users");
            assert_eq!(path, dir.path().join("users.json"));
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("corrupt file opened cleanly"),
    }
}

#[cfg(unix)]
#[test]
fn test_write_failure_is_surfaced() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let mut books = CatalogStore::open(backend(&dir)).unwrap();
    books.add_book("Dune", "Herbert", 1965).unwrap();

    let path = dir.path().join("books.json");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o444)).unwrap();
    // Root ignores file permissions; nothing to observe there.
    if fs::OpenOptions::new().write(true).open(&path).is_ok() {
        return;
    }

    let result = books.add_book("Emma", "Austen", 1815);
    assert!(matches!(result, Err(ShelfError::Io(_))));
    assert_eq!(books.list_all().len(), 1);
}
