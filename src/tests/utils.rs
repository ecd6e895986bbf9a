use crate::config::DEFAULT_MAX_BODY_BYTES;
use crate::db::{init_db, Database};
use crate::router::{handle, AppState};
use astra::{Body, Response};
use http::{Method, Request};
use std::io::Read;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static NEXT_DB: AtomicUsize = AtomicUsize::new(0);

/// A fresh temp-file database with the production schema.
/// Dropping it closes the connection and removes the file with its WAL siblings.
pub struct TestDb {
    db: Database,
    path: PathBuf,
}

impl TestDb {
    pub fn new() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let seq = NEXT_DB.fetch_add(1, Ordering::Relaxed);
        let path = std::env::temp_dir().join(format!("zeecurity_test_{nanos}_{seq}.sqlite"));

        let db = Database::new(path.to_string_lossy().into_owned());
        init_db(&db).unwrap_or_else(|e| panic!("Database initialization failed: {e}"));
        TestDb { db, path }
    }

    pub fn files(&self) -> Vec<PathBuf> {
        ["", "-wal", "-shm"]
            .iter()
            .map(|suffix| {
                let mut name = self.path.clone().into_os_string();
                name.push(suffix);
                PathBuf::from(name)
            })
            .collect()
    }
}

impl Deref for TestDb {
    type Target = Database;

    fn deref(&self) -> &Database {
        &self.db
    }
}

impl Drop for TestDb {
    fn drop(&mut self) {
        self.db.disconnect();
        for file in self.files() {
            let _ = std::fs::remove_file(file);
        }
    }
}

/// App state over a `TestDb`; the database is cleaned up with the state.
pub struct TestState {
    state: AppState,
    _db: TestDb,
}

impl Deref for TestState {
    type Target = AppState;

    fn deref(&self) -> &AppState {
        &self.state
    }
}

impl DerefMut for TestState {
    fn deref_mut(&mut self) -> &mut AppState {
        &mut self.state
    }
}

pub fn test_state() -> TestState {
    let db = TestDb::new();
    TestState {
        state: AppState {
            db: db.db.clone(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        },
        _db: db,
    }
}

pub fn request(method: Method, uri: &str, body: Option<serde_json::Value>) -> astra::Request {
    let body = match body {
        Some(json) => Body::from(json.to_string()),
        None => Body::empty(),
    };
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(body)
        .unwrap()
}

pub fn read_body(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

/// Route a request and return status plus decoded JSON body.
/// Errors go through the same `{error}` mapping the server uses.
pub fn send(
    state: &AppState,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (u16, serde_json::Value) {
    let resp = handle(request(method, uri, body), state)
        .unwrap_or_else(crate::responses::error_response);
    let status = resp.status().as_u16();
    let text = read_body(resp);
    let json = serde_json::from_str(&text)
        .unwrap_or_else(|e| panic!("response was not JSON ({e}): {text}"));
    (status, json)
}

#[test]
fn test_db_files_are_removed_on_drop() {
    let db = TestDb::new();
    let files = db.files();
    assert!(files[0].exists());

    drop(db);
    for file in files {
        assert!(!file.exists(), "{} was left behind", file.display());
    }
}
