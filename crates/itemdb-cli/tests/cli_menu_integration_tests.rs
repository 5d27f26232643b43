//! CLI menu integration tests
//!
//! Drive the built binary with scripted stdin and check both the printed
//! output and the resulting store file.

use rusqlite::Connection;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn run_cli(db_path: &Path, script: &str) -> Output {
    let cli_bin = env!("CARGO_BIN_EXE_itemdb");

    let mut child = Command::new(cli_bin)
        .args(["--db", db_path.to_str().unwrap()])
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute CLI");

    // The child may exit before reading stdin (e.g. failed open)
    child
        .stdin
        .take()
        .unwrap()
        .write_all(script.as_bytes())
        .ok();

    child.wait_with_output().unwrap()
}

fn stored_names(db_path: &Path) -> Vec<(i64, String)> {
    let conn = Connection::open(db_path).unwrap();
    let mut stmt = conn
        .prepare("SELECT id, name FROM items ORDER BY id")
        .unwrap();
    stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
        .unwrap()
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
}

#[test]
fn test_cli_pen_book_session() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("items.db");

    let script = "1\nPen\nBlue ink\n1\nBook\nSci-fi\n2\n4\n1\nPencil\nGraphite\n5\n2\n2\n6\n";
    let output = run_cli(&db_path, script);

    assert!(
        output.status.success(),
        "CLI failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Item created successfully with ID: 1"));
    assert!(stdout.contains("Item created successfully with ID: 2"));
    assert!(stdout.contains("ID: 2, Name: Book, Description: Sci-fi"));
    assert!(stdout.contains("Item updated successfully."));
    assert!(stdout.contains("Item deleted successfully."));
    assert!(stdout.contains("Goodbye!"));

    assert_eq!(stored_names(&db_path), vec![(1, "Pencil".to_string())]);
}

#[test]
fn test_cli_state_persists_between_runs() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("nested").join("items.db");

    let first = run_cli(&db_path, "1\nLamp\nDesk\n6\n");
    assert!(first.status.success());

    let second = run_cli(&db_path, "3\n1\n6\n");
    assert!(second.status.success());
    let stdout = String::from_utf8_lossy(&second.stdout);
    assert!(stdout.contains("Item found:"));
    assert!(stdout.contains("Name: Lamp, Description: Desk"));
}

#[test]
fn test_cli_not_found_and_invalid_input() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("items.db");

    let output = run_cli(&db_path, "3\n42\n5\nabc\n7\n6\n");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Item not found."));
    assert!(stdout.contains("Invalid ID. Please enter a number."));
    assert!(stdout.contains("Invalid choice. Please try again."));
}

#[test]
fn test_cli_eof_exits_cleanly() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("items.db");

    let output = run_cli(&db_path, "2\n");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No items found."));
    assert!(stdout.contains("Goodbye!"));
}

#[test]
fn test_cli_unopenable_store_exits_with_error() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("blocker");
    std::fs::write(&blocker, b"file, not directory").unwrap();

    let output = run_cli(&blocker.join("items.db"), "6\n");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: [ERR_IO]"), "stderr was: {}", stderr);
}

#[test]
fn test_cli_storage_failure_exits_with_error() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("items.db");

    let first = run_cli(&db_path, "1\nPen\nBlue ink\n6\n");
    assert!(first.status.success());

    // A table named items that lacks the expected columns survives the
    // idempotent bootstrap and makes every read fail
    let conn = Connection::open(&db_path).unwrap();
    conn.execute_batch("DROP TABLE items; CREATE TABLE items (label TEXT);")
        .unwrap();
    drop(conn);

    let output = run_cli(&db_path, "2\n6\n");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Error: [ERR_PERSISTENCE] in operation 'item_read_all'"),
        "stderr was: {}",
        stderr
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Goodbye!"));
}
