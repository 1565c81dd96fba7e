use department_core::{open_db, open_db_in_memory, DepartmentRepository, SqliteDepartmentRepository};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_enables_foreign_keys_without_creating_tables() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(foreign_keys(&conn), 1);
    let tables: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table';",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(tables, 0);
}

#[test]
fn in_memory_databases_are_isolated() {
    let first = open_db_in_memory().unwrap();
    let second = open_db_in_memory().unwrap();
    SqliteDepartmentRepository::new(&first)
        .create_table()
        .unwrap();

    assert!(!SqliteDepartmentRepository::new(&second)
        .table_exists()
        .unwrap());
}

#[test]
fn reopening_file_database_preserves_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("departments.db");

    let conn_first = open_db(&path).unwrap();
    let repo = SqliteDepartmentRepository::new(&conn_first);
    repo.create_table().unwrap();
    let payroll = repo.create("Payroll", "Building A, 5th Floor").unwrap();
    drop(repo);
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    let repo = SqliteDepartmentRepository::new(&conn_second);
    assert_eq!(repo.get_all().unwrap(), vec![payroll]);
}

#[test]
fn open_db_fails_for_missing_parent_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("departments.db");

    assert!(open_db(&path).is_err());
}

fn foreign_keys(conn: &Connection) -> i64 {
    conn.query_row("PRAGMA foreign_keys;", [], |row| row.get(0))
        .unwrap()
}
