use department_core::{
    open_db_in_memory, Department, DepartmentRepository, RepoError, SqliteDepartmentRepository,
};
use rusqlite::{Connection, OptionalExtension};

type RowTuple = (i64, String, String);

#[test]
fn save_inserts_row_and_assigns_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteDepartmentRepository::new(&conn);
    repo.create_table().unwrap();

    let mut department = Department::new("Payroll", "Building A, 5th Floor");
    let id = repo.save(&mut department).unwrap();

    assert_eq!(department.id(), Some(id));
    assert_eq!(
        fetch_row(&conn, id),
        Some((id, "Payroll".to_string(), "Building A, 5th Floor".to_string()))
    );
}

#[test]
fn create_returns_persisted_department_matching_row() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteDepartmentRepository::new(&conn);
    repo.create_table().unwrap();

    let department = repo.create("Payroll", "Building A, 5th Floor").unwrap();

    let id = department.id().unwrap();
    assert_eq!(department.name, "Payroll");
    assert_eq!(department.location, "Building A, 5th Floor");
    assert_eq!(
        fetch_row(&conn, id),
        Some((id, "Payroll".to_string(), "Building A, 5th Floor".to_string()))
    );
}

#[test]
fn sequential_creates_yield_increasing_ids() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteDepartmentRepository::new(&conn);
    repo.create_table().unwrap();

    let first = repo.create("Payroll", "Building A, 5th Floor").unwrap();
    let second = repo.create("Human Resources", "Building C, East Wing").unwrap();

    assert!(second.id().unwrap() > first.id().unwrap());
}

#[test]
fn save_twice_is_rejected_without_duplicating_row() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteDepartmentRepository::new(&conn);
    repo.create_table().unwrap();

    let mut department = Department::new("Payroll", "Building A, 5th Floor");
    let id = repo.save(&mut department).unwrap();

    let err = repo.save(&mut department).unwrap_err();
    assert!(matches!(err, RepoError::AlreadyPersisted(existing) if existing == id));
    assert_eq!(row_count(&conn), 1);
    assert_eq!(department.id(), Some(id));
}

#[test]
fn update_round_trip_rewrites_only_target_row() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteDepartmentRepository::new(&conn);
    repo.create_table().unwrap();

    let payroll = repo.create("Payroll", "Building A, 5th Floor").unwrap();
    let mut marketing = repo.create("Marketing", "Building B, 3rd Floor").unwrap();
    assert_eq!(payroll.id(), Some(1));

    marketing.name = "Sales and Marketing".to_string();
    marketing.location = "Building B, 4th Floor".to_string();
    assert!(repo.update(&marketing).unwrap());

    let marketing_id = marketing.id().unwrap();
    assert_eq!(
        fetch_row(&conn, marketing_id),
        Some((
            marketing_id,
            "Sales and Marketing".to_string(),
            "Building B, 4th Floor".to_string()
        ))
    );
    assert_eq!(
        fetch_row(&conn, 1),
        Some((1, "Payroll".to_string(), "Building A, 5th Floor".to_string()))
    );
}

#[test]
fn update_matches_documented_walkthrough() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteDepartmentRepository::new(&conn);
    repo.create_table().unwrap();

    let mut department = repo.create("Payroll", "Building A, 5th Floor").unwrap();
    assert_eq!(
        fetch_row(&conn, 1),
        Some((1, "Payroll".to_string(), "Building A, 5th Floor".to_string()))
    );

    department.name = "Corporate Accounting".to_string();
    department.location = "Building D, 10th Floor".to_string();
    repo.update(&department).unwrap();

    assert_eq!(
        fetch_row(&conn, 1),
        Some((
            1,
            "Corporate Accounting".to_string(),
            "Building D, 10th Floor".to_string()
        ))
    );
}

#[test]
fn local_mutation_does_not_reach_row_until_update() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteDepartmentRepository::new(&conn);
    repo.create_table().unwrap();

    let mut department = repo.create("Payroll", "Building A, 5th Floor").unwrap();
    department.name = "Treasury".to_string();

    let stored = repo.find_by_id(department.id().unwrap()).unwrap().unwrap();
    assert_eq!(stored.name, "Payroll");
}

#[test]
fn delete_removes_only_target_row_and_keeps_value() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteDepartmentRepository::new(&conn);
    repo.create_table().unwrap();

    let hr = repo.create("Human Resources", "Building C, East Wing").unwrap();
    let marketing = repo.create("Marketing", "Building B, 3rd Floor").unwrap();
    let marketing_id = marketing.id().unwrap();

    assert!(repo.delete(&marketing).unwrap());

    assert!(fetch_row(&conn, hr.id().unwrap()).is_some());
    assert!(fetch_row(&conn, marketing_id).is_none());
    assert_eq!(marketing.id(), Some(marketing_id));
    assert_eq!(marketing.name, "Marketing");
    assert_eq!(marketing.location, "Building B, 3rd Floor");
}

#[test]
fn update_and_delete_after_delete_are_noops() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteDepartmentRepository::new(&conn);
    repo.create_table().unwrap();

    let mut department = repo.create("Payroll", "Building A, 5th Floor").unwrap();
    assert!(repo.delete(&department).unwrap());

    department.name = "Ghost".to_string();
    assert!(!repo.update(&department).unwrap());
    assert!(!repo.delete(&department).unwrap());
    assert_eq!(row_count(&conn), 0);
}

#[test]
fn update_and_delete_on_unpersisted_value_are_noops() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteDepartmentRepository::new(&conn);
    repo.create_table().unwrap();
    repo.create("Payroll", "Building A, 5th Floor").unwrap();

    let draft = Department::new("Draft", "Nowhere");
    assert!(!repo.update(&draft).unwrap());
    assert!(!repo.delete(&draft).unwrap());
    assert_eq!(row_count(&conn), 1);
}

#[test]
fn find_by_id_and_get_all_map_rows() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteDepartmentRepository::new(&conn);
    repo.create_table().unwrap();

    let payroll = repo.create("Payroll", "Building A, 5th Floor").unwrap();
    let hr = repo.create("Human Resources", "Building C, East Wing").unwrap();

    assert_eq!(
        repo.find_by_id(hr.id().unwrap()).unwrap(),
        Some(hr.clone())
    );
    assert_eq!(repo.find_by_id(999).unwrap(), None);
    assert_eq!(repo.get_all().unwrap(), vec![payroll, hr]);
}

#[test]
fn read_paths_reject_null_columns() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteDepartmentRepository::new(&conn);
    repo.create_table().unwrap();
    conn.execute(
        "INSERT INTO departments (name, location) VALUES ('Orphan', NULL);",
        [],
    )
    .unwrap();

    let err = repo.get_all().unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(message) if message.contains("location")));
}

fn fetch_row(conn: &Connection, id: i64) -> Option<RowTuple> {
    conn.query_row(
        "SELECT id, name, location FROM departments WHERE id = ?1;",
        [id],
        |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
    )
    .optional()
    .unwrap()
}

fn row_count(conn: &Connection) -> i64 {
    conn.query_row("SELECT COUNT(*) FROM departments;", [], |row| row.get(0))
        .unwrap()
}
