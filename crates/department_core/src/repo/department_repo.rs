//! Department repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Create and drop the `departments` table.
//! - Insert, update and delete rows for `Department` values.
//! - Map rows back into `Department` values for read paths.
//!
//! # Invariants
//! - `save` assigns the store-generated id and refuses already persisted values.
//! - `update`/`delete` matching zero rows are no-ops, reported as `false`.
//! - `delete` never touches the in-memory value.

use crate::db::DbError;
use crate::model::department::{Department, DepartmentId};
use log::{debug, warn};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const DEPARTMENTS_TABLE: &str = "departments";

const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS departments (
    id INTEGER PRIMARY KEY,
    name TEXT,
    location TEXT
);";

const DROP_TABLE_SQL: &str = "DROP TABLE IF EXISTS departments;";

const DEPARTMENT_SELECT_SQL: &str = "SELECT
    id,
    name,
    location
FROM departments";

pub type RepoResult<T> = Result<T, RepoError>;

/// Error for department persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// `save` was called on a value that already owns a row.
    AlreadyPersisted(DepartmentId),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::AlreadyPersisted(id) => {
                write!(f, "department {id} is already persisted; use update instead")
            }
            Self::InvalidData(message) => {
                write!(f, "invalid persisted department data: {message}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::AlreadyPersisted(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for the department table and its rows.
pub trait DepartmentRepository {
    /// Creates `departments` unless it already exists.
    fn create_table(&self) -> RepoResult<()>;
    /// Drops `departments` if it exists.
    fn drop_table(&self) -> RepoResult<()>;
    /// Returns whether `departments` currently exists.
    fn table_exists(&self) -> RepoResult<bool>;
    /// Inserts a new row and assigns its id to `department`.
    fn save(&self, department: &mut Department) -> RepoResult<DepartmentId>;
    /// Writes current `name`/`location` to the row matching `department.id`.
    fn update(&self, department: &Department) -> RepoResult<bool>;
    /// Deletes the row matching `department.id`.
    fn delete(&self, department: &Department) -> RepoResult<bool>;
    fn find_by_id(&self, id: DepartmentId) -> RepoResult<Option<Department>>;
    /// Lists every row ordered by id.
    fn get_all(&self) -> RepoResult<Vec<Department>>;

    /// Builds a department and saves it in one step.
    fn create(&self, name: &str, location: &str) -> RepoResult<Department> {
        let mut department = Department::new(name, location);
        self.save(&mut department)?;
        Ok(department)
    }
}

/// SQLite-backed department repository over a borrowed connection.
pub struct SqliteDepartmentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteDepartmentRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl DepartmentRepository for SqliteDepartmentRepository<'_> {
    fn create_table(&self) -> RepoResult<()> {
        self.conn.execute_batch(CREATE_TABLE_SQL)?;
        debug!("event=table_create module=repo status=ok table={DEPARTMENTS_TABLE}");
        Ok(())
    }

    fn drop_table(&self) -> RepoResult<()> {
        self.conn.execute_batch(DROP_TABLE_SQL)?;
        debug!("event=table_drop module=repo status=ok table={DEPARTMENTS_TABLE}");
        Ok(())
    }

    fn table_exists(&self) -> RepoResult<bool> {
        let exists: i64 = self.conn.query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [DEPARTMENTS_TABLE],
            |row| row.get(0),
        )?;
        Ok(exists == 1)
    }

    fn save(&self, department: &mut Department) -> RepoResult<DepartmentId> {
        if let Some(id) = department.id() {
            warn!("event=department_save module=repo status=rejected reason=already_persisted id={id}");
            return Err(RepoError::AlreadyPersisted(id));
        }

        self.conn.execute(
            "INSERT INTO departments (name, location) VALUES (?1, ?2);",
            params![department.name.as_str(), department.location.as_str()],
        )?;

        let id = self.conn.last_insert_rowid();
        department.assign_id(id);
        debug!("event=department_save module=repo status=ok id={id}");
        Ok(id)
    }

    fn update(&self, department: &Department) -> RepoResult<bool> {
        // No id means no row, so there is nothing to match.
        let Some(id) = department.id() else {
            debug!("event=department_update module=repo status=noop reason=unpersisted");
            return Ok(false);
        };

        let changed = self.conn.execute(
            "UPDATE departments
             SET
                name = ?1,
                location = ?2
             WHERE id = ?3;",
            params![department.name.as_str(), department.location.as_str(), id],
        )?;

        debug!("event=department_update module=repo status=ok id={id} rows={changed}");
        Ok(changed > 0)
    }

    fn delete(&self, department: &Department) -> RepoResult<bool> {
        let Some(id) = department.id() else {
            debug!("event=department_delete module=repo status=noop reason=unpersisted");
            return Ok(false);
        };

        let changed = self
            .conn
            .execute("DELETE FROM departments WHERE id = ?1;", [id])?;

        debug!("event=department_delete module=repo status=ok id={id} rows={changed}");
        Ok(changed > 0)
    }

    fn find_by_id(&self, id: DepartmentId) -> RepoResult<Option<Department>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{DEPARTMENT_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_department_row(row)?));
        }

        Ok(None)
    }

    fn get_all(&self) -> RepoResult<Vec<Department>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{DEPARTMENT_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut departments = Vec::new();

        while let Some(row) = rows.next()? {
            departments.push(parse_department_row(row)?);
        }

        Ok(departments)
    }
}

fn parse_department_row(row: &Row<'_>) -> RepoResult<Department> {
    let id: DepartmentId = row.get("id")?;
    let name = row.get::<_, Option<String>>("name")?.ok_or_else(|| {
        RepoError::InvalidData(format!("NULL value in departments.name for id {id}"))
    })?;
    let location = row.get::<_, Option<String>>("location")?.ok_or_else(|| {
        RepoError::InvalidData(format!("NULL value in departments.location for id {id}"))
    })?;
    Ok(Department::with_id(id, name, location))
}
