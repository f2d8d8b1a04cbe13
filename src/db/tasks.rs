use super::db::Db;
use crate::libs::error::{Result, TaskError};
use crate::libs::task::{ensure_name, Status, Task, TaskFilter, TaskUpdate};
use crate::msg_debug;
use chrono::Utc;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use std::path::Path;

const TABLE_TASKS: &str = "tasks";
const SCHEMA_TASKS: &str = "CREATE TABLE tasks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    project TEXT,
    status TEXT,
    created DATETIME
)";
const INSERT_TASK: &str = "INSERT INTO tasks (name, project, status, created) VALUES (?1, ?2, ?3, ?4)";
const UPDATE_TASK: &str = "UPDATE tasks SET name = ?1, project = ?2, status = ?3 WHERE id = ?4";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";
const SELECT_TASKS: &str = "SELECT id, name, project, status, created FROM tasks";
const WHERE_ID: &str = "WHERE id = ?1";

/// Owns the connection to the task database.
///
/// Writes are single statements, except `insert`, which runs in a
/// transaction so a rejected ID leaves no row behind. The connection is
/// closed when the store is dropped.
pub struct TaskStore {
    conn: Connection,
}

impl TaskStore {
    /// Opens the database in `dir` and creates the `tasks` table on first use.
    pub fn open(dir: &Path) -> Result<TaskStore> {
        let db = Db::open(dir)?;
        if !db.table_exists(TABLE_TASKS)? {
            msg_debug!(format!("Creating table '{}' in {}", TABLE_TASKS, db.path.display()));
            db.conn.execute(SCHEMA_TASKS, []).map_err(|source| db.unavailable(source))?;
        }

        Ok(TaskStore { conn: db.conn })
    }

    /// Adds a `todo` task and returns the ID the engine assigned to it.
    ///
    /// The row is only committed once its ID is known to fit a `u32`.
    pub fn insert(&mut self, name: &str, project: &str) -> Result<u32> {
        ensure_name(name)?;
        let transaction = self.conn.transaction()?;
        transaction.execute(INSERT_TASK, params![name, project, Status::Todo, Utc::now()])?;

        let rowid = transaction.last_insert_rowid();
        let id = u32::try_from(rowid)
            .map_err(|_| TaskError::ConstraintViolation(format!("assigned ID {} does not fit a task ID", rowid)))?;
        transaction.commit()?;

        Ok(id)
    }

    /// Removes the task with `id` and returns the number of deleted rows.
    /// A missing ID is not an error.
    pub fn delete(&mut self, id: u32) -> Result<usize> {
        let deleted = self.conn.execute(DELETE_TASK, params![id])?;
        msg_debug!(format!("Deleted {} row(s) for task {}", deleted, id));

        Ok(deleted)
    }

    pub fn get_task(&self, id: u32) -> Result<Task> {
        self.conn
            .query_row(&format!("{} {}", SELECT_TASKS, WHERE_ID), params![id], map_task)
            .optional()?
            .ok_or(TaskError::NotFound(id))
    }

    /// Lists tasks matching `filter` in the engine's natural order.
    pub fn get_tasks(&self, filter: &TaskFilter) -> Result<Vec<Task>> {
        let (query, values) = build_query(filter);
        msg_debug!(format!("Fetching tasks: {} {:?}", query, values));

        let mut stmt = self.conn.prepare(&query)?;
        let task_iter = stmt.query_map(params_from_iter(values.iter()), map_task)?;
        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }

        Ok(tasks)
    }

    /// Merges `update` onto the stored task and writes it back.
    pub fn update(&mut self, update: &TaskUpdate) -> Result<Task> {
        if let Some(name) = &update.name {
            ensure_name(name)?;
        }

        let mut task = self.get_task(update.id)?;
        task.merge(update);
        self.conn.execute(UPDATE_TASK, params![task.name, task.project, task.status, task.id])?;

        Ok(task)
    }

    /// Moves the task one step forward in the status cycle.
    pub fn advance(&mut self, id: u32) -> Result<Task> {
        self.shift_status(id, Status::next)
    }

    /// Moves the task one step back in the status cycle.
    pub fn revert(&mut self, id: u32) -> Result<Task> {
        self.shift_status(id, Status::prev)
    }

    fn shift_status(&mut self, id: u32, step: fn(&Status) -> Status) -> Result<Task> {
        let current = self.get_task(id)?;
        self.update(&TaskUpdate::new(id).status(step(&current.status)))
    }
}

fn map_task(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        name: row.get(1)?,
        project: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        status: row.get(3)?,
        created: row.get(4)?,
    })
}

/// Builds the listing query for `filter`.
///
/// Predicates are appended in a fixed order (status, then project) and joined
/// with `AND`. An empty project filter adds no predicate. Status is bound as
/// its canonical string, the same form `insert` and `update` write.
pub fn build_query(filter: &TaskFilter) -> (String, Vec<Value>) {
    let mut clauses = Vec::new();
    let mut values = Vec::new();

    if let Some(status) = filter.status {
        clauses.push("status = ?");
        values.push(Value::Text(status.as_str().to_string()));
    }
    if let Some(project) = filter.project.as_deref().filter(|project| !project.is_empty()) {
        clauses.push("project = ?");
        values.push(Value::Text(project.to_string()));
    }

    if clauses.is_empty() {
        (SELECT_TASKS.to_string(), values)
    } else {
        (format!("{} WHERE {}", SELECT_TASKS, clauses.join(" AND ")), values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_filter_lists_everything() {
        let (query, values) = build_query(&TaskFilter::default());
        assert_eq!(query, "SELECT id, name, project, status, created FROM tasks");
        assert!(values.is_empty());
    }

    #[test]
    fn status_filter_binds_canonical_string() {
        let filter = TaskFilter {
            status: Some(Status::InProgress),
            project: None,
        };
        let (query, values) = build_query(&filter);
        assert_eq!(query, "SELECT id, name, project, status, created FROM tasks WHERE status = ?");
        assert_eq!(values, vec![Value::Text("in progress".to_string())]);
    }

    #[test]
    fn project_filter_alone() {
        let filter = TaskFilter {
            status: None,
            project: Some("Work".to_string()),
        };
        let (query, values) = build_query(&filter);
        assert!(query.ends_with("WHERE project = ?"));
        assert_eq!(values, vec![Value::Text("Work".to_string())]);
    }

    #[test]
    fn status_comes_before_project() {
        let filter = TaskFilter {
            status: Some(Status::Done),
            project: Some("Work".to_string()),
        };
        let (query, values) = build_query(&filter);
        assert!(query.ends_with("WHERE status = ? AND project = ?"));
        assert_eq!(values, vec![Value::Text("done".to_string()), Value::Text("Work".to_string())]);
    }

    #[test]
    fn empty_project_adds_no_predicate() {
        let filter = TaskFilter {
            status: None,
            project: Some(String::new()),
        };
        let (query, values) = build_query(&filter);
        assert!(!query.contains("WHERE"));
        assert!(values.is_empty());
    }
}
