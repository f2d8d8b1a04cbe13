//! Task entity, status model and partial-update logic.
//!
//! A [`Task`] is what the store hands back to callers. Changes to an existing
//! task are described by a [`TaskUpdate`] whose fields are all optional: a
//! `None` field is left alone, a `Some` field replaces the stored value. This
//! makes it possible to clear a project explicitly with `Some(String::new())`.
//!
//! ## Usage
//!
//! ```rust
//! use tsk::libs::task::{Status, Task, TaskUpdate};
//!
//! let mut task = Task::new(1, "Write report", "Work");
//! task.merge(&TaskUpdate::new(1).status(Status::Done));
//! assert_eq!(task.status, Status::Done);
//! assert_eq!(task.project, "Work");
//! ```

use super::error::{Result, TaskError};
use chrono::{DateTime, Utc};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::Serialize;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Workflow state of a task.
///
/// The canonical string (`"todo"`, `"in progress"`, `"done"`) is the only form
/// written to and compared in the database. Numeric codes exist for command
/// line input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Todo,
    #[serde(rename = "in progress")]
    InProgress,
    Done,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Todo, Status::InProgress, Status::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Todo => "todo",
            Status::InProgress => "in progress",
            Status::Done => "done",
        }
    }

    /// Maps a numeric code to a status. Codes outside `0..=2` fall back to
    /// [`Status::Todo`].
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => Status::InProgress,
            2 => Status::Done,
            _ => Status::Todo,
        }
    }

    /// Next status in the cycle `todo -> in progress -> done -> todo`.
    pub fn next(&self) -> Self {
        match self {
            Status::Todo => Status::InProgress,
            Status::InProgress => Status::Done,
            Status::Done => Status::Todo,
        }
    }

    /// Previous status in the same cycle.
    pub fn prev(&self) -> Self {
        match self {
            Status::Todo => Status::Done,
            Status::InProgress => Status::Todo,
            Status::Done => Status::InProgress,
        }
    }

    fn from_canonical(value: &str) -> Option<Self> {
        Status::ALL.into_iter().find(|status| status.as_str() == value)
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = TaskError;

    /// Accepts the canonical names, `in-progress`/`in_progress`, and numeric
    /// codes (coerced through [`Status::from_code`]).
    fn from_str(value: &str) -> Result<Self> {
        let normalized = value.trim().to_lowercase().replace(['-', '_'], " ");
        if let Some(status) = Status::from_canonical(&normalized) {
            return Ok(status);
        }
        normalized
            .parse::<i64>()
            .map(Status::from_code)
            .map_err(|_| TaskError::InvalidArgument(format!("unknown status '{}', expected todo, in-progress or done", value)))
    }
}

impl ToSql for Status {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Status {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let text = value.as_str()?;
        Status::from_canonical(text).ok_or_else(|| FromSqlError::Other(format!("invalid stored status '{}'", text).into()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Task {
    pub id: u32,
    pub name: String,
    pub project: String,
    pub status: Status,
    pub created: DateTime<Utc>,
}

impl Task {
    /// Builds an in-memory task with status `todo` created now. The store
    /// assigns real IDs; this is mostly useful for rendering and tests.
    pub fn new(id: u32, name: &str, project: &str) -> Self {
        Task {
            id,
            name: name.to_string(),
            project: project.to_string(),
            status: Status::Todo,
            created: Utc::now(),
        }
    }

    /// Applies every present field of `update` onto this task.
    ///
    /// `id` and `created` are never touched, whatever `update.id` says.
    pub fn merge(&mut self, update: &TaskUpdate) {
        if let Some(name) = &update.name {
            self.name = name.clone();
        }
        if let Some(project) = &update.project {
            self.project = project.clone();
        }
        if let Some(status) = update.status {
            self.status = status;
        }
    }
}

/// Sparse change request for an existing task.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskUpdate {
    pub id: u32,
    pub name: Option<String>,
    pub project: Option<String>,
    pub status: Option<Status>,
}

impl TaskUpdate {
    pub fn new(id: u32) -> Self {
        TaskUpdate { id, ..Default::default() }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn project(mut self, project: impl Into<String>) -> Self {
        self.project = Some(project.into());
        self
    }

    pub fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.project.is_none() && self.status.is_none()
    }
}

/// Equality filters for listing tasks. Both unset means "everything".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskFilter {
    pub status: Option<Status>,
    pub project: Option<String>,
}

/// Rejects names that are empty after trimming.
pub fn ensure_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(TaskError::ConstraintViolation("task name must not be empty".to_string()));
    }
    Ok(())
}
