use crate::libs::task::Status;

/// Every user-facing line tsk prints.
///
/// Text lives in the `Display` implementation in `display.rs`; callers pick a
/// variant and hand it to one of the `msg_*!` macros.
#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(u32, String), // id, name
    TaskUpdated(u32, String), // id, name
    TaskDeleted(u32),
    TaskNothingDeleted(u32),
    TaskStatusChanged(u32, String, Status), // id, name, new status
    NoChangesDetected,
    NoTasksFound,

    // === STORAGE MESSAGES ===
    DataDirectory(String),
    DataDirectoryUnavailable(String),
    InvalidTaskId(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigParseError(String),
    InvalidDateFormat(String),
}
