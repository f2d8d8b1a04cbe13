//! Display implementation for tsk messages.
//!
//! All message text is defined here so that wording stays consistent between
//! commands.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id, name) => format!("Task #{} '{}' created", id, name),
            Message::TaskUpdated(id, name) => format!("Task #{} '{}' updated", id, name),
            Message::TaskDeleted(id) => format!("Task #{} deleted", id),
            Message::TaskNothingDeleted(id) => format!("No task with ID {}, nothing to delete", id),
            Message::TaskStatusChanged(id, name, status) => format!("Task #{} '{}' is now {}", id, name, status),
            Message::NoChangesDetected => "No changes requested, task left as is".to_string(),
            Message::NoTasksFound => "No tasks found".to_string(),

            // === STORAGE MESSAGES ===
            Message::DataDirectory(path) => path.clone(),
            Message::DataDirectoryUnavailable(error) => format!("Cannot prepare the data directory: {}", error),
            Message::InvalidTaskId(value) => format!("'{}' is not a valid task ID", value),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigParseError(error) => format!("Failed to parse configuration, using defaults: {}", error),
            Message::InvalidDateFormat(format) => format!("'{}' is not a valid date format", format),
        };

        write!(f, "{}", text)
    }
}
