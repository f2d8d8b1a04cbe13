use super::config::{Config, DEFAULT_DATE_FORMAT};
use super::task::Task;
use anyhow::Result;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, Utc};
use prettytable::{row, Cell, Row, Table};

/// Every second task row is printed in bright black.
const SHADED_ROW_STYLE: &str = "FD";

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task], config: &Config) -> Result<()> {
        Self::task_table(tasks, config).printstd();

        Ok(())
    }

    pub fn tasks_json(tasks: &[Task]) -> Result<()> {
        println!("{}", Self::render_json(tasks)?);

        Ok(())
    }

    pub fn render_json(tasks: &[Task]) -> Result<String> {
        Ok(serde_json::to_string_pretty(tasks)?)
    }

    pub fn task_table(tasks: &[Task], config: &Config) -> Table {
        let mut table = Table::new();

        table.set_titles(row![bFm => "ID", "NAME", "PROJECT", "STATUS", "CREATED"]);
        for (index, task) in tasks.iter().enumerate() {
            let style = if index % 2 == 1 { SHADED_ROW_STYLE } else { "" };
            let values = [
                task.id.to_string(),
                task.name.clone(),
                task.project.clone(),
                task.status.to_string(),
                format_created(&task.created, &config.date_format),
            ];
            table.add_row(Row::new(values.iter().map(|value| Cell::new(value).style_spec(style)).collect()));
        }

        table
    }
}

/// Returns `true` when chrono understands every specifier in `format`.
pub fn is_valid_date_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

/// Formats a creation time in local time. Unknown format strings fall back
/// to the default so that a bad config never breaks listing.
pub fn format_created(created: &DateTime<Utc>, format: &str) -> String {
    let format = if is_valid_date_format(format) { format } else { DEFAULT_DATE_FORMAT };
    created.with_timezone(&Local).format(format).to_string()
}
