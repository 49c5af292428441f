//! Display implementation for calboard application messages.
//!
//! All user-facing text lives here, so commands only ever name a [`Message`]
//! variant and pass its parameters.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(title) => format!("Task '{}' created", title),
            Message::TaskCreateRefused => "A task needs a title; nothing was created.".to_string(),
            Message::TaskUpdated(title) => format!("Task '{}' updated", title),
            Message::TaskUpdateRefused => "A task needs a title; changes were not saved.".to_string(),
            Message::TaskUnchanged(title) => format!("Task '{}' - no changes.", title),
            Message::TaskDeleted(id) => format!("Task {} deleted", id),
            Message::TaskNotFound(id) => format!("Task with ID {} not found.", id),
            Message::TasksHeader => "Tasks:".to_string(),
            Message::NoTasks => "The board has no tasks.".to_string(),
            Message::NoTasksMatching(query) => format!("No tasks match '{}'.", query),

            // === LABEL MESSAGES ===
            Message::LabelsAdded(count, title) => format!("Added {} label(s) to '{}'", count, title),
            Message::LabelsNotAdded(title) => format!("No new labels for '{}'.", title),
            Message::LabelDeleted(id) => format!("Label {} deleted", id),
            Message::LabelNotFound(task_id, label_id) => format!("Label {} not found on task {}.", label_id, task_id),
            Message::InvalidLabelSpec(spec) => format!("Invalid label '{}'. Use TEXT or TEXT:COLOR.", spec),
            Message::UnknownLabelColor(color) => format!("Unknown label color '{}'. Use blue, green, yellow or red.", color),

            // === MOVE MESSAGES ===
            Message::TaskMoved(title, date) => format!("Task '{}' moved to {}", title, date),
            Message::TaskReordered(title, index) => format!("Task '{}' moved to position {}", title, index),
            Message::MoveNoop(id) => format!("Task {} was not moved.", id),
            Message::InvalidDateKey(key) => format!("Invalid date key '{}'. Use YEAR/MONTH/DAY with a zero-based month.", key),

            // === GRID MESSAGES ===
            Message::GridHeader(month) => format!("🗓️  {}", month),
            Message::HolidaysHeader => "Upcoming public holidays:".to_string(),
            Message::NoHolidays => "No holidays available.".to_string(),
            Message::InvalidMonth(value) => format!("Invalid month '{}'. Use YYYY-MM.", value),
            Message::InvalidDate(value) => format!("Invalid date '{}'. Use 'today' or YYYY-MM-DD.", value),

            // === BOARD FILE MESSAGES ===
            Message::BoardSaved => "Board saved".to_string(),
            Message::BoardSaveFailed(error) => format!("Failed to save board: {}", error),
            Message::BoardLoadFailed(error) => format!("Failed to load board: {}", error),
            Message::BoardSeeded => "No saved board found; starting from the sample board.".to_string(),
            Message::ImportCompleted(count, path) => format!("Imported {} task(s) from {}", count, path),
            Message::ImportFailed(error) => format!("Failed to import calendar: {}", error),
            Message::ExportCompleted(count, path) => format!("Exported {} task(s) to {}", count, path),
            Message::SnapshotCompleted(path) => format!("Grid snapshot written to {}", path),
            Message::SnapshotFailed(error) => format!("Failed to write grid snapshot: {}", error),

            // === HOLIDAY MESSAGES ===
            Message::HolidaysFetching(url) => format!("Fetching holidays from {}", url),
            Message::HolidaysFetched(count) => format!("Fetched {} holiday(s)", count),
            Message::HolidaysFetchFailed(error) => format!("Failed to fetch holidays: {}", error),
            Message::HolidaysDisabled => "Holiday lookup is disabled in the configuration.".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigNotFound => "No configuration file to remove.".to_string(),
            Message::ConfigModuleHolidays => "Holidays settings:".to_string(),
            Message::ConfigModuleBoard => "Board settings:".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptHolidaysEnabled => "Fetch public holidays for the grid?".to_string(),
            Message::PromptHolidaysApiUrl => "Holidays API URL".to_string(),
            Message::PromptDefaultLabelColor => "Default label color".to_string(),
        };

        write!(f, "{}", text)
    }
}
