//! JSON calendar files used for import, export and the saved board.
//!
//! The file is a single object holding the task list:
//!
//! ```json
//! {"tasks":[{"id":"1","title":"Task 1","date":"2023-02-15","labels":[]}]}
//! ```
//!
//! Importing replaces the whole board. A file that fails to parse is
//! reported as an error and leaves the board as it was.

use super::task::Task;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_EXPORT_FILE_NAME: &str = "calendar.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalendarData {
    pub tasks: Vec<Task>,
}

impl CalendarData {
    pub fn new(tasks: Vec<Task>) -> Self {
        CalendarData { tasks }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("calendar file is not a valid board")
    }

    /// Compact JSON, as written by export.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn read(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_json(&json)
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_json()?).with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }
}
