//! The saved board a command works on.
//!
//! [`Board`] opens the store from `board.json` in the data directory,
//! watches it through a store subscription and writes it back only if a
//! mutation actually changed the tasks. Holidays are never saved.

use super::calendar_file::CalendarData;
use super::data_storage::DataStorage;
use super::messages::Message;
use super::store::{StoreEvent, TaskStore};
use super::task::{Label, Task};
use crate::{msg_debug, msg_error_anyhow, msg_info};
use anyhow::Result;
use chrono::NaiveDate;
use std::cell::Cell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

pub const BOARD_FILE_NAME: &str = "board.json";

pub struct Board {
    store: TaskStore,
    path: PathBuf,
    dirty: Rc<Cell<bool>>,
}

impl Board {
    /// Opens the board saved in the application data directory.
    pub fn open() -> Result<Self> {
        let path = DataStorage::new().get_path(BOARD_FILE_NAME)?;
        Self::open_at(&path)
    }

    /// Opens the board saved at `path`, or the sample board if there is none.
    pub fn open_at(path: &Path) -> Result<Self> {
        let (tasks, seeded) = if path.exists() {
            let data = CalendarData::read(path).map_err(|error| msg_error_anyhow!(Message::BoardLoadFailed(format!("{:#}", error))))?;
            (data.tasks, false)
        } else {
            msg_info!(Message::BoardSeeded);
            (sample_tasks(), true)
        };

        let mut store = TaskStore::with_tasks(tasks);
        let dirty = Rc::new(Cell::new(seeded));
        let flag = Rc::clone(&dirty);
        store.subscribe(move |event| {
            if event == StoreEvent::TasksChanged {
                flag.set(true);
            }
        });

        Ok(Board {
            store,
            path: path.to_path_buf(),
            dirty,
        })
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut TaskStore {
        &mut self.store
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    /// Writes the board back if its tasks changed since it was opened.
    pub fn save(&self) -> Result<bool> {
        if !self.dirty.get() {
            return Ok(false);
        }
        CalendarData::new(self.store.tasks())
            .write(&self.path)
            .map_err(|error| msg_error_anyhow!(Message::BoardSaveFailed(format!("{:#}", error))))?;
        self.dirty.set(false);
        msg_debug!(Message::BoardSaved);
        Ok(true)
    }
}

fn sample_date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 2, day).unwrap_or_default()
}

fn sample_label(id: &str, text: &str, color: &str) -> Label {
    Label {
        id: id.to_string(),
        text: text.to_string(),
        color: color.to_string(),
    }
}

/// The board a fresh installation starts with.
pub fn sample_tasks() -> Vec<Task> {
    let task = |id: &str, title: &str, day: u32, labels: Vec<Label>| Task {
        id: id.to_string(),
        title: title.to_string(),
        date: sample_date(day),
        labels,
    };

    vec![
        task(
            "1",
            "Task 1",
            15,
            vec![sample_label("1", "Label 1", "#FF0000"), sample_label("2", "Label 2", "#00FF00")],
        ),
        task(
            "2",
            "Task 2",
            20,
            vec![sample_label("3", "Label 2", "#00FF00"), sample_label("4", "Label 3", "#0000FF")],
        ),
        task("3", "Task 3", 25, Vec::new()),
        task("4", "Task 4", 25, Vec::new()),
        task("5", "Task 5", 25, Vec::new()),
    ]
}
