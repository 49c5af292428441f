//! Core library modules for the calboard application.
//!
//! ## Modules
//!
//! - **Data model**: [`task`] (tasks, labels, holidays), [`date_key`]
//! - **Board state**: [`store`] (the task store), [`board`] (the saved board)
//! - **Board logic**: [`grid`] (date grouping, month layout), [`reorder`]
//!   (drag-and-drop placement), [`draft`] (task edit buffer)
//! - **Files**: [`calendar_file`] (JSON import/export), [`export`] (grid snapshots)
//! - **Infrastructure**: [`config`], [`data_storage`], [`messages`], [`view`]
//!
//! ```rust
//! use calboard::libs::date_key::DateKey;
//! use calboard::libs::reorder::{reorder, DragResult, DropLocation};
//! use calboard::libs::store::TaskStore;
//! use calboard::libs::task::Task;
//! use chrono::NaiveDate;
//!
//! let date = NaiveDate::from_ymd_opt(2023, 2, 15).unwrap();
//! let mut store = TaskStore::with_tasks(vec![Task::new("Write notes", date)]);
//! let task_id = store.tasks()[0].id.clone();
//!
//! let drag = DragResult {
//!     task_id,
//!     source: DropLocation::new(DateKey::from(date), 0),
//!     destination: Some(DropLocation::new(DateKey::new(2023, 1, 20), 0)),
//! };
//! if let Some(tasks) = reorder(&store.tasks(), &drag) {
//!     store.set_tasks(tasks);
//! }
//! assert_eq!(store.tasks()[0].date, NaiveDate::from_ymd_opt(2023, 2, 20).unwrap());
//! ```

pub mod board;
pub mod calendar_file;
pub mod config;
pub mod data_storage;
pub mod date_key;
pub mod draft;
pub mod export;
pub mod grid;
pub mod messages;
pub mod reorder;
pub mod store;
pub mod task;
pub mod view;
