//! In-progress edit buffer for creating or editing a task.
//!
//! Labels are edited by position while a draft is open. Nothing reaches the
//! store until the draft is committed, at which point an empty title rejects
//! the whole draft and labels whose text was never filled in are dropped.

use super::task::{Label, LabelColor, Task};
use chrono::NaiveDate;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub labels: Vec<Label>,
    default_color: LabelColor,
}

impl TaskDraft {
    pub fn new(title: &str) -> Self {
        TaskDraft {
            title: title.to_string(),
            ..Default::default()
        }
    }

    pub fn from_task(task: &Task) -> Self {
        TaskDraft {
            title: task.title.clone(),
            labels: task.labels.clone(),
            default_color: LabelColor::default(),
        }
    }

    pub fn with_default_color(mut self, color: LabelColor) -> Self {
        self.default_color = color;
        self
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    /// Appends an empty label and returns its index.
    pub fn add_label(&mut self) -> usize {
        self.labels.push(Label::new("", self.default_color));
        self.labels.len() - 1
    }

    pub fn set_label_text(&mut self, index: usize, text: &str) -> bool {
        match self.labels.get_mut(index) {
            Some(label) => {
                label.text = text.to_string();
                true
            }
            None => false,
        }
    }

    pub fn set_label_color(&mut self, index: usize, color: &str) -> bool {
        match self.labels.get_mut(index) {
            Some(label) => {
                label.color = color.to_string();
                true
            }
            None => false,
        }
    }

    pub fn remove_label(&mut self, index: usize) -> Option<Label> {
        (index < self.labels.len()).then(|| self.labels.remove(index))
    }

    fn filled_labels(self) -> Vec<Label> {
        self.labels.into_iter().filter(|label| !label.is_pending()).collect()
    }

    /// Commits a new task for `date`.
    ///
    /// Returns the label-less task to add and the labels to attach to it
    /// afterwards, or `None` when the title is empty.
    pub fn into_new_task(self, date: NaiveDate) -> Option<(Task, Vec<Label>)> {
        if self.title.is_empty() {
            return None;
        }
        let task = Task::new(&self.title, date);
        Some((task, self.filled_labels()))
    }

    /// Commits edits to `task`, keeping its id and date.
    pub fn into_edited(self, task: &Task) -> Option<Task> {
        if self.title.is_empty() {
            return None;
        }
        let title = self.title.clone();
        Some(Task {
            title,
            labels: self.filled_labels(),
            ..task.clone()
        })
    }
}
