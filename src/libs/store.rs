//! The task store: single source of truth for the board.
//!
//! [`TaskStore`] owns the task collection and the current holiday list. It
//! is created by the application root and mutated only through the
//! operations below. Views that need to react to changes register a
//! callback with [`TaskStore::subscribe`].
//!
//! ## Not-found policy
//!
//! Mutations that reference a missing task or label are silent no-ops. Each
//! mutation returns `true` only when the state actually changed, and only
//! then are subscribers notified. Repeating an identical call is harmless.
//! Callers that want to report a stale id use [`TaskStore::require_task`].
//!
//! ## Storage
//!
//! Tasks are kept in a map keyed by id, with a separate id sequence giving
//! the board order. [`TaskStore::tasks`] projects the map back into that
//! order for rendering and export.

use super::task::{Holiday, Label, Task};
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("task {0} not found")]
    TaskNotFound(String),
    #[error("label {label_id} not found on task {task_id}")]
    LabelNotFound { task_id: String, label_id: String },
}

/// What changed in a store mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    TasksChanged,
    HolidaysChanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

type Listener = Box<dyn FnMut(StoreEvent)>;

#[derive(Default)]
pub struct TaskStore {
    tasks: HashMap<String, Task>,
    order: Vec<String>,
    holidays: Vec<Holiday>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: usize,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let mut store = Self::new();
        store.set_tasks(tasks);
        store
    }

    /// Registers a callback run after every state-changing mutation.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(StoreEvent) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    fn notify(&mut self, event: StoreEvent) {
        for (_, listener) in self.listeners.iter_mut() {
            listener(event);
        }
    }

    /// Tasks in board order.
    pub fn tasks(&self) -> Vec<Task> {
        self.order.iter().filter_map(|id| self.tasks.get(id)).cloned().collect()
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.get(id)
    }

    pub fn require_task(&self, id: &str) -> Result<&Task, StoreError> {
        self.tasks.get(id).ok_or_else(|| StoreError::TaskNotFound(id.to_string()))
    }

    pub fn require_label(&self, task_id: &str, label_id: &str) -> Result<&Label, StoreError> {
        self.require_task(task_id)?
            .labels
            .iter()
            .find(|label| label.id == label_id)
            .ok_or_else(|| StoreError::LabelNotFound {
                task_id: task_id.to_string(),
                label_id: label_id.to_string(),
            })
    }

    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Replaces the whole task list.
    pub fn set_tasks(&mut self, tasks: Vec<Task>) -> bool {
        if self.tasks() == tasks {
            return false;
        }

        self.tasks.clear();
        self.order.clear();
        for task in tasks {
            if self.tasks.contains_key(&task.id) {
                warn!(task_id = %task.id, "dropping task with duplicate id");
                continue;
            }
            self.order.push(task.id.clone());
            self.tasks.insert(task.id.clone(), task);
        }

        self.notify(StoreEvent::TasksChanged);
        true
    }

    /// Appends a task. Untitled tasks and reused ids are refused.
    pub fn add_task(&mut self, task: Task) -> bool {
        if !task.has_title() {
            debug!(task_id = %task.id, "refusing untitled task");
            return false;
        }
        if self.tasks.contains_key(&task.id) {
            debug!(task_id = %task.id, "refusing task with existing id");
            return false;
        }

        self.order.push(task.id.clone());
        self.tasks.insert(task.id.clone(), task);
        self.notify(StoreEvent::TasksChanged);
        true
    }

    /// Replaces the task with the same id.
    pub fn edit_task(&mut self, task: Task) -> bool {
        match self.tasks.get_mut(&task.id) {
            Some(current) if *current == task => false,
            Some(current) => {
                *current = task;
                self.notify(StoreEvent::TasksChanged);
                true
            }
            None => {
                debug!(task_id = %task.id, "edit of unknown task ignored");
                false
            }
        }
    }

    pub fn delete_task(&mut self, id: &str) -> bool {
        if self.tasks.remove(id).is_none() {
            debug!(task_id = %id, "delete of unknown task ignored");
            return false;
        }
        self.order.retain(|task_id| task_id != id);
        self.notify(StoreEvent::TasksChanged);
        true
    }

    /// Appends labels to a task, skipping ids the task already carries.
    pub fn add_labels(&mut self, task_id: &str, labels: Vec<Label>) -> bool {
        let Some(task) = self.tasks.get_mut(task_id) else {
            debug!(task_id = %task_id, "labels for unknown task ignored");
            return false;
        };

        let mut added = false;
        for label in labels {
            if task.labels.iter().any(|existing| existing.id == label.id) {
                debug!(task_id = %task_id, label_id = %label.id, "skipping duplicate label id");
                continue;
            }
            task.labels.push(label);
            added = true;
        }

        if added {
            self.notify(StoreEvent::TasksChanged);
        }
        added
    }

    pub fn delete_label(&mut self, task_id: &str, label_id: &str) -> bool {
        let Some(task) = self.tasks.get_mut(task_id) else {
            return false;
        };

        let before = task.labels.len();
        task.labels.retain(|label| label.id != label_id);
        if task.labels.len() == before {
            return false;
        }

        self.notify(StoreEvent::TasksChanged);
        true
    }

    /// Replaces the holiday list.
    pub fn set_holidays(&mut self, holidays: Vec<Holiday>) -> bool {
        if self.holidays == holidays {
            return false;
        }
        self.holidays = holidays;
        self.notify(StoreEvent::HolidaysChanged);
        true
    }
}

impl std::fmt::Debug for TaskStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskStore")
            .field("tasks", &self.tasks())
            .field("holidays", &self.holidays)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
