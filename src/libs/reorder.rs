//! Drag-and-drop placement of tasks on the grid.
//!
//! A drag starts at a position inside one day cell and ends at a position
//! inside the same or another day cell. [`reorder`] applies such a gesture to
//! the full task list and returns the new list, or `None` when the gesture
//! leaves the board untouched (cancelled drag, stale task id, undecodable
//! destination).
//!
//! Moving within a day only changes the order of that day's tasks. Moving to
//! another day also rewrites the task's date to the destination day.

use super::date_key::DateKey;
use super::grid::group_by_date;
use super::task::Task;
use tracing::debug;

/// A position inside a day cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropLocation {
    pub date_key: DateKey,
    pub index: usize,
}

impl DropLocation {
    pub fn new(date_key: DateKey, index: usize) -> Self {
        DropLocation { date_key, index }
    }
}

/// The outcome of one drag gesture. `destination` is `None` when the task was
/// dropped outside any cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragResult {
    pub task_id: String,
    pub source: DropLocation,
    pub destination: Option<DropLocation>,
}

pub fn reorder(tasks: &[Task], drag: &DragResult) -> Option<Vec<Task>> {
    let Some(destination) = drag.destination else {
        debug!(task_id = %drag.task_id, "drag cancelled");
        return None;
    };

    let Some(dragged) = tasks.iter().find(|task| task.id == drag.task_id) else {
        debug!(task_id = %drag.task_id, "dragged task no longer exists");
        return None;
    };

    let mut groups = group_by_date(tasks);

    let source_group = groups.group_mut(&drag.source.date_key)?;
    let source_index = match source_group.get(drag.source.index) {
        Some(task) if task.id == drag.task_id => drag.source.index,
        _ => {
            let Some(index) = source_group.iter().position(|task| task.id == drag.task_id) else {
                debug!(task_id = %drag.task_id, source = %drag.source.date_key, "dragged task is not in the source cell");
                return None;
            };
            index
        }
    };

    if drag.source.date_key == destination.date_key {
        let task = source_group.remove(source_index);
        let index = destination.index.min(source_group.len());
        source_group.insert(index, task);
        return Some(groups.flatten());
    }

    let Some(date) = destination.date_key.to_date() else {
        debug!(destination = %destination.date_key, "destination key is not a calendar date");
        return None;
    };

    source_group.remove(source_index);

    let moved = Task {
        date,
        ..dragged.clone()
    };
    let destination_group = groups.entry(destination.date_key);
    let index = destination.index.min(destination_group.len());
    destination_group.insert(index, moved);

    Some(groups.flatten())
}
