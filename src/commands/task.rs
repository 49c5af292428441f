//! Task management command.
//!
//! Tasks are created and edited through a [`TaskDraft`], exactly like the
//! board's add and edit dialogs: labels are staged on the draft, an empty
//! title rejects the draft, and labels left without text are dropped.

use super::parse_date;
use crate::{
    libs::{
        board::Board,
        config::Config,
        draft::TaskDraft,
        grid::matches_search,
        messages::Message,
        task::{Label, LabelColor},
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    command: TaskCommand,
}

#[derive(Debug, Subcommand)]
enum TaskCommand {
    /// Create a task
    Add {
        /// Task title
        title: String,
        /// Day of the task: 'today' or YYYY-MM-DD
        #[arg(short, long, default_value = "today")]
        date: String,
        /// Label as TEXT or TEXT:COLOR (repeatable)
        #[arg(short, long = "label")]
        labels: Vec<String>,
    },
    /// Edit a task's title and labels
    Edit {
        /// Task ID
        id: String,
        /// New title
        #[arg(short, long)]
        title: Option<String>,
        /// Append a label as TEXT or TEXT:COLOR (repeatable)
        #[arg(short, long = "label")]
        labels: Vec<String>,
        /// Replace the text of the label at INDEX, as INDEX=TEXT (repeatable)
        #[arg(long = "set-label", value_name = "INDEX=TEXT")]
        set_labels: Vec<String>,
        /// Set the color of the label at INDEX, as INDEX=COLOR (repeatable)
        #[arg(long = "set-color", value_name = "INDEX=COLOR")]
        set_colors: Vec<String>,
        /// Remove the label at INDEX (repeatable)
        #[arg(short, long = "remove")]
        remove: Vec<usize>,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: String,
    },
    /// List tasks in board order
    List {
        /// Only tasks whose title or label text contains this
        #[arg(short, long)]
        search: Option<String>,
    },
}

pub fn cmd(args: TaskArgs) -> Result<()> {
    let mut board = Board::open()?;
    let default_color = Config::read()?.board_or_default().default_label_color;

    match args.command {
        TaskCommand::Add { title, date, labels } => handle_add(&mut board, &title, &date, &labels, default_color)?,
        TaskCommand::Edit {
            id,
            title,
            labels,
            set_labels,
            set_colors,
            remove,
        } => {
            let edits = DraftEdits {
                title,
                labels,
                set_labels,
                set_colors,
                remove,
            };
            handle_edit(&mut board, &id, edits, default_color)?
        }
        TaskCommand::Delete { id } => handle_delete(&mut board, &id),
        TaskCommand::List { search } => handle_list(&board, search.as_deref().unwrap_or(""))?,
    }

    board.save()?;
    Ok(())
}

/// Stages `TEXT[:COLOR]` label specs on the draft.
fn stage_labels(draft: &mut TaskDraft, specs: &[String], default_color: LabelColor) {
    for spec in specs {
        match Label::parse_spec(spec, default_color) {
            Some(label) => {
                let index = draft.add_label();
                draft.set_label_text(index, &label.text);
                draft.set_label_color(index, &label.color);
            }
            None => msg_warning!(Message::InvalidLabelSpec(spec.clone())),
        }
    }
}

fn handle_add(board: &mut Board, title: &str, date: &str, labels: &[String], default_color: LabelColor) -> Result<()> {
    let date = parse_date(date)?;

    let mut draft = TaskDraft::new(title).with_default_color(default_color);
    stage_labels(&mut draft, labels, default_color);

    let Some((task, labels)) = draft.into_new_task(date) else {
        msg_warning!(Message::TaskCreateRefused);
        return Ok(());
    };

    let task_id = task.id.clone();
    let store = board.store_mut();
    if store.add_task(task) && !labels.is_empty() {
        store.add_labels(&task_id, labels);
    }

    if let Some(task) = store.task(&task_id) {
        msg_success!(Message::TaskCreated(task.title.clone()));
        View::tasks(std::slice::from_ref(task))?;
    }
    Ok(())
}

struct DraftEdits {
    title: Option<String>,
    labels: Vec<String>,
    set_labels: Vec<String>,
    set_colors: Vec<String>,
    remove: Vec<usize>,
}

fn split_indexed(spec: &str) -> Option<(usize, &str)> {
    let (index, value) = spec.split_once('=')?;
    Some((index.trim().parse().ok()?, value))
}

fn handle_edit(board: &mut Board, id: &str, edits: DraftEdits, default_color: LabelColor) -> Result<()> {
    let task = match board.store().require_task(id) {
        Ok(task) => task.clone(),
        Err(_) => {
            msg_error!(Message::TaskNotFound(id.to_string()));
            return Ok(());
        }
    };

    let mut draft = TaskDraft::from_task(&task).with_default_color(default_color);
    if let Some(title) = &edits.title {
        draft.set_title(title);
    }
    for spec in &edits.set_labels {
        match split_indexed(spec) {
            Some((index, text)) => {
                draft.set_label_text(index, text);
            }
            None => msg_warning!(Message::InvalidLabelSpec(spec.clone())),
        }
    }
    for spec in &edits.set_colors {
        match split_indexed(spec).and_then(|(index, color)| LabelColor::parse(color).map(|color| (index, color))) {
            Some((index, color)) => {
                draft.set_label_color(index, color.hex());
            }
            None => msg_warning!(Message::UnknownLabelColor(spec.clone())),
        }
    }
    // Highest index first so earlier removals don't shift later ones.
    let mut remove = edits.remove.clone();
    remove.sort_unstable_by(|a, b| b.cmp(a));
    remove.dedup();
    for index in remove {
        draft.remove_label(index);
    }
    stage_labels(&mut draft, &edits.labels, default_color);

    let Some(edited) = draft.into_edited(&task) else {
        msg_warning!(Message::TaskUpdateRefused);
        return Ok(());
    };

    let title = edited.title.clone();
    if board.store_mut().edit_task(edited) {
        msg_success!(Message::TaskUpdated(title));
    } else {
        msg_info!(Message::TaskUnchanged(title));
    }
    Ok(())
}

fn handle_delete(board: &mut Board, id: &str) {
    if board.store_mut().delete_task(id) {
        msg_success!(Message::TaskDeleted(id.to_string()));
    } else {
        msg_error!(Message::TaskNotFound(id.to_string()));
    }
}

fn handle_list(board: &Board, search: &str) -> Result<()> {
    let tasks: Vec<_> = board.store().tasks().into_iter().filter(|task| matches_search(task, search)).collect();

    if tasks.is_empty() {
        if search.is_empty() {
            msg_info!(Message::NoTasks);
        } else {
            msg_info!(Message::NoTasksMatching(search.to_string()));
        }
        return Ok(());
    }

    msg_print!(Message::TasksHeader, true);
    View::tasks(&tasks)?;
    Ok(())
}
