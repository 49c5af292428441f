//! Move command: the command-line form of dragging a task card.
//!
//! The drag starts at the task's current position in its day cell and ends
//! at `--index` in the cell for `--to`. Without `--to` the task stays on its
//! day and is only reordered; without `--index` it goes to the end of the
//! destination cell.

use super::parse_date;
use crate::{
    libs::{
        board::Board,
        date_key::DateKey,
        grid::group_by_date,
        messages::Message,
        reorder::{reorder, DragResult, DropLocation},
    },
    msg_error, msg_error_anyhow, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct MoveArgs {
    /// Task ID
    id: String,

    /// Destination day: 'today', YYYY-MM-DD or a date key like 2023/1/20
    #[arg(short, long)]
    to: Option<String>,

    /// Position inside the destination day, 0 being the top
    #[arg(short, long)]
    index: Option<usize>,
}

fn parse_destination(value: &str) -> Result<DateKey> {
    if value.contains('/') {
        return match DateKey::parse(value) {
            Some(key) if key.to_date().is_some() => Ok(key),
            _ => Err(msg_error_anyhow!(Message::InvalidDateKey(value.to_string()))),
        };
    }
    Ok(DateKey::from(parse_date(value)?))
}

pub fn cmd(args: MoveArgs) -> Result<()> {
    let mut board = Board::open()?;

    let task = match board.store().require_task(&args.id) {
        Ok(task) => task.clone(),
        Err(_) => {
            msg_error!(Message::TaskNotFound(args.id));
            return Ok(());
        }
    };

    let tasks = board.store().tasks();
    let source_key = DateKey::from(task.date);
    let source_index = group_by_date(&tasks)
        .group(&source_key)
        .iter()
        .position(|candidate| candidate.id == task.id)
        .unwrap_or_default();

    let destination_key = match &args.to {
        Some(to) => parse_destination(to)?,
        None => source_key,
    };

    let drag = DragResult {
        task_id: task.id.clone(),
        source: DropLocation::new(source_key, source_index),
        destination: Some(DropLocation::new(destination_key, args.index.unwrap_or(usize::MAX))),
    };

    let Some(reordered) = reorder(&tasks, &drag) else {
        msg_info!(Message::MoveNoop(task.id));
        return Ok(());
    };

    board.store_mut().set_tasks(reordered);

    let placed = group_by_date(&board.store().tasks())
        .group(&destination_key)
        .iter()
        .position(|candidate| candidate.id == task.id)
        .unwrap_or_default();
    if destination_key == source_key {
        msg_success!(Message::TaskReordered(task.title, placed));
    } else {
        let date = destination_key.to_date().map(|date| date.to_string()).unwrap_or_else(|| destination_key.to_string());
        msg_success!(Message::TaskMoved(task.title, date));
    }

    board.save()?;
    Ok(())
}
