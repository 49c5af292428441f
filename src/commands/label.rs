use crate::{
    libs::{
        board::Board,
        config::Config,
        messages::Message,
        store::StoreError,
        task::Label,
    },
    msg_error, msg_info, msg_success, msg_warning,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct LabelArgs {
    #[command(subcommand)]
    command: LabelCommand,
}

#[derive(Debug, Subcommand)]
enum LabelCommand {
    /// Attach labels to a task
    Add {
        /// Task ID
        task_id: String,
        /// Labels as TEXT or TEXT:COLOR
        #[arg(required = true)]
        labels: Vec<String>,
    },
    /// Remove a label from a task
    Delete {
        /// Task ID
        task_id: String,
        /// Label ID
        label_id: String,
    },
}

pub fn cmd(args: LabelArgs) -> Result<()> {
    let mut board = Board::open()?;

    match args.command {
        LabelCommand::Add { task_id, labels } => {
            let default_color = Config::read()?.board_or_default().default_label_color;
            let labels: Vec<Label> = labels
                .iter()
                .filter_map(|spec| {
                    let label = Label::parse_spec(spec, default_color);
                    if label.is_none() {
                        msg_warning!(Message::InvalidLabelSpec(spec.clone()));
                    }
                    label
                })
                .collect();
            handle_add(&mut board, &task_id, labels);
        }
        LabelCommand::Delete { task_id, label_id } => handle_delete(&mut board, &task_id, &label_id),
    }

    board.save()?;
    Ok(())
}

fn handle_add(board: &mut Board, task_id: &str, labels: Vec<Label>) {
    let title = match board.store().require_task(task_id) {
        Ok(task) => task.title.clone(),
        Err(_) => {
            msg_error!(Message::TaskNotFound(task_id.to_string()));
            return;
        }
    };

    let count = labels.len();
    if board.store_mut().add_labels(task_id, labels) {
        msg_success!(Message::LabelsAdded(count, title));
    } else {
        msg_info!(Message::LabelsNotAdded(title));
    }
}

fn handle_delete(board: &mut Board, task_id: &str, label_id: &str) {
    match board.store().require_label(task_id, label_id) {
        Ok(_) => {
            board.store_mut().delete_label(task_id, label_id);
            msg_success!(Message::LabelDeleted(label_id.to_string()));
        }
        Err(StoreError::TaskNotFound(id)) => msg_error!(Message::TaskNotFound(id)),
        Err(StoreError::LabelNotFound { task_id, label_id }) => msg_error!(Message::LabelNotFound(task_id, label_id)),
    }
}
