use crate::{
    libs::{
        board::Board,
        calendar_file::{CalendarData, DEFAULT_EXPORT_FILE_NAME},
        messages::Message,
    },
    msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Destination file
    #[arg(default_value = DEFAULT_EXPORT_FILE_NAME)]
    file: PathBuf,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let board = Board::open()?;

    let data = CalendarData::new(board.store().tasks());
    data.write(&args.file)?;
    msg_success!(Message::ExportCompleted(data.tasks.len(), args.file.display().to_string()));

    board.save()?;
    Ok(())
}
