//! Import command: replaces the whole board with a calendar file.
//!
//! A file that cannot be read or parsed is reported and the board is left
//! exactly as it was.

use crate::{
    libs::{board::Board, calendar_file::CalendarData, messages::Message},
    msg_error, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Calendar JSON file to import
    file: PathBuf,
}

pub fn cmd(args: ImportArgs) -> Result<()> {
    let mut board = Board::open()?;

    let data = match CalendarData::read(&args.file) {
        Ok(data) => data,
        Err(error) => {
            msg_error!(Message::ImportFailed(format!("{:#}", error)));
            return Ok(());
        }
    };

    board.store_mut().set_tasks(data.tasks);
    msg_success!(Message::ImportCompleted(board.store().len(), args.file.display().to_string()));

    board.save()?;
    Ok(())
}
