use super::load_holidays;
use crate::{
    libs::{
        board::Board,
        grid::{Month, MonthGrid},
        messages::Message,
        view::View,
    },
    msg_error_anyhow, msg_print,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Month to show as YYYY-MM; defaults to the current month
    #[arg(short, long)]
    month: Option<String>,

    /// Only show tasks whose title or label text contains this
    #[arg(short, long, default_value = "")]
    search: String,

    /// Skip the public holiday lookup
    #[arg(long)]
    no_holidays: bool,
}

/// Resolves an optional `YYYY-MM` argument, defaulting to the current month.
pub(crate) fn resolve_month(month: Option<&str>) -> Result<Month> {
    match month {
        Some(value) => Month::parse(value).ok_or_else(|| msg_error_anyhow!(Message::InvalidMonth(value.to_string()))),
        None => Ok(Month::containing(Local::now().date_naive())),
    }
}

pub async fn cmd(args: ShowArgs) -> Result<()> {
    let month = resolve_month(args.month.as_deref())?;
    let mut board = Board::open()?;
    load_holidays(&mut board, args.no_holidays).await?;

    let store = board.store();
    let grid = MonthGrid::build(month, &store.tasks(), store.holidays(), &args.search);

    msg_print!(Message::GridHeader(month.to_string()), true);
    View::grid(&grid)?;

    board.save()?;
    Ok(())
}
