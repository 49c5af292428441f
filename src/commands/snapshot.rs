use super::{load_holidays, show::resolve_month};
use crate::{
    libs::{
        board::Board,
        export::{GridExporter, GridFormat},
        grid::MonthGrid,
        messages::Message,
    },
    msg_error, msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct SnapshotArgs {
    /// Output format of the snapshot
    #[arg(short, long, value_enum, default_value = "excel")]
    format: GridFormat,

    /// Output file; defaults to calboard_<YYYY>_<MM>.<ext>
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Month to capture as YYYY-MM; defaults to the current month
    #[arg(short, long)]
    month: Option<String>,

    /// Only include tasks whose title or label text contains this
    #[arg(short, long, default_value = "")]
    search: String,

    /// Skip the public holiday lookup
    #[arg(long)]
    no_holidays: bool,
}

pub async fn cmd(args: SnapshotArgs) -> Result<()> {
    let month = resolve_month(args.month.as_deref())?;
    let mut board = Board::open()?;
    load_holidays(&mut board, args.no_holidays).await?;

    let store = board.store();
    let grid = MonthGrid::build(month, &store.tasks(), store.holidays(), &args.search);

    let exporter = GridExporter::new(args.format, args.output, month);
    match exporter.export(&grid) {
        Ok(()) => msg_success!(Message::SnapshotCompleted(exporter.output_path().display().to_string())),
        Err(error) => msg_error!(Message::SnapshotFailed(error.to_string())),
    }

    board.save()?;
    Ok(())
}
