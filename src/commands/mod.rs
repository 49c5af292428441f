pub mod drag;
pub mod export;
pub mod holidays;
pub mod import;
pub mod init;
pub mod label;
pub mod show;
pub mod snapshot;
pub mod task;

use crate::api::holidays::{refresh_holidays, NagerClient};
use crate::libs::{board::Board, config::Config, messages::Message, task::parse_calendar_date};
use crate::{msg_debug, msg_error_anyhow};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Create, edit, delete and list tasks", arg_required_else_help = true)]
    Task(task::TaskArgs),
    #[command(about = "Add or remove task labels", arg_required_else_help = true)]
    Label(label::LabelArgs),
    #[command(about = "Move a task to another day or position")]
    Move(drag::MoveArgs),
    #[command(about = "Show the month grid")]
    Show(show::ShowArgs),
    #[command(about = "Replace the board with a calendar file")]
    Import(import::ImportArgs),
    #[command(about = "Export the board as a calendar file")]
    Export(export::ExportArgs),
    #[command(about = "Export the month grid as CSV or Excel")]
    Snapshot(snapshot::SnapshotArgs),
    #[command(about = "List upcoming public holidays")]
    Holidays,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Task(args) => task::cmd(args),
            Commands::Label(args) => label::cmd(args),
            Commands::Move(args) => drag::cmd(args),
            Commands::Show(args) => show::cmd(args).await,
            Commands::Import(args) => import::cmd(args),
            Commands::Export(args) => export::cmd(args),
            Commands::Snapshot(args) => snapshot::cmd(args).await,
            Commands::Holidays => holidays::cmd().await,
        }
    }
}

/// Parses `today` or `YYYY-MM-DD`.
pub(crate) fn parse_date(date_str: &str) -> Result<NaiveDate> {
    if date_str.eq_ignore_ascii_case("today") {
        return Ok(Local::now().date_naive());
    }
    parse_calendar_date(date_str).ok_or_else(|| msg_error_anyhow!(Message::InvalidDate(date_str.to_string())))
}

/// Loads holidays into the board's store unless disabled.
///
/// A failed fetch has already been reported by the time this returns and
/// the board simply has no holidays.
pub(crate) async fn load_holidays(board: &mut Board, skip: bool) -> Result<()> {
    if skip {
        return Ok(());
    }
    let config = Config::read()?.holidays_or_default();
    if !config.enabled {
        msg_debug!(Message::HolidaysDisabled);
        return Ok(());
    }
    let client = NagerClient::new(&config);
    refresh_holidays(&client, board.store_mut()).await;
    Ok(())
}
