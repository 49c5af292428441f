//! # Calboard - Calendar Task Board
//!
//! A command-line calendar board: tasks sit in the day cells of a month
//! grid, carry colored labels and are moved between days the way cards are
//! dragged on a board.
//!
//! ## Features
//!
//! - **Task Store**: Single source of truth with change notifications
//! - **Month Grid**: Monday-first weeks, search filter, public holidays
//! - **Drag and Drop**: Reorder within a day or move tasks across days
//! - **Import/Export**: JSON calendar files and CSV/Excel grid snapshots
//!
//! ## Usage
//!
//! ```rust,no_run
//! use calboard::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
