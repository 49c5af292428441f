//! Snapshot export of a rendered month grid.
//!
//! A snapshot captures the grid exactly as `calboard show` lays it out: one
//! row per Monday-to-Sunday week, one column per weekday. It is a picture of
//! the board for sharing, not a data format; use the JSON calendar file for
//! round-tripping tasks.
//!
//! ## Formats
//!
//! - **CSV**: plain text cells, holiday names and task titles on separate lines
//! - **Excel**: weekday header, wrapped cells, holiday cells filled red and
//!   days outside the month in grey
//!
//! ```rust,no_run
//! use calboard::libs::export::{GridExporter, GridFormat};
//! use calboard::libs::grid::{Month, MonthGrid};
//!
//! let month = Month::new(2023, 2).unwrap();
//! let grid = MonthGrid::build(month, &[], &[], "");
//! GridExporter::new(GridFormat::Excel, None, month).export(&grid)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::grid::{GridCell, Month, MonthGrid, DAYS_OF_WEEK};
use super::view::View;
use anyhow::Result;
use rust_xlsxwriter::{Color, Format, FormatAlign, Workbook};
use std::path::{Path, PathBuf};

const HOLIDAY_FILL: u32 = 0xEC8484;
const COLUMN_WIDTH: f64 = 24.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum GridFormat {
    /// Comma-separated values, one row per week.
    Csv,
    /// Excel workbook with a styled grid.
    Excel,
}

impl GridFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            GridFormat::Csv => "csv",
            GridFormat::Excel => "xlsx",
        }
    }
}

pub struct GridExporter {
    format: GridFormat,
    output_path: PathBuf,
}

impl GridExporter {
    /// Without an explicit path the file is named `calboard_<YYYY>_<MM>.<ext>`.
    pub fn new(format: GridFormat, output_path: Option<PathBuf>, month: Month) -> Self {
        let output_path = output_path
            .unwrap_or_else(|| PathBuf::from(format!("calboard_{}_{:02}.{}", month.year(), month.month(), format.extension())));

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn export(&self, grid: &MonthGrid) -> Result<()> {
        match self.format {
            GridFormat::Csv => self.export_csv(grid),
            GridFormat::Excel => self.export_excel(grid),
        }
    }

    fn export_csv(&self, grid: &MonthGrid) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(DAYS_OF_WEEK)?;

        for week in grid.weeks() {
            wtr.write_record(week.iter().map(View::cell_text))?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn export_excel(&self, grid: &MonthGrid) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(grid.month.to_string())?;

        let header_format = Format::new().set_bold().set_align(FormatAlign::Center).set_background_color(Color::Gray);
        let day_format = Format::new().set_text_wrap().set_align(FormatAlign::Top);
        let outside_format = day_format.clone().set_font_color(Color::Gray);
        let holiday_format = day_format.clone().set_background_color(Color::RGB(HOLIDAY_FILL));

        for (col, day) in DAYS_OF_WEEK.iter().enumerate() {
            worksheet.set_column_width(col as u16, COLUMN_WIDTH)?;
            worksheet.write_string_with_format(0, col as u16, *day, &header_format)?;
        }

        for (week_index, week) in grid.weeks().enumerate() {
            let row = week_index as u32 + 1;
            for (col, cell) in week.iter().enumerate() {
                let format = Self::cell_format(cell, &day_format, &outside_format, &holiday_format);
                worksheet.write_string_with_format(row, col as u16, View::cell_text(cell), format)?;
            }
        }

        workbook.save(&self.output_path)?;
        Ok(())
    }

    fn cell_format<'a>(cell: &GridCell, day: &'a Format, outside: &'a Format, holiday: &'a Format) -> &'a Format {
        if cell.holiday.is_some() {
            holiday
        } else if !cell.is_current_month {
            outside
        } else {
            day
        }
    }
}
