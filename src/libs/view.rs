use super::date_key::DateKey;
use super::grid::{GridCell, MonthGrid, DAYS_OF_WEEK};
use super::task::{Holiday, Task};
use anyhow::Result;
use prettytable::{format, row, Cell, Row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "DATE", "KEY", "TITLE", "LABELS"]);
        for task in tasks {
            table.add_row(row![task.id, task.date.format("%Y-%m-%d"), DateKey::from(task.date), task.title, Self::labels(task)]);
        }
        table.printstd();

        Ok(())
    }

    pub fn holidays(holidays: &[Holiday]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["DATE", "KEY", "NAME"]);
        for holiday in holidays {
            table.add_row(row![holiday.date.format("%Y-%m-%d"), DateKey::from(holiday.date), holiday.name]);
        }
        table.printstd();

        Ok(())
    }

    pub fn grid(grid: &MonthGrid) -> Result<()> {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        table.set_titles(Row::new(DAYS_OF_WEEK.iter().map(|day| Cell::new(day)).collect()));
        for week in grid.weeks() {
            table.add_row(Row::new(week.iter().map(|cell| Cell::new(&Self::cell_text(cell))).collect()));
        }
        table.printstd();

        Ok(())
    }

    /// Text of one day cell: day number (dimmed with `·` outside the month),
    /// holiday name and one line per task.
    pub fn cell_text(cell: &GridCell) -> String {
        let mut lines = Vec::with_capacity(cell.tasks.len() + 2);
        if cell.is_current_month {
            lines.push(cell.day.to_string());
        } else {
            lines.push(format!("·{}", cell.day));
        }
        if let Some(holiday) = &cell.holiday {
            lines.push(format!("★ {}", holiday.name));
        }
        for (index, task) in cell.tasks.iter().enumerate() {
            let labels = Self::labels(task);
            if labels.is_empty() {
                lines.push(format!("{}. {}", index, task.title));
            } else {
                lines.push(format!("{}. {} [{}]", index, task.title, labels));
            }
        }
        lines.join("\n")
    }

    fn labels(task: &Task) -> String {
        task.labels.iter().map(|label| label.text.as_str()).collect::<Vec<_>>().join(", ")
    }
}
