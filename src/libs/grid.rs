//! Date grouping and month layout for the board.
//!
//! [`group_by_date`] partitions a flat task list into per-day groups keyed by
//! [`DateKey`]; the relative order of tasks inside each group is the order in
//! which they appear in the input, which is the order shown in a day cell and
//! used by drag positions. [`MonthGrid`] lays a month out as Monday-first
//! weeks, padding with days from the neighbouring months.

use super::date_key::DateKey;
use super::task::{Holiday, Task};
use chrono::{Datelike, Days, Months, NaiveDate};
use std::collections::HashMap;
use std::fmt;

pub const DAYS_OF_WEEK: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Tasks grouped by day, groups kept in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskGroups {
    keys: Vec<DateKey>,
    groups: HashMap<DateKey, Vec<Task>>,
}

impl TaskGroups {
    pub fn keys(&self) -> &[DateKey] {
        &self.keys
    }

    /// Tasks on the given day; empty when the day has none.
    pub fn group(&self, key: &DateKey) -> &[Task] {
        self.groups.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn group_mut(&mut self, key: &DateKey) -> Option<&mut Vec<Task>> {
        self.groups.get_mut(key)
    }

    /// The group for `key`, created empty if the day has no tasks yet.
    pub fn entry(&mut self, key: DateKey) -> &mut Vec<Task> {
        if !self.groups.contains_key(&key) {
            self.keys.push(key);
        }
        self.groups.entry(key).or_default()
    }

    pub fn task_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn flatten(mut self) -> Vec<Task> {
        let mut tasks = Vec::with_capacity(self.task_count());
        for key in &self.keys {
            if let Some(group) = self.groups.remove(key) {
                tasks.extend(group);
            }
        }
        tasks
    }
}

pub fn group_by_date(tasks: &[Task]) -> TaskGroups {
    let mut groups = TaskGroups::default();
    for task in tasks {
        groups.entry(DateKey::from(task.date)).push(task.clone());
    }
    groups
}

/// Case-insensitive match on the title or any label text.
pub fn matches_search(task: &Task, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    task.title.to_lowercase().contains(&query) || task.labels.iter().any(|label| label.text.to_lowercase().contains(&query))
}

/// A calendar month, the unit the grid is navigated by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Month {
    first_day: NaiveDate,
}

impl Month {
    /// `month` is one-based.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first_day| Month { first_day })
    }

    pub fn containing(date: NaiveDate) -> Self {
        Month {
            first_day: date.with_day(1).unwrap_or(date),
        }
    }

    /// Parses `YYYY-MM`.
    pub fn parse(value: &str) -> Option<Self> {
        let (year, month) = value.trim().split_once('-')?;
        Month::new(year.parse().ok()?, month.parse().ok()?)
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    pub fn last_day(&self) -> NaiveDate {
        self.first_day
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(NaiveDate::MAX)
    }

    pub fn days(&self) -> u32 {
        self.last_day().day()
    }

    pub fn previous(&self) -> Self {
        Month {
            first_day: self.first_day.checked_sub_months(Months::new(1)).unwrap_or(self.first_day),
        }
    }

    pub fn next(&self) -> Self {
        Month {
            first_day: self.first_day.checked_add_months(Months::new(1)).unwrap_or(self.first_day),
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first_day.format("%B %Y"))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridCell {
    pub date: NaiveDate,
    pub key: DateKey,
    pub day: u32,
    pub is_current_month: bool,
    pub holiday: Option<Holiday>,
    pub tasks: Vec<Task>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthGrid {
    pub month: Month,
    pub cells: Vec<GridCell>,
}

impl MonthGrid {
    /// Lays out `month` as whole Monday-to-Sunday weeks.
    ///
    /// Only tasks matching `search` are placed in cells; a holiday marks the
    /// cell whose date key it shares.
    pub fn build(month: Month, tasks: &[Task], holidays: &[Holiday], search: &str) -> Self {
        let visible: Vec<Task> = tasks.iter().filter(|task| matches_search(task, search)).cloned().collect();
        let groups = group_by_date(&visible);
        let holidays: HashMap<DateKey, &Holiday> = holidays.iter().map(|holiday| (DateKey::from(holiday.date), holiday)).collect();

        let leading = month.first_day().weekday().num_days_from_monday() as u64;
        let trailing = 6 - month.last_day().weekday().num_days_from_monday() as u64;
        let first = month.first_day();
        let total = leading + month.days() as u64 + trailing;

        // Padding days past either end of the calendar range are left out.
        let cells = (0..total)
            .filter_map(|offset| match offset.checked_sub(leading) {
                Some(after) => first.checked_add_days(Days::new(after)),
                None => first.checked_sub_days(Days::new(leading - offset)),
            })
            .map(|date| {
                let key = DateKey::from(date);
                GridCell {
                    date,
                    key,
                    day: date.day(),
                    is_current_month: date.month() == month.month() && date.year() == month.year(),
                    holiday: holidays.get(&key).map(|holiday| (*holiday).clone()),
                    tasks: groups.group(&key).to_vec(),
                }
            })
            .collect();

        MonthGrid { month, cells }
    }

    pub fn weeks(&self) -> impl Iterator<Item = &[GridCell]> {
        self.cells.chunks(7)
    }

    pub fn cell(&self, date: NaiveDate) -> Option<&GridCell> {
        self.cells.iter().find(|cell| cell.date == date)
    }
}
