#[cfg(test)]
mod tests {
    use calboard::libs::board::sample_tasks;
    use calboard::libs::date_key::DateKey;
    use calboard::libs::grid::{group_by_date, matches_search, Month, MonthGrid};
    use calboard::libs::task::{Holiday, Label, LabelColor, Task};
    use chrono::{Datelike, NaiveDate, Weekday};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn ids(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|task| task.id.as_str()).collect()
    }

    #[test]
    fn test_group_then_flatten_is_permutation() {
        let tasks = sample_tasks();
        let flattened = group_by_date(&tasks).flatten();

        let mut expected = ids(&tasks);
        let mut actual = ids(&flattened);
        expected.sort();
        actual.sort();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_groups_preserve_relative_order() {
        let mut tasks = sample_tasks();
        tasks.swap(2, 4);
        let groups = group_by_date(&tasks);

        assert_eq!(ids(groups.group(&DateKey::new(2023, 1, 25))), vec!["5", "4", "3"]);
        assert_eq!(ids(groups.group(&DateKey::new(2023, 1, 15))), vec!["1"]);
        assert!(groups.group(&DateKey::new(2023, 1, 16)).is_empty());
        assert_eq!(groups.task_count(), 5);
    }

    #[test]
    fn test_flatten_orders_groups_by_first_appearance() {
        let tasks = vec![
            Task::new("late", date(2023, 3, 9)),
            Task::new("early", date(2023, 3, 1)),
            Task::new("late again", date(2023, 3, 9)),
        ];
        let flattened = group_by_date(&tasks).flatten();
        let titles: Vec<_> = flattened.iter().map(|task| task.title.as_str()).collect();
        assert_eq!(titles, vec!["late", "late again", "early"]);
    }

    #[test]
    fn test_search_matches_title_and_label_text() {
        let mut task = Task::new("Quarterly Review", date(2023, 2, 1));
        task.labels.push(Label::new("Finance", LabelColor::Green));

        assert!(matches_search(&task, ""));
        assert!(matches_search(&task, "review"));
        assert!(matches_search(&task, "FIN"));
        assert!(!matches_search(&task, "holiday"));
    }

    #[test]
    fn test_month_navigation() {
        let month = Month::parse("2023-01").unwrap();
        assert_eq!(month.previous(), Month::new(2022, 12).unwrap());
        assert_eq!(month.next(), Month::new(2023, 2).unwrap());
        assert_eq!(month.next().days(), 28);
        assert_eq!(month.to_string(), "January 2023");
        assert!(Month::parse("2023-13").is_none());
        assert!(Month::parse("January").is_none());
    }

    #[test]
    fn test_last_representable_month() {
        let month = Month::containing(NaiveDate::MAX);
        assert_eq!(month.last_day(), NaiveDate::MAX);
        assert_eq!(month.days(), 31);

        let grid = MonthGrid::build(month, &[], &[], "");
        assert_eq!(grid.cells.iter().filter(|cell| cell.is_current_month).count(), 31);
        assert_eq!(grid.cells.last().unwrap().date, NaiveDate::MAX);
    }

    #[test]
    fn test_february_2023_layout() {
        // 1 Feb 2023 is a Wednesday, 28 Feb a Tuesday.
        let month = Month::new(2023, 2).unwrap();
        let grid = MonthGrid::build(month, &sample_tasks(), &[], "");

        assert_eq!(grid.cells.len(), 35);
        assert_eq!(grid.cells[0].date, date(2023, 1, 30));
        assert_eq!(grid.cells[0].date.weekday(), Weekday::Mon);
        assert!(!grid.cells[1].is_current_month);
        assert_eq!(grid.cells[2].date, date(2023, 2, 1));
        assert!(grid.cells[2].is_current_month);
        assert_eq!(grid.cells[34].date, date(2023, 3, 5));
        assert_eq!(grid.cells.iter().filter(|cell| cell.is_current_month).count(), 28);
        assert_eq!(grid.weeks().count(), 5);
    }

    #[test]
    fn test_month_ending_on_sunday_has_no_trailing_week() {
        // April 2023 ends on Sunday the 30th.
        let grid = MonthGrid::build(Month::new(2023, 4).unwrap(), &[], &[], "");
        assert_eq!(grid.cells.last().unwrap().date, date(2023, 4, 30));
        assert_eq!(grid.cells.len() % 7, 0);
    }

    #[test]
    fn test_cells_carry_tasks_and_holidays() {
        let holidays = vec![Holiday {
            date: date(2023, 2, 20),
            name: "Carnival".to_string(),
        }];
        let grid = MonthGrid::build(Month::new(2023, 2).unwrap(), &sample_tasks(), &holidays, "");

        let cell = grid.cell(date(2023, 2, 25)).unwrap();
        assert_eq!(ids(&cell.tasks), vec!["3", "4", "5"]);
        assert_eq!(grid.cell(date(2023, 2, 20)).unwrap().holiday.as_ref().unwrap().name, "Carnival");
        assert!(grid.cell(date(2023, 2, 21)).unwrap().holiday.is_none());
    }

    #[test]
    fn test_search_filters_cells() {
        let grid = MonthGrid::build(Month::new(2023, 2).unwrap(), &sample_tasks(), &[], "label 3");

        let placed: Vec<_> = grid.cells.iter().flat_map(|cell| cell.tasks.iter()).map(|task| task.id.as_str()).collect();
        assert_eq!(placed, vec!["2"]);
    }
}
