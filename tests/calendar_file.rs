#[cfg(test)]
mod tests {
    use calboard::libs::board::sample_tasks;
    use calboard::libs::calendar_file::CalendarData;
    use calboard::libs::store::TaskStore;
    use chrono::NaiveDate;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct FileTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for FileTestContext {
        fn setup() -> Self {
            FileTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    #[test]
    fn test_empty_board_round_trips() {
        let data = CalendarData::from_json(r#"{"tasks":[]}"#).unwrap();
        let store = TaskStore::with_tasks(data.tasks);
        let exported = CalendarData::new(store.tasks()).to_json().unwrap();
        assert_eq!(exported, r#"{"tasks":[]}"#);
    }

    #[test]
    fn test_malformed_input_is_an_error() {
        assert!(CalendarData::from_json("not json").is_err());
        assert!(CalendarData::from_json(r#"{"items":[]}"#).is_err());
        assert!(CalendarData::from_json(r#"{"tasks":[{"id":"1","title":"x","date":"someday"}]}"#).is_err());
    }

    #[test]
    fn test_timestamp_dates_import_as_calendar_dates() {
        let json = r##"{"tasks":[{"id":"1","title":"Task 1","date":"2023-02-15T12:00:00.000Z","labels":[{"id":"1","text":"Label 1","color":"#FF0000"}]}]}"##;
        let data = CalendarData::from_json(json).unwrap();
        assert_eq!(data.tasks[0].date, NaiveDate::from_ymd_opt(2023, 2, 15).unwrap());
        assert_eq!(data.tasks[0].labels[0].color, "#FF0000");
    }

    #[test_context(FileTestContext)]
    #[test]
    fn test_write_then_read(ctx: &mut FileTestContext) {
        let path = ctx.temp_dir.path().join("nested").join("calendar.json");
        let data = CalendarData::new(sample_tasks());
        data.write(&path).unwrap();

        let read = CalendarData::read(&path).unwrap();
        assert_eq!(read, data);
    }

    #[test_context(FileTestContext)]
    #[test]
    fn test_failed_import_leaves_store_intact(ctx: &mut FileTestContext) {
        let path = ctx.temp_dir.path().join("broken.json");
        std::fs::write(&path, "{\"tasks\": [").unwrap();

        let mut store = TaskStore::with_tasks(sample_tasks());
        let before = store.tasks();
        if let Ok(data) = CalendarData::read(&path) {
            store.set_tasks(data.tasks);
        }
        assert_eq!(store.tasks(), before);
        assert!(CalendarData::read(&ctx.temp_dir.path().join("missing.json")).is_err());
    }
}
