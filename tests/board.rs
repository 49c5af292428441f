#[cfg(test)]
mod tests {
    use calboard::libs::board::{sample_tasks, Board, BOARD_FILE_NAME};
    use calboard::libs::calendar_file::CalendarData;
    use calboard::libs::task::Task;
    use chrono::NaiveDate;
    use std::path::PathBuf;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    // Tests in this file share HOME, so they take turns.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct BoardTestContext {
        _temp_dir: TempDir,
        path: PathBuf,
        _env: MutexGuard<'static, ()>,
    }

    impl TestContext for BoardTestContext {
        fn setup() -> Self {
            let env = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            let path = temp_dir.path().join(BOARD_FILE_NAME);
            BoardTestContext {
                _env: env,
                _temp_dir: temp_dir,
                path,
            }
        }
    }

    #[test_context(BoardTestContext)]
    #[test]
    fn test_missing_file_seeds_sample_board(ctx: &mut BoardTestContext) {
        let board = Board::open_at(&ctx.path).unwrap();
        assert_eq!(board.store().tasks(), sample_tasks());
        assert!(board.is_dirty());

        assert!(board.save().unwrap());
        assert!(ctx.path.exists());
        assert!(!board.is_dirty());
    }

    #[test_context(BoardTestContext)]
    #[test]
    fn test_unchanged_board_is_not_rewritten(ctx: &mut BoardTestContext) {
        CalendarData::new(sample_tasks()).write(&ctx.path).unwrap();

        let board = Board::open_at(&ctx.path).unwrap();
        assert!(!board.is_dirty());
        assert!(!board.save().unwrap());
    }

    #[test_context(BoardTestContext)]
    #[test]
    fn test_mutations_persist(ctx: &mut BoardTestContext) {
        CalendarData::new(Vec::new()).write(&ctx.path).unwrap();

        let mut board = Board::open_at(&ctx.path).unwrap();
        let task = Task::new("Persist me", NaiveDate::from_ymd_opt(2023, 3, 1).unwrap());
        let id = task.id.clone();
        assert!(board.store_mut().add_task(task));
        assert!(board.is_dirty());
        board.save().unwrap();

        let reopened = Board::open_at(&ctx.path).unwrap();
        assert_eq!(reopened.store().task(&id).unwrap().title, "Persist me");
    }

    #[test_context(BoardTestContext)]
    #[test]
    fn test_noop_mutation_keeps_board_clean(ctx: &mut BoardTestContext) {
        CalendarData::new(sample_tasks()).write(&ctx.path).unwrap();

        let mut board = Board::open_at(&ctx.path).unwrap();
        board.store_mut().delete_task("missing");
        board.store_mut().set_holidays(Vec::new());
        assert!(!board.is_dirty());
    }

    #[test_context(BoardTestContext)]
    #[test]
    fn test_open_uses_data_directory(_ctx: &mut BoardTestContext) {
        let board = Board::open().unwrap();
        assert!(board.path().ends_with(BOARD_FILE_NAME));
        assert_eq!(board.store().len(), 5);
    }
}
