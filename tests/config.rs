#[cfg(test)]
mod tests {
    use calboard::libs::config::{BoardConfig, Config, HolidaysConfig, DEFAULT_HOLIDAYS_API_URL};
    use calboard::libs::task::LabelColor;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    // Tests in this file share HOME, so they take turns.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Points the data directory at a fresh temporary directory.
    struct ConfigTestContext {
        _temp_dir: TempDir,
        api_url: String,
        _env: MutexGuard<'static, ()>,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let env = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext {
                _env: env,
                _temp_dir: temp_dir,
                api_url: "https://holidays.example.com/api".to_string(),
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert_eq!(config, Config::default());

        let holidays = config.holidays_or_default();
        assert!(holidays.enabled);
        assert_eq!(holidays.api_url, DEFAULT_HOLIDAYS_API_URL);
        assert_eq!(config.board_or_default().default_label_color, LabelColor::Blue);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let config = Config {
            holidays: Some(HolidaysConfig {
                enabled: false,
                api_url: ctx.api_url.clone(),
            }),
            board: Some(BoardConfig {
                default_label_color: LabelColor::Red,
            }),
        };
        config.save().unwrap();

        let read_config = Config::read().unwrap();
        assert_eq!(read_config, config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_config_uses_defaults(_ctx: &mut ConfigTestContext) {
        let config = Config {
            holidays: None,
            board: Some(BoardConfig::default()),
        };
        config.save().unwrap();

        let read_config = Config::read().unwrap();
        assert!(read_config.holidays.is_none());
        assert_eq!(read_config.holidays_or_default(), HolidaysConfig::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_delete_config(_ctx: &mut ConfigTestContext) {
        assert!(!Config::delete().unwrap());
        Config::default().save().unwrap();
        assert!(Config::delete().unwrap());
        assert!(!Config::delete().unwrap());
    }
}
