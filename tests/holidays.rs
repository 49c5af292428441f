#[cfg(test)]
mod tests {
    use anyhow::Result;
    use calboard::api::holidays::{parse_holidays, refresh_holidays, HolidaySource};
    use calboard::libs::store::TaskStore;
    use calboard::libs::task::Holiday;
    use chrono::NaiveDate;

    struct FixedSource {
        holidays: Vec<Holiday>,
    }

    impl HolidaySource for FixedSource {
        async fn fetch(&self) -> Result<Vec<Holiday>> {
            Ok(self.holidays.clone())
        }
    }

    struct FailingSource;

    impl HolidaySource for FailingSource {
        async fn fetch(&self) -> Result<Vec<Holiday>> {
            anyhow::bail!("service unavailable")
        }
    }

    fn holiday(month: u32, day: u32, name: &str) -> Holiday {
        Holiday {
            date: NaiveDate::from_ymd_opt(2023, month, day).unwrap(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_parse_ignores_extra_fields() {
        let body = r#"[
            {"date":"2023-12-25","localName":"Weihnachten","name":"Christmas Day","countryCode":"DE","global":true},
            {"date":"2023-12-26","localName":"Stephanstag","name":"St. Stephen's Day","countryCode":"DE"}
        ]"#;
        let holidays = parse_holidays(body).unwrap();
        assert_eq!(holidays, vec![holiday(12, 25, "Christmas Day"), holiday(12, 26, "St. Stephen's Day")]);
    }

    #[test]
    fn test_parse_skips_unreadable_dates() {
        let holidays = parse_holidays(r#"[{"date":"soon","name":"Mystery"},{"date":"2023-01-01","name":"New Year"}]"#).unwrap();
        assert_eq!(holidays, vec![holiday(1, 1, "New Year")]);
        assert!(parse_holidays("<html>").is_err());
    }

    #[tokio::test]
    async fn test_refresh_replaces_holidays() {
        let mut store = TaskStore::new();
        store.set_holidays(vec![holiday(1, 1, "Stale")]);
        let source = FixedSource {
            holidays: vec![holiday(5, 1, "Labour Day"), holiday(12, 25, "Christmas Day")],
        };

        assert_eq!(refresh_holidays(&source, &mut store).await, Some(2));
        assert_eq!(store.holidays(), source.holidays.as_slice());
    }

    #[tokio::test]
    async fn test_failed_fetch_leaves_holidays_unchanged() {
        let mut store = TaskStore::new();
        let existing = vec![holiday(1, 1, "New Year")];
        store.set_holidays(existing.clone());

        assert_eq!(refresh_holidays(&FailingSource, &mut store).await, None);
        assert_eq!(store.holidays(), existing.as_slice());
    }
}
