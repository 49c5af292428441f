#[cfg(test)]
mod tests {
    use calboard::libs::date_key::DateKey;
    use chrono::NaiveDate;

    #[test]
    fn test_key_uses_zero_based_month() {
        let date = NaiveDate::from_ymd_opt(2023, 2, 15).unwrap();
        let key = DateKey::from(date);
        assert_eq!(key, DateKey::new(2023, 1, 15));
        assert_eq!(key.to_string(), "2023/1/15");
    }

    #[test]
    fn test_key_has_no_padding() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(DateKey::from(date).to_string(), "2024/0/5");
    }

    #[test]
    fn test_parse_textual_form() {
        assert_eq!(DateKey::parse("2023/1/20"), Some(DateKey::new(2023, 1, 20)));
        assert_eq!("2023/11/30".parse::<DateKey>().unwrap(), DateKey::new(2023, 11, 30));
    }

    #[test]
    fn test_parse_rejects_malformed_text() {
        assert_eq!(DateKey::parse(""), None);
        assert_eq!(DateKey::parse("2023/1"), None);
        assert_eq!(DateKey::parse("2023/1/15/2"), None);
        assert_eq!(DateKey::parse("2023-01-15"), None);
        assert_eq!(DateKey::parse("2023/x/15"), None);
        assert!("nope".parse::<DateKey>().is_err());
    }

    #[test]
    fn test_to_date_round_trips() {
        let date = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        assert_eq!(DateKey::from(date).to_date(), Some(date));
    }

    #[test]
    fn test_to_date_rejects_impossible_dates() {
        assert_eq!(DateKey::new(2023, 1, 30).to_date(), None);
        assert_eq!(DateKey::new(2023, 12, 1).to_date(), None);
        assert_eq!(DateKey::new(2024, 1, 29).to_date(), NaiveDate::from_ymd_opt(2024, 2, 29));
    }

    #[test]
    fn test_to_date_rejects_out_of_range_month() {
        let key = DateKey::parse("2023/4294967295/20").unwrap();
        assert_eq!(key.month, u32::MAX);
        assert_eq!(key.to_date(), None);
    }

    #[test]
    fn test_keys_order_chronologically() {
        let mut keys = vec![DateKey::new(2023, 1, 20), DateKey::new(2022, 11, 31), DateKey::new(2023, 1, 3)];
        keys.sort();
        assert_eq!(keys, vec![DateKey::new(2022, 11, 31), DateKey::new(2023, 1, 3), DateKey::new(2023, 1, 20)]);
    }
}
