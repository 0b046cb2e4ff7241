//! Generator and time-helper properties.

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use sigurl_auth::generate::{generate_key, generate_token};
    use sigurl_core::{now_plus_days, now_plus_hours, now_plus_minutes};

    fn unix_now() -> i64 {
        i64::try_from(
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap()
                .as_secs(),
        )
        .unwrap()
    }

    #[test]
    fn test_should_generate_hex_tokens_and_keys() {
        let token = generate_token();
        let key = generate_key();
        assert_eq!(token.len(), 16);
        assert_eq!(key.len(), 32);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
        assert!(key.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_should_generate_distinct_tokens() {
        let tokens: HashSet<String> = (0..500).map(|_| generate_token()).collect();
        assert_eq!(tokens.len(), 500);
    }

    #[test]
    fn test_should_offset_current_time() {
        let before = unix_now();
        let minutes = now_plus_minutes(1);
        let hours = now_plus_hours(1);
        let days = now_plus_days(1);
        let after = unix_now();

        assert!((before + 60..=after + 60).contains(&minutes));
        assert!((before + 3600..=after + 3600).contains(&hours));
        assert!((before + 86_400..=after + 86_400).contains(&days));
    }
}
