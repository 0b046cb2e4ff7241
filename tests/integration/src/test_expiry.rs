//! Expiry window scenarios.

#[cfg(test)]
mod tests {
    use sigurl_auth::{AuthError, ValidationOutcome};
    use sigurl_core::{Clock, FixedClock, SigUrlConfig};

    use crate::{NOW, TEST_KEY, pair_at, test_url, verifier_at};

    #[test]
    fn test_should_stay_valid_until_the_last_second() {
        let (signer, _) = pair_at(NOW, &SigUrlConfig::default());
        let expires = FixedClock::new(NOW).now_plus_minutes(5);
        let signed = signer.sign(&test_url(), expires, TEST_KEY).unwrap();

        assert!(verifier_at(NOW).validate(&signed, &[TEST_KEY]).unwrap().is_valid());
        assert!(verifier_at(expires - 1).validate(&signed, &[TEST_KEY]).unwrap().is_valid());
        assert_eq!(
            verifier_at(expires).validate(&signed, &[TEST_KEY]).unwrap(),
            ValidationOutcome::Invalid
        );
        assert_eq!(
            verifier_at(expires + 86_400).validate(&signed, &[TEST_KEY]).unwrap(),
            ValidationOutcome::Invalid
        );
    }

    #[test]
    fn test_should_reject_expired_and_tampered_urls_alike() {
        let (signer, _) = pair_at(NOW, &SigUrlConfig::default());
        let signed = signer.sign(&test_url(), NOW + 60, TEST_KEY).unwrap();

        let expired = verifier_at(NOW + 120).validate(&signed, &[TEST_KEY]).unwrap();
        let tampered = verifier_at(NOW)
            .validate(&signed.replace("test.com", "test.org"), &[TEST_KEY])
            .unwrap();
        let wrong_key = verifier_at(NOW)
            .validate(&signed, &["SOME-OTHER-KEY-0000000000000000000"])
            .unwrap();

        assert_eq!(expired, tampered);
        assert_eq!(tampered, wrong_key);
    }

    #[test]
    fn test_should_cap_expiry_at_seven_days_by_default() {
        let (signer, _) = pair_at(NOW, &SigUrlConfig::default());
        let clock = FixedClock::new(NOW);

        assert!(signer.sign(&test_url(), clock.now_plus_days(7), TEST_KEY).is_ok());
        assert!(matches!(
            signer.sign(&test_url(), clock.now_plus_days(7) + 1, TEST_KEY),
            Err(AuthError::ExpiryTooFar { .. })
        ));
    }

    #[test]
    fn test_should_allow_overriding_the_window() {
        let config = SigUrlConfig {
            max_active_duration_hours: 24 * 30,
            ..SigUrlConfig::default()
        };
        let (signer, verifier) = pair_at(NOW, &config);
        let expires = FixedClock::new(NOW).now_plus_days(30);

        let signed = signer.sign(&test_url(), expires, TEST_KEY).unwrap();
        assert!(verifier.validate(&signed, &[TEST_KEY]).unwrap().is_valid());
    }
}
