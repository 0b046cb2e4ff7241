//! Sign-then-validate scenarios.

#[cfg(test)]
mod tests {
    use sigurl_auth::generate::generate_token;
    use sigurl_auth::{ValidationOutcome, create_signed_url, validate_signed_url};
    use sigurl_core::{SigUrlConfig, SignatureAlgorithm, now_plus_minutes};

    use crate::{NOW, TEST_KEY, TEST_TOKEN, init_tracing, pair_at, test_url};

    #[test]
    fn test_should_return_token_for_freshly_signed_url() {
        init_tracing();
        let signed = create_signed_url(&test_url(), now_plus_minutes(1), TEST_KEY).unwrap();

        let outcome = validate_signed_url(&signed, &[TEST_KEY]).unwrap();
        assert_eq!(outcome.token().map(|t| t.as_str()), Some(TEST_TOKEN));
    }

    #[test]
    fn test_should_reject_url_signed_in_the_past() {
        init_tracing();
        let signed = create_signed_url(&test_url(), now_plus_minutes(0) - 1, TEST_KEY).unwrap();

        let outcome = validate_signed_url(&signed, &[TEST_KEY]).unwrap();
        assert_eq!(outcome, ValidationOutcome::Invalid);
    }

    #[test]
    fn test_should_round_trip_generated_tokens_with_extra_parameters() {
        let (signer, verifier) = pair_at(NOW, &SigUrlConfig::default());
        for _ in 0..20 {
            let token = generate_token();
            let url = format!(
                "https://cdn.example.org:8443/files/report%202024.pdf?user=jane+doe&token={token}&lang=en"
            );
            let signed = signer.sign(&url, NOW + 3600, TEST_KEY).unwrap();

            let outcome = verifier.validate(&signed, &[TEST_KEY]).unwrap();
            assert_eq!(outcome.into_token().unwrap().into_inner(), token);
        }
    }

    #[test]
    fn test_should_round_trip_with_every_algorithm() {
        for algorithm in [
            SignatureAlgorithm::HmacSha1,
            SignatureAlgorithm::HmacSha256,
            SignatureAlgorithm::HmacSha384,
            SignatureAlgorithm::HmacSha512,
        ] {
            let config = SigUrlConfig {
                algorithm,
                ..SigUrlConfig::default()
            };
            let (signer, verifier) = pair_at(NOW, &config);
            let signed = signer.sign(&test_url(), NOW + 60, TEST_KEY).unwrap();
            assert!(
                verifier.validate(&signed, &[TEST_KEY]).unwrap().is_valid(),
                "{algorithm}"
            );
        }
    }

    #[test]
    fn test_should_validate_signed_url_after_recanonicalization() {
        // Re-signing is impossible (reserved parameters), but a verifier that
        // re-parses an already canonical URL must reach the same verdict.
        let (signer, verifier) = pair_at(NOW, &SigUrlConfig::default());
        let signed = signer
            .sign("http://test.com?token=1234567890987654", NOW + 60, TEST_KEY)
            .unwrap();
        assert!(signed.starts_with("http://test.com/?token=1234567890987654&expires="));
        assert!(verifier.validate(&signed, &[TEST_KEY]).unwrap().is_valid());
    }

    #[test]
    fn test_should_refuse_to_sign_an_already_signed_url() {
        let (signer, _) = pair_at(NOW, &SigUrlConfig::default());
        let signed = signer.sign(&test_url(), NOW + 60, TEST_KEY).unwrap();
        assert!(matches!(
            signer.sign(&signed, NOW + 60, TEST_KEY),
            Err(sigurl_auth::AuthError::ReservedParameter(_))
        ));
    }
}
