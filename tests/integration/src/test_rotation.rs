//! Key rotation scenarios.

#[cfg(test)]
mod tests {
    use sigurl_auth::generate::generate_key;
    use sigurl_auth::{AuthError, KeyProvider, StaticKeyProvider};
    use sigurl_core::SigUrlConfig;

    use crate::{NOW, TEST_TOKEN, pair_at, test_url};

    #[test]
    fn test_should_accept_url_while_old_key_is_still_active() {
        let (signer, verifier) = pair_at(NOW, &SigUrlConfig::default());
        let key_a = generate_key();
        let key_b = generate_key();

        let signed = signer.sign(&test_url(), NOW + 60, &key_a).unwrap();

        let outcome = verifier.validate(&signed, &[&key_b, &key_a]).unwrap();
        assert_eq!(outcome.token().unwrap().as_str(), TEST_TOKEN);
    }

    #[test]
    fn test_should_reject_url_once_signing_key_is_retired() {
        let (signer, verifier) = pair_at(NOW, &SigUrlConfig::default());
        let key_a = generate_key();
        let key_b = generate_key();

        let signed = signer.sign(&test_url(), NOW + 60, &key_a).unwrap();
        assert!(!verifier.validate(&signed, &[&key_b]).unwrap().is_valid());
    }

    #[test]
    fn test_should_follow_provider_through_rotation() {
        let (signer, verifier) = pair_at(NOW, &SigUrlConfig::default());
        let old_key = generate_key();
        let new_key = generate_key();

        let old_url = signer.sign(&test_url(), NOW + 60, &old_key).unwrap();
        let new_url = signer.sign(&test_url(), NOW + 60, &new_key).unwrap();

        let before = StaticKeyProvider::new(vec![old_key.clone()]);
        let during = StaticKeyProvider::new(vec![new_key.clone(), old_key]);
        let after = StaticKeyProvider::new(vec![new_key]);
        assert_eq!(during.active_keys().len(), 2);

        assert!(verifier.validate_with_provider(&old_url, &before).unwrap().is_valid());
        assert!(!verifier.validate_with_provider(&new_url, &before).unwrap().is_valid());

        assert!(verifier.validate_with_provider(&old_url, &during).unwrap().is_valid());
        assert!(verifier.validate_with_provider(&new_url, &during).unwrap().is_valid());

        assert!(!verifier.validate_with_provider(&old_url, &after).unwrap().is_valid());
        assert!(verifier.validate_with_provider(&new_url, &after).unwrap().is_valid());
    }

    #[test]
    fn test_should_error_when_no_keys_are_active() {
        let (signer, verifier) = pair_at(NOW, &SigUrlConfig::default());
        let signed = signer.sign(&test_url(), NOW + 60, &generate_key()).unwrap();

        let none = StaticKeyProvider::new(Vec::new());
        assert!(matches!(
            verifier.validate_with_provider(&signed, &none),
            Err(AuthError::NoKeysProvided)
        ));
    }
}
