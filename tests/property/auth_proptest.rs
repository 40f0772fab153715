//! Property tests for tokens and password digests

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use shopfront::backend::auth::{PasswordHasher, TokenIssuer, TokenVerifier};
use shopfront::backend::error::AuthError;
use shopfront::shared::SigningSecret;
use uuid::Uuid;

fn secret(raw: &str) -> SigningSecret {
    SigningSecret::new(raw).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_issued_tokens_verify_until_expiry(
        id in any::<u128>(),
        local in "[a-z0-9]{1,16}",
        issued_secs in 1_000_000_000i64..2_000_000_000i64,
        offset_secs in 0i64..=24 * 3600,
    ) {
        let key = secret("property-secret");
        let user_id = Uuid::from_u128(id);
        let email = format!("{}@example.com", local);
        let issued = Utc.timestamp_opt(issued_secs, 0).unwrap();

        let token = TokenIssuer::new(&key).issue_at(user_id, &email, issued).unwrap();
        let verified = TokenVerifier::new(&key)
            .verify_at(&token, issued + Duration::seconds(offset_secs))
            .unwrap();

        prop_assert_eq!(verified.user_id, user_id);
        prop_assert_eq!(verified.email.as_deref(), Some(email.as_str()));
    }

    #[test]
    fn prop_tokens_expire_after_ttl(
        issued_secs in 1_000_000_000i64..2_000_000_000i64,
        late_secs in 1i64..1_000_000,
    ) {
        let key = secret("property-secret");
        let issued = Utc.timestamp_opt(issued_secs, 0).unwrap();
        let token = TokenIssuer::new(&key)
            .issue_at(Uuid::new_v4(), "a@example.com", issued)
            .unwrap();

        let result = TokenVerifier::new(&key)
            .verify_at(&token, issued + Duration::hours(24) + Duration::seconds(late_secs));
        prop_assert!(matches!(result, Err(AuthError::Expired)));
    }

    #[test]
    fn prop_other_secret_never_verifies(a in "[a-zA-Z0-9]{8,32}", b in "[a-zA-Z0-9]{8,32}") {
        prop_assume!(a != b);
        let token = TokenIssuer::new(&secret(&a)).issue(Uuid::new_v4(), "a@example.com").unwrap();
        let result = TokenVerifier::new(&secret(&b)).verify(&token);
        prop_assert!(matches!(result, Err(AuthError::InvalidSignature)));
    }

    #[test]
    fn prop_arbitrary_strings_never_verify(input in ".{0,200}") {
        let verifier = TokenVerifier::new(&secret("property-secret"));
        prop_assert!(verifier.verify(&input).is_err());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn prop_password_digest_matches_only_itself(
        password in "[ -~]{1,40}",
        other in "[ -~]{1,40}",
    ) {
        let hasher = PasswordHasher::new(4);
        let digest = hasher.hash(&password).unwrap();

        prop_assert!(digest.starts_with("$2"));
        prop_assert!(hasher.verify(&digest, &password).unwrap());
        if other != password {
            prop_assert!(!hasher.verify(&digest, &other).unwrap());
        }
    }
}
