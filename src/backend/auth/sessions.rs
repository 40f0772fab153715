/**
 * Session Management and JWT Tokens
 *
 * This module handles bearer token issuance and verification.
 *
 * # Token Format
 *
 * `header.claims.signature`, three base64url segments:
 * - header: `{"typ":"JWT","alg":"HS256"}`
 * - claims: `{"user_id":"<uuid>","email":"<email>","exp":<unix seconds>}`
 * - signature: HMAC-SHA256 over `header.claims` keyed by the shared secret
 *
 * Tokens are stateless. They stop verifying only when they expire (24 hours
 * after issue) or when the secret changes.
 */

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

use crate::backend::error::{AuthError, TokenError};
use crate::shared::SigningSecret;

/// Lifetime of an issued token
pub const TOKEN_TTL_HOURS: i64 = 24;

/// The only algorithm tokens may declare
pub const EXPECTED_ALGORITHM: Algorithm = Algorithm::HS256;

/// Claims written into every issued token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID (UUID, as a string)
    pub user_id: String,
    /// Email, informational only
    pub email: String,
    /// Expiration time (Unix timestamp, seconds)
    pub exp: i64,
}

/// Claims as read back from an inbound token, before shape checks
#[derive(Debug, Clone, Deserialize)]
struct InboundClaims {
    #[serde(default)]
    user_id: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    exp: Option<i64>,
}

/// Header fields needed before the signature is checked
#[derive(Debug, Deserialize)]
struct RawHeader {
    #[serde(default)]
    alg: Option<String>,
}

/// Identity extracted from a token that passed every check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedToken {
    pub user_id: Uuid,
    pub email: Option<String>,
    pub expires_at: DateTime<Utc>,
}

/// Builds and signs bearer tokens
#[derive(Clone)]
pub struct TokenIssuer {
    key: EncodingKey,
    ttl: Duration,
}

impl TokenIssuer {
    pub fn new(secret: &SigningSecret) -> Self {
        Self {
            key: EncodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::hours(TOKEN_TTL_HOURS),
        }
    }

    /// Create a token for a user, expiring 24 hours from now
    ///
    /// # Arguments
    /// * `user_id` - User ID (UUID)
    /// * `email` - User email
    ///
    /// # Returns
    /// JWT token string
    pub fn issue(&self, user_id: Uuid, email: &str) -> Result<String, TokenError> {
        self.issue_at(user_id, email, Utc::now())
    }

    /// Create a token as if it had been issued at `issued_at`
    pub fn issue_at(
        &self,
        user_id: Uuid,
        email: &str,
        issued_at: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let claims = Claims {
            user_id: user_id.to_string(),
            email: email.to_string(),
            exp: (issued_at + self.ttl).timestamp(),
        };
        Ok(encode(&Header::new(EXPECTED_ALGORITHM), &claims, &self.key)?)
    }
}

/// Checks inbound tokens and extracts the identity they carry
#[derive(Clone)]
pub struct TokenVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(secret: &SigningSecret) -> Self {
        let mut validation = Validation::new(EXPECTED_ALGORITHM);
        // Expiry is checked by hand after the claim shape, so an expired token
        // with a bad identity still reports as malformed.
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.validate_aud = false;
        validation.required_spec_claims = HashSet::new();

        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Verify a token against the current time
    pub fn verify(&self, token: &str) -> Result<VerifiedToken, AuthError> {
        self.verify_at(token, Utc::now())
    }

    /// Verify a token against `now`
    ///
    /// Checks run in order and the first failure wins:
    /// 1. three non-empty segments with a decodable JSON header - `InvalidFormat`
    /// 2. header `alg` is exactly HS256 - `UnexpectedAlgorithm`
    /// 3. HMAC signature matches - `InvalidSignature`
    /// 4. `user_id` is a UUID string and `exp` is present - `MalformedClaims`
    /// 5. `now` is not after `exp` - `Expired`
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<VerifiedToken, AuthError> {
        let header = parse_header(token)?;
        if header.alg.as_deref() != Some("HS256") {
            tracing::debug!(alg = ?header.alg, "Rejecting token with unexpected algorithm");
            return Err(AuthError::UnexpectedAlgorithm);
        }

        let data = decode::<InboundClaims>(token, &self.key, &self.validation).map_err(|e| {
            match e.kind() {
                ErrorKind::InvalidSignature => AuthError::InvalidSignature,
                ErrorKind::InvalidAlgorithm | ErrorKind::InvalidAlgorithmName => {
                    AuthError::UnexpectedAlgorithm
                }
                ErrorKind::Json(_) => AuthError::MalformedClaims,
                _ => AuthError::InvalidFormat,
            }
        })?;
        let claims = data.claims;

        let user_id = claims
            .user_id
            .as_deref()
            .and_then(|raw| Uuid::parse_str(raw).ok())
            .ok_or(AuthError::MalformedClaims)?;
        let exp = claims.exp.ok_or(AuthError::MalformedClaims)?;
        let expires_at = DateTime::<Utc>::from_timestamp(exp, 0).ok_or(AuthError::MalformedClaims)?;

        if now > expires_at {
            return Err(AuthError::Expired);
        }

        Ok(VerifiedToken {
            user_id,
            email: claims.email,
            expires_at,
        })
    }
}

/// Structural check of the three segments plus header decode
fn parse_header(token: &str) -> Result<RawHeader, AuthError> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 || segments.iter().any(|s| s.is_empty()) {
        return Err(AuthError::InvalidFormat);
    }

    let bytes = URL_SAFE_NO_PAD
        .decode(segments[0])
        .map_err(|_| AuthError::InvalidFormat)?;
    serde_json::from_slice(&bytes).map_err(|_| AuthError::InvalidFormat)
}
