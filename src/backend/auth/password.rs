/**
 * Password Hashing
 *
 * Thin wrapper around bcrypt. The digest embeds its own salt and cost, so
 * verification needs nothing but the stored string.
 *
 * bcrypt is deliberately slow; the async entry points move the work onto
 * tokio's blocking pool so request workers are not stalled.
 *
 * bcrypt only reads the first 72 bytes of its input. Longer passwords are
 * refused at hashing time and never verify, so two passwords sharing a
 * 72-byte prefix can not unlock the same digest.
 */

use crate::backend::error::HashingError;

/// Longest password bcrypt reads in full
pub const MAX_PASSWORD_BYTES: usize = 72;

/// One-way adaptive password hasher
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Salt and hash `plaintext`
    ///
    /// Fails with `HashingError::TooLong` past [`MAX_PASSWORD_BYTES`].
    pub fn hash(&self, plaintext: &str) -> Result<String, HashingError> {
        if plaintext.len() > MAX_PASSWORD_BYTES {
            return Err(HashingError::TooLong {
                max: MAX_PASSWORD_BYTES,
            });
        }
        Ok(bcrypt::non_truncating_hash(plaintext, self.cost)?)
    }

    /// Check `plaintext` against a stored digest
    ///
    /// A mismatch is `Ok(false)`, as is any plaintext too long to have been
    /// hashed here. Only a digest that is not a bcrypt string produces an error.
    pub fn verify(&self, digest: &str, plaintext: &str) -> Result<bool, HashingError> {
        if plaintext.len() > MAX_PASSWORD_BYTES {
            return Ok(false);
        }
        Ok(bcrypt::verify(plaintext, digest)?)
    }

    /// [`hash`](Self::hash) on the blocking pool
    pub async fn hash_async(&self, plaintext: String) -> Result<String, HashingError> {
        let hasher = *self;
        tokio::task::spawn_blocking(move || hasher.hash(&plaintext)).await?
    }

    /// [`verify`](Self::verify) on the blocking pool
    pub async fn verify_async(
        &self,
        digest: String,
        plaintext: String,
    ) -> Result<bool, HashingError> {
        let hasher = *self;
        tokio::task::spawn_blocking(move || hasher.verify(&digest, &plaintext)).await?
    }
}
