use ring::pbkdf2;
use ring::rand::{SecureRandom, SystemRandom};
use std::num::NonZeroU32;
use zeroize::Zeroize;

use crate::types::errors::AuthError;

/// PBKDF2 iteration count for password hashing.
const PBKDF2_ITERATIONS: u32 = 100_000;

/// Salt length in bytes for PBKDF2.
pub const SALT_LENGTH: usize = 16;

/// Derived hash length in bytes.
pub const HASH_LENGTH: usize = 32;

static PBKDF2_ALGORITHM: pbkdf2::Algorithm = pbkdf2::PBKDF2_HMAC_SHA256;

/// Trait defining the cryptographic primitives used for login accounts.
pub trait CryptoServiceTrait {
    /// Derives a password hash from a password and salt using PBKDF2-HMAC-SHA256.
    fn hash_password(&self, password: &str, salt: &[u8]) -> Result<Vec<u8>, AuthError>;

    /// Checks `password` against a stored hash in constant time.
    fn verify_password(&self, password: &str, salt: &[u8], expected_hash: &[u8]) -> bool;

    /// Generates a cryptographically secure random salt.
    fn generate_salt(&self) -> Result<Vec<u8>, AuthError>;

    /// Securely clears sensitive data from memory by overwriting with zeros.
    fn zeroize_memory(&self, data: &mut [u8]);
}

/// Implementation of cryptographic services using the `ring` crate.
pub struct CryptoService {
    rng: SystemRandom,
}

impl CryptoService {
    /// Creates a new CryptoService instance.
    pub fn new() -> Self {
        Self {
            rng: SystemRandom::new(),
        }
    }

    fn iterations() -> Result<NonZeroU32, AuthError> {
        NonZeroU32::new(PBKDF2_ITERATIONS)
            .ok_or_else(|| AuthError::Crypto("Invalid iteration count".to_string()))
    }
}

impl Default for CryptoService {
    fn default() -> Self {
        Self::new()
    }
}

impl CryptoServiceTrait for CryptoService {
    fn hash_password(&self, password: &str, salt: &[u8]) -> Result<Vec<u8>, AuthError> {
        let mut hash = vec![0u8; HASH_LENGTH];
        pbkdf2::derive(
            PBKDF2_ALGORITHM,
            Self::iterations()?,
            salt,
            password.as_bytes(),
            &mut hash,
        );
        Ok(hash)
    }

    fn verify_password(&self, password: &str, salt: &[u8], expected_hash: &[u8]) -> bool {
        let Ok(iterations) = Self::iterations() else {
            return false;
        };
        pbkdf2::verify(
            PBKDF2_ALGORITHM,
            iterations,
            salt,
            password.as_bytes(),
            expected_hash,
        )
        .is_ok()
    }

    fn generate_salt(&self) -> Result<Vec<u8>, AuthError> {
        let mut salt = vec![0u8; SALT_LENGTH];
        self.rng
            .fill(&mut salt)
            .map_err(|_| AuthError::Crypto("Failed to generate random salt".to_string()))?;
        Ok(salt)
    }

    fn zeroize_memory(&self, data: &mut [u8]) {
        data.zeroize();
    }
}
