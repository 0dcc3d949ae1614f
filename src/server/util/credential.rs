//! Stored credential verification.
//!
//! Accounts created by this server store an Argon2 PHC string. Older accounts may carry a
//! werkzeug style `scrypt:n:r:p$salt$hex` or `pbkdf2:sha256:iterations$salt$hex` hash, or the
//! password itself in plain text. [`Credential::parse`] classifies the stored value once and
//! [`Credential::verify`] dispatches on the result.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use sha2::Sha256;

use crate::server::error::auth::AuthError;

/// Output length of werkzeug's scrypt hashes in bytes.
const SCRYPT_KEY_LEN: usize = 64;
/// Output length of werkzeug's pbkdf2 sha256 hashes in bytes.
const PBKDF2_SHA256_KEY_LEN: usize = 32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HashAlgorithm {
    Argon2,
    Scrypt,
    Pbkdf2,
}

/// A stored credential tagged with how it must be checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Credential<'a> {
    Hashed {
        algorithm: HashAlgorithm,
        value: &'a str,
    },
    /// Legacy accounts whose password was stored verbatim
    Plaintext(&'a str),
}

impl<'a> Credential<'a> {
    pub fn parse(stored: &'a str) -> Self {
        let algorithm = if stored.starts_with("$argon2") {
            HashAlgorithm::Argon2
        } else if stored.starts_with("scrypt:") {
            HashAlgorithm::Scrypt
        } else if stored.starts_with("pbkdf2:") {
            HashAlgorithm::Pbkdf2
        } else {
            return Self::Plaintext(stored);
        };

        Self::Hashed {
            algorithm,
            value: stored,
        }
    }

    /// Checks a candidate password against the stored credential.
    ///
    /// Malformed hashes never verify.
    pub fn verify(&self, candidate: &str) -> bool {
        match *self {
            Self::Plaintext(stored) => stored == candidate,
            Self::Hashed {
                algorithm: HashAlgorithm::Argon2,
                value,
            } => PasswordHash::new(value)
                .map(|hash| {
                    Argon2::default()
                        .verify_password(candidate.as_bytes(), &hash)
                        .is_ok()
                })
                .unwrap_or(false),
            Self::Hashed {
                algorithm: HashAlgorithm::Scrypt,
                value,
            } => verify_scrypt(value, candidate).unwrap_or(false),
            Self::Hashed {
                algorithm: HashAlgorithm::Pbkdf2,
                value,
            } => verify_pbkdf2(value, candidate).unwrap_or(false),
        }
    }
}

/// Hashes a new password into an Argon2 PHC string.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::encode_b64(&rand::random::<[u8; 16]>())
        .map_err(|e| AuthError::HashError(e.to_string()))?;

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AuthError::HashError(e.to_string()))
}

/// Splits `method$salt$hex` into its parts.
fn split_werkzeug(value: &str) -> Option<(&str, &str, &str)> {
    let mut parts = value.splitn(3, '$');

    Some((parts.next()?, parts.next()?, parts.next()?))
}

fn verify_scrypt(value: &str, candidate: &str) -> Option<bool> {
    let (method, salt, expected) = split_werkzeug(value)?;

    let mut params = method.strip_prefix("scrypt:")?.split(':');
    let n: u64 = params.next()?.parse().ok()?;
    let r: u32 = params.next()?.parse().ok()?;
    let p: u32 = params.next()?.parse().ok()?;

    if !n.is_power_of_two() {
        return None;
    }

    let params = scrypt::Params::new(n.trailing_zeros() as u8, r, p, SCRYPT_KEY_LEN).ok()?;
    let mut derived = [0u8; SCRYPT_KEY_LEN];
    scrypt::scrypt(candidate.as_bytes(), salt.as_bytes(), &params, &mut derived).ok()?;

    Some(hex::encode(derived).eq_ignore_ascii_case(expected))
}

fn verify_pbkdf2(value: &str, candidate: &str) -> Option<bool> {
    let (method, salt, expected) = split_werkzeug(value)?;

    // Only the sha256 digest has ever been used for stored accounts
    let iterations: u32 = method.strip_prefix("pbkdf2:sha256:")?.parse().ok()?;

    let mut derived = [0u8; PBKDF2_SHA256_KEY_LEN];
    pbkdf2::pbkdf2_hmac::<Sha256>(
        candidate.as_bytes(),
        salt.as_bytes(),
        iterations,
        &mut derived,
    );

    Some(hex::encode(derived).eq_ignore_ascii_case(expected))
}
