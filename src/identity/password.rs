//! Argon2 password hashing for the local identity provider.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use tracing::{debug, error, instrument};

use crate::identity::AuthError;

/// Hashes a plain-text password into a PHC string with a random salt.
#[instrument(skip(password), err(Display))]
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    match Argon2::default().hash_password(password.as_bytes(), &salt) {
        Ok(hash) => {
            debug!("Password hashed");
            Ok(hash.to_string())
        }
        Err(e) => {
            error!(error = %e, "Argon2 hashing failed");
            Err(AuthError::Hashing(e.to_string()))
        }
    }
}

/// Returns `Ok(false)` on a wrong password and an error only when the stored
/// hash cannot be parsed.
#[instrument(skip_all, err(Display))]
pub fn verify_password(stored_hash: &str, password: &str) -> Result<bool, AuthError> {
    let parsed = PasswordHash::new(stored_hash).map_err(|e| {
        error!(error = %e, "Stored password hash is malformed");
        AuthError::Hashing(e.to_string())
    })?;
    match Argon2::default().verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(AuthError::Hashing(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify() {
        let hash = hash_password("secret1").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password(&hash, "secret1").unwrap());
        assert!(!verify_password(&hash, "secret2").unwrap());
    }

    #[test]
    fn malformed_hash_is_an_error() {
        assert!(matches!(verify_password("not-a-hash", "x"), Err(AuthError::Hashing(_))));
    }
}
