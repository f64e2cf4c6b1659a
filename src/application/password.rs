use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::app_error::{AppError, AppResult};

/// Hashes a password with Argon2id and a fresh random salt. The result is a
/// PHC string carrying its own salt and parameters.
pub fn hash(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| AppError::Internal(e.to_string()))
}

/// Verifies a candidate password against a stored PHC string. A malformed
/// stored digest verifies as false rather than erroring out.
pub fn verify(password: &str, digest: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(digest) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// Burns one verification against a throwaway digest. Used on the
/// unknown-email sign-in path so it costs the same as a real check.
pub fn dummy_verify(password: &str) {
    // Any well-formed PHC string works; the comparison always fails.
    const DUMMY_DIGEST: &str = "$argon2id$v=19$m=19456,t=2,p=1$\
        MDEyMzQ1Njc4OWFiY2RlZg$qLml5cdwb0NXUXcyyLB3vySLj8EyzKV6TDYVvOhM1hQ";
    let _ = verify(password, DUMMY_DIGEST);
}
