use bcrypt::{hash, verify, BcryptError, DEFAULT_COST};

/// Hash a plaintext password with a per-call random salt.
pub fn hash_password(plain: &str) -> Result<String, BcryptError> {
    hash(plain, DEFAULT_COST)
}

/// Check a plaintext password against a stored hash.
pub fn verify_password(plain: &str, hashed: &str) -> Result<bool, BcryptError> {
    verify(plain, hashed)
}
