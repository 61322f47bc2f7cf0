use crate::server::error::AppError;

const BCRYPT_COST: u32 = 10;

/// Hashes a plaintext password with bcrypt.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    Ok(bcrypt::hash(password, BCRYPT_COST)?)
}

/// Verifies a plaintext password against a stored bcrypt hash.
///
/// Malformed hashes verify as `false`.
pub fn verify_password(password: &str, hash: &str) -> bool {
    bcrypt::verify(password, hash).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verifies_matching_password() {
        let hash = hash_password("hunter22").unwrap();
        assert!(verify_password("hunter22", &hash));
        assert!(!verify_password("hunter23", &hash));
    }

    #[test]
    fn malformed_hash_never_verifies() {
        assert!(!verify_password("anything", "!"));
    }
}
