//! Password hashing utilities
//!
//! Policy: bcrypt with an explicit 72-byte input ceiling, applied
//! identically on hash and verify. Verification never surfaces an
//! error; malformed digests count as a failed match.

use bcrypt::{hash, verify, DEFAULT_COST};

/// bcrypt ignores input past this many bytes.
pub const MAX_SECRET_BYTES: usize = 72;

fn bounded(secret: &str) -> &[u8] {
    let bytes = secret.as_bytes();
    &bytes[..bytes.len().min(MAX_SECRET_BYTES)]
}

/// Hash a password using bcrypt
pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
    hash(bounded(password), DEFAULT_COST)
}

/// Verify a password against a stored digest.
///
/// Any internal failure (including a malformed digest) maps to
/// `false`.
pub fn verify_password(password: &str, digest: &str) -> bool {
    verify(bounded(password), digest).unwrap_or(false)
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_verify_round_trip() {
        let digest = hash_password("correct horse battery staple").unwrap();
        assert!(verify_password("correct horse battery staple", &digest));
        assert!(!verify_password("correct horse battery stable", &digest));
    }

    #[test]
    fn malformed_digest_is_false_not_error() {
        assert!(!verify_password("anything", "not-a-bcrypt-digest"));
        assert!(!verify_password("anything", ""));
    }

    #[test]
    fn input_past_the_ceiling_is_ignored_consistently() {
        let base = "x".repeat(MAX_SECRET_BYTES);
        let longer = format!("{base}overflow");
        let digest = hash_password(&base).unwrap();
        // Same first 72 bytes → same credential under the policy.
        assert!(verify_password(&longer, &digest));
    }

    #[test]
    fn multibyte_input_does_not_panic() {
        // 71 ASCII bytes followed by a multi-byte char straddling the
        // ceiling; the byte-level cut must not split a credential
        // check into a panic.
        let secret = format!("{}ñ", "a".repeat(71));
        let digest = hash_password(&secret).unwrap();
        assert!(verify_password(&secret, &digest));
    }
}
