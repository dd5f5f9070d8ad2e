//! Placeholder "blockchain" tokens.
//!
//! The demo UI shows a hash next to every stage. These are random display
//! tokens with no relation to the stage content and no verification value.

use rand::Rng;

/// Number of random bytes rendered per token (8 hex digits).
const MOCK_HASH_BYTES: usize = 4;

/// Generate a mock stage hash such as `0x1a2b3c4d...`.
pub fn mock_blockchain_hash<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut bytes = [0u8; MOCK_HASH_BYTES];
    rng.fill(&mut bytes[..]);
    format!("0x{}...", hex::encode(bytes))
}

/// Check that a token has the mock hash shape.
pub fn is_mock_blockchain_hash(token: &str) -> bool {
    token
        .strip_prefix("0x")
        .and_then(|rest| rest.strip_suffix("..."))
        .map(|digits| {
            digits.len() == MOCK_HASH_BYTES * 2 && digits.chars().all(|c| c.is_ascii_hexdigit())
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_mock_hash_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let token = mock_blockchain_hash(&mut rng);
        assert!(is_mock_blockchain_hash(&token), "unexpected token {token}");
        assert_eq!(token.len(), 2 + 8 + 3);
    }

    #[test]
    fn test_shape_check_rejects_other_tokens() {
        assert!(!is_mock_blockchain_hash("Pending..."));
        assert!(!is_mock_blockchain_hash("0x1a2b3c..."));
        assert!(!is_mock_blockchain_hash("0xzzzzzzzz..."));
        assert!(!is_mock_blockchain_hash(""));
    }
}
