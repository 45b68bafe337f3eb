//! SHA-256 and Keccak-256 hashing

use sha2::Sha256;
use sha3::{Digest, Keccak256};
use volt_primitives::H256;

/// Compute the SHA-256 hash of the input data.
///
/// Native ids (transaction id, block id payload) are SHA-256 over the
/// deterministic encoding of the hashed structure.
pub fn sha256(data: &[u8]) -> H256 {
    let mut hasher = Sha256::new();
    hasher.update(data);
    H256::from_bytes(hasher.finalize().into())
}

/// Compute the Keccak-256 hash of the input data (`web3_sha3`).
pub fn keccak256(data: &[u8]) -> H256 {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    H256::from_bytes(hasher.finalize().into())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== SHA-256 test vectors ====================

    #[test]
    fn test_sha256_empty() {
        // sha256("")
        assert_eq!(
            sha256(&[]).to_hex(),
            "0xe3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_sha256_abc() {
        // sha256("abc") - FIPS 180-2 appendix B.1
        assert_eq!(
            sha256(b"abc").to_hex(),
            "0xba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_sha256_quick_brown_fox() {
        assert_eq!(
            sha256(b"The quick brown fox jumps over the lazy dog").to_hex(),
            "0xd7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592"
        );
    }

    // ==================== Keccak-256 test vectors ====================

    #[test]
    fn test_keccak256_empty() {
        // keccak256("")
        assert_eq!(
            keccak256(&[]).to_hex(),
            "0xc5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn test_keccak256_hello() {
        // keccak256("hello")
        assert_eq!(
            keccak256(b"hello").to_hex(),
            "0x1c8aff950685c2ed4bc3174f3472287b56d9517b9c948127319a09a7a36deac8"
        );
    }

    #[test]
    fn test_keccak256_differs_from_sha256() {
        assert_ne!(keccak256(b"volt"), sha256(b"volt"));
    }
}
