//! Random codes and token hashing.

use rand::Rng;
use sha2::{Digest, Sha256};

const ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                              abcdefghijklmnopqrstuvwxyz\
                              0123456789";
const HEX: &[u8] = b"0123456789abcdef";

fn random_from(charset: &[u8], length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..charset.len());
            charset[idx] as char
        })
        .collect()
}

/// Random alphanumeric string of the given length.
pub fn random_alphanumeric(length: usize) -> String {
    random_from(ALPHANUMERIC, length)
}

/// Random lowercase hex string of the given length.
pub fn random_hex(length: usize) -> String {
    random_from(HEX, length)
}

/// SHA-256 digest of a token as lowercase hex. Tokens are only persisted in this form.
pub fn hash_token(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
}
