use sha2::{Digest, Sha256};

use crate::crypto::utils::terminated_len;

pub const KEY_SIZE: usize = 32;

/// Hashes a password into the fixed-size key digest.
///
/// Only the bytes before the first zero byte participate in the hash; the
/// password is treated as a zero-terminated string, matching the ported
/// tool's behavior exactly. Callers holding the digest should zeroize it as
/// soon as the seed permutation has been derived.
pub fn derive_key(password: &[u8]) -> [u8; KEY_SIZE] {
    let effective = &password[..terminated_len(password)];
    Sha256::digest(effective).into()
}
