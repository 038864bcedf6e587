use crate::crypto::error::CipherError;

pub const SBOX_SIZE: usize = 256;
pub const NUM_SBOXES: usize = 16;

/// One round's substitution table.
pub type SBox = [u8; SBOX_SIZE];

/// Derives the full set of per-round substitution tables from a password.
pub trait SboxExpansion {
    fn generate_sboxes(&self, password: &[u8]) -> Result<Vec<SBox>, CipherError>;
}
