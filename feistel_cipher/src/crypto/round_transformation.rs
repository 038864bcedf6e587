use crate::crypto::sbox_expansion::SBox;

/// Per-round nonlinear transform: maps a 4-byte half-block through one
/// round's substitution table.
pub trait RoundTransformation {
    fn transform(&self, half_block: &[u8], sbox: &SBox) -> Vec<u8>;
}
