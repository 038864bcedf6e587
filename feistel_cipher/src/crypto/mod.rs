pub mod chained_substitution;
pub mod cipher_context;
pub mod cipher_io;
pub mod cipher_traits;
pub mod cipher_types;
pub mod des_reference;
pub mod error;
pub mod feistel_network;
pub mod key_derivation;
pub mod round_transformation;
pub mod sbox_expansion;
pub mod sbox_generation;
pub mod utils;

use std::sync::Arc;

use crate::crypto::error::CipherError;
use crate::crypto::round_transformation::RoundTransformation;
use crate::crypto::sbox_expansion::{SBox, SboxExpansion};

impl SboxExpansion for Arc<dyn SboxExpansion + Send + Sync> {
    fn generate_sboxes(&self, password: &[u8]) -> Result<Vec<SBox>, CipherError> {
        (**self).generate_sboxes(password)
    }
}

impl RoundTransformation for Arc<dyn RoundTransformation + Send + Sync> {
    fn transform(&self, half_block: &[u8], sbox: &SBox) -> Vec<u8> {
        (**self).transform(half_block, sbox)
    }
}
