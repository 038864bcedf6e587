use std::sync::Arc;

use crate::crypto::round_transformation::RoundTransformation;
use crate::crypto::sbox_expansion::SBox;

pub const BLOCK_SIZE: usize = 8;
pub const HALF_BLOCK_SIZE: usize = BLOCK_SIZE / 2;
pub const NUM_ROUNDS: usize = 16;

/// Fixed-iteration Feistel pipeline over one 8-byte block, parameterized by
/// the round transformation seam.
///
/// Forward and inverse walk the same round tables in opposite order; the
/// inverse recovers the original block for any table set, generated or not,
/// since invertibility comes from the network structure alone.
#[derive(Clone)]
pub struct FeistelNetwork {
    num_rounds: usize,
    transformation: Arc<dyn RoundTransformation + Send + Sync>,
}

impl FeistelNetwork {
    pub fn new(
        num_rounds: usize,
        transformation: Arc<dyn RoundTransformation + Send + Sync>,
    ) -> Self {
        Self {
            num_rounds,
            transformation,
        }
    }

    pub fn encrypt_with_sboxes(&self, block: &[u8], sboxes: &[SBox]) -> Vec<u8> {
        assert_eq!(block.len(), BLOCK_SIZE, "block must be {} bytes", BLOCK_SIZE);
        assert!(
            sboxes.len() >= self.num_rounds,
            "one table per round required"
        );

        let (left, right) = block.split_at(HALF_BLOCK_SIZE);
        let mut left = left.to_vec();
        let mut right = right.to_vec();

        for round in 0..self.num_rounds {
            let feistel_out = self.transformation.transform(&right, &sboxes[round]);
            let new_right = left
                .iter()
                .zip(feistel_out.iter())
                .map(|(a, b)| a ^ b)
                .collect();
            left = right;
            right = new_right;
        }
        [left, right].concat()
    }

    pub fn decrypt_with_sboxes(&self, block: &[u8], sboxes: &[SBox]) -> Vec<u8> {
        assert_eq!(block.len(), BLOCK_SIZE, "block must be {} bytes", BLOCK_SIZE);
        assert!(
            sboxes.len() >= self.num_rounds,
            "one table per round required"
        );

        let (left, right) = block.split_at(HALF_BLOCK_SIZE);
        let mut left = left.to_vec();
        let mut right = right.to_vec();

        for round in (0..self.num_rounds).rev() {
            let feistel_out = self.transformation.transform(&left, &sboxes[round]);
            let new_left = right
                .iter()
                .zip(feistel_out.iter())
                .map(|(a, b)| a ^ b)
                .collect();
            right = left;
            left = new_left;
        }
        [left, right].concat()
    }
}
