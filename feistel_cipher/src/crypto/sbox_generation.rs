use zeroize::Zeroize;

use crate::crypto::error::CipherError;
use crate::crypto::key_derivation::{derive_key, KEY_SIZE};
use crate::crypto::sbox_expansion::{SBox, SboxExpansion, NUM_SBOXES, SBOX_SIZE};

pub const SBOX_POOL_SIZE: usize = SBOX_SIZE * NUM_SBOXES;

/// Expands a password into 16 round tables: one keyed seed permutation,
/// replicated across the whole pool and decorrelated per round by a
/// round-robin shuffle.
pub struct KeyedSboxGeneration;

/// Builds the seed table: the identity permutation stirred by 256 sequential
/// transpositions, each pairing position `i` with `(i + key[i % 32]) % 256`.
///
/// The result is always a permutation of the byte values 0-255.
pub fn seed_permutation(key: &[u8; KEY_SIZE]) -> SBox {
    let mut table = [0u8; SBOX_SIZE];
    for (position, entry) in table.iter_mut().enumerate() {
        *entry = position as u8;
    }

    for current in 0..SBOX_SIZE {
        let target = (current + key[current % KEY_SIZE] as usize) % SBOX_SIZE;
        table.swap(current, target);
    }
    table
}

/// Lays down 16 contiguous copies of the seed table, one per round slot.
pub fn replicate_seed(seed: &SBox) -> Result<Vec<u8>, CipherError> {
    let mut pool = Vec::new();
    pool.try_reserve_exact(SBOX_POOL_SIZE)?;
    for _ in 0..NUM_SBOXES {
        pool.extend_from_slice(seed);
    }
    Ok(pool)
}

/// Deals the pool into a fresh buffer with a growing stride.
///
/// The cursor starts at 0; after each placement it advances by `shift`
/// modulo the pool length, and `shift` itself increments, wrapping back to 1
/// once it reaches the pool length. The stride sequence visits every output
/// position exactly once, so the result holds the same bytes rearranged.
pub fn round_robin_shuffle(pool: &[u8]) -> Result<Vec<u8>, CipherError> {
    let size = pool.len();
    if size == 0 {
        return Ok(Vec::new());
    }

    let mut shuffled = Vec::new();
    shuffled.try_reserve_exact(size)?;
    shuffled.resize(size, 0);

    let mut shift = 1;
    let mut cursor = 0;
    for &byte in pool {
        shuffled[cursor] = byte;
        cursor = (cursor + shift) % size;
        shift += 1;
        if shift >= size {
            shift = 1;
        }
    }
    Ok(shuffled)
}

/// Splits the shuffled pool back into 16 round tables.
pub fn split_sboxes(pool: &[u8]) -> Vec<SBox> {
    pool.chunks_exact(SBOX_SIZE)
        .map(|segment| {
            let mut sbox = [0u8; SBOX_SIZE];
            sbox.copy_from_slice(segment);
            sbox
        })
        .collect()
}

impl SboxExpansion for KeyedSboxGeneration {
    fn generate_sboxes(&self, password: &[u8]) -> Result<Vec<SBox>, CipherError> {
        let mut key = derive_key(password);
        let seed = seed_permutation(&key);
        key.zeroize();

        let pool = replicate_seed(&seed)?;
        let shuffled = round_robin_shuffle(&pool)?;
        Ok(split_sboxes(&shuffled))
    }
}
