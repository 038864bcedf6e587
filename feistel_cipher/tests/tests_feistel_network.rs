use std::sync::Arc;

use feistel_cipher::crypto::chained_substitution::ChainedSubstitution;
use feistel_cipher::crypto::feistel_network::{FeistelNetwork, BLOCK_SIZE, NUM_ROUNDS};
use feistel_cipher::crypto::round_transformation::RoundTransformation;
use feistel_cipher::crypto::sbox_expansion::{SBox, SboxExpansion, NUM_SBOXES};
use feistel_cipher::crypto::sbox_generation::KeyedSboxGeneration;

#[cfg(test)]
mod tests {
    use super::*;

    struct MockTransformation;
    impl RoundTransformation for MockTransformation {
        fn transform(&self, half_block: &[u8], sbox: &SBox) -> Vec<u8> {
            half_block
                .iter()
                .map(|&b| sbox[b as usize] ^ 0x5A)
                .collect()
        }
    }

    // deliberately not a bijection: structural invertibility must not care
    fn lumpy_tables() -> Vec<SBox> {
        (0..NUM_SBOXES)
            .map(|round| {
                let mut sbox = [0u8; 256];
                for (i, entry) in sbox.iter_mut().enumerate() {
                    *entry = ((i / 3) as u8).wrapping_mul(round as u8 + 7);
                }
                sbox
            })
            .collect()
    }

    #[test]
    fn test_roundtrip_with_mock_transformation() {
        let network = FeistelNetwork::new(
            NUM_ROUNDS,
            Arc::new(MockTransformation) as Arc<dyn RoundTransformation + Send + Sync>,
        );
        let tables = lumpy_tables();
        let block = b"\x12\x34\x56\x78\x9A\xBC\xDE\xF0";

        let encrypted = network.encrypt_with_sboxes(block, &tables);
        assert_eq!(encrypted.len(), BLOCK_SIZE);
        assert_ne!(encrypted.as_slice(), block.as_slice());

        let decrypted = network.decrypt_with_sboxes(&encrypted, &tables);
        assert_eq!(decrypted.as_slice(), block.as_slice());
    }

    #[test]
    fn test_roundtrip_with_arbitrary_tables() {
        let network = FeistelNetwork::new(NUM_ROUNDS, Arc::new(ChainedSubstitution));
        let tables = lumpy_tables();

        for block in [
            [0u8; 8],
            [0xFFu8; 8],
            *b"ABCDEFG1",
            [0x00, 0x01, 0x02, 0x03, 0xFC, 0xFD, 0xFE, 0xFF],
        ] {
            let encrypted = network.encrypt_with_sboxes(&block, &tables);
            let decrypted = network.decrypt_with_sboxes(&encrypted, &tables);
            assert_eq!(decrypted.as_slice(), block.as_slice());
        }
    }

    #[test]
    fn test_roundtrip_with_generated_tables() {
        let network = FeistelNetwork::new(NUM_ROUNDS, Arc::new(ChainedSubstitution));
        let tables = KeyedSboxGeneration.generate_sboxes(b"password").unwrap();

        let block = *b"ABCDEFG1";
        let encrypted = network.encrypt_with_sboxes(&block, &tables);
        let decrypted = network.decrypt_with_sboxes(&encrypted, &tables);
        assert_eq!(decrypted.as_slice(), block.as_slice());
    }

    #[test]
    fn test_single_round_structure() {
        // one round: R' = L ^ F(R), L' = R, no final swap
        let network = FeistelNetwork::new(1, Arc::new(ChainedSubstitution));
        let tables = KeyedSboxGeneration.generate_sboxes(b"password").unwrap();

        let block = *b"LEFThalf";
        let out = network.encrypt_with_sboxes(&block, &tables);

        let feistel_out = ChainedSubstitution.transform(&block[4..], &tables[0]);
        assert_eq!(out[..4], block[4..]);
        for i in 0..4 {
            assert_eq!(out[4 + i], block[i] ^ feistel_out[i]);
        }
    }

    #[test]
    fn test_output_length_is_block_size() {
        let network = FeistelNetwork::new(NUM_ROUNDS, Arc::new(ChainedSubstitution));
        let tables = KeyedSboxGeneration.generate_sboxes(b"k").unwrap();

        let encrypted = network.encrypt_with_sboxes(&[0u8; 8], &tables);
        assert_eq!(encrypted.len(), BLOCK_SIZE);
    }
}
