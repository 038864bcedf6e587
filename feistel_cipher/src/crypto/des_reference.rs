use des::cipher::generic_array::GenericArray;
use des::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use des::Des;

use crate::crypto::cipher_traits::PasswordCipher;
use crate::crypto::error::CipherError;
use crate::crypto::feistel_network::BLOCK_SIZE;
use crate::crypto::utils::{apply_padding, remove_padding, terminated_len};

/// Library-backed DES in independent-block mode, sharing the padding codec
/// with the hand-rolled network.
///
/// Pure call-through used as a comparison and benchmark baseline; the first
/// 8 password bytes form the DES key (parity bits are ignored by the key
/// schedule, so no parity fixup is needed).
pub struct DesEcbReference;

impl DesEcbReference {
    fn key_schedule(password: &[u8]) -> Result<Des, CipherError> {
        if password.len() < BLOCK_SIZE {
            return Err(CipherError::ReferenceKeyLength(password.len()));
        }
        Des::new_from_slice(&password[..BLOCK_SIZE])
            .map_err(|_| CipherError::ReferenceKeyLength(password.len()))
    }

    pub fn encrypt(&self, plaintext: &[u8], password: &[u8]) -> Result<Vec<u8>, CipherError> {
        let cipher = Self::key_schedule(password)?;
        let effective = &plaintext[..terminated_len(plaintext)];
        let padded = apply_padding(effective)?;

        let mut ciphertext = Vec::new();
        ciphertext.try_reserve_exact(padded.len())?;
        for chunk in padded.chunks_exact(BLOCK_SIZE) {
            let mut block = GenericArray::clone_from_slice(chunk);
            cipher.encrypt_block(&mut block);
            ciphertext.extend_from_slice(&block);
        }
        Ok(ciphertext)
    }

    pub fn decrypt(&self, ciphertext: &[u8], password: &[u8]) -> Result<Vec<u8>, CipherError> {
        if ciphertext.is_empty() || ciphertext.len() % BLOCK_SIZE != 0 {
            return Err(CipherError::MisalignedCiphertext(ciphertext.len()));
        }
        let cipher = Self::key_schedule(password)?;

        let mut padded = Vec::new();
        padded.try_reserve_exact(ciphertext.len())?;
        for chunk in ciphertext.chunks_exact(BLOCK_SIZE) {
            let mut block = GenericArray::clone_from_slice(chunk);
            cipher.decrypt_block(&mut block);
            padded.extend_from_slice(&block);
        }
        remove_padding(&padded)
    }
}

impl PasswordCipher for DesEcbReference {
    fn encrypt(&self, plaintext: &[u8], password: &[u8]) -> Result<Vec<u8>, CipherError> {
        DesEcbReference::encrypt(self, plaintext, password)
    }

    fn decrypt(&self, ciphertext: &[u8], password: &[u8]) -> Result<Vec<u8>, CipherError> {
        DesEcbReference::decrypt(self, ciphertext, password)
    }
}
