use crate::crypto::error::CipherError;

/// A cipher keyed per call by a password, operating on byte buffers.
pub trait PasswordCipher {
    fn encrypt(&self, plaintext: &[u8], password: &[u8]) -> Result<Vec<u8>, CipherError>;
    fn decrypt(&self, ciphertext: &[u8], password: &[u8]) -> Result<Vec<u8>, CipherError>;
}
