use std::io;
use std::sync::Arc;

use log::debug;
use rayon::prelude::*;
use zeroize::Zeroize;

use crate::crypto::cipher_io::{read_all, write_all};
use crate::crypto::cipher_traits::PasswordCipher;
use crate::crypto::cipher_types::{BlockDispatch, CipherInput, CipherOutput};
use crate::crypto::error::CipherError;
use crate::crypto::feistel_network::{FeistelNetwork, BLOCK_SIZE, NUM_ROUNDS};
use crate::crypto::round_transformation::RoundTransformation;
use crate::crypto::sbox_expansion::{SBox, SboxExpansion};
use crate::crypto::utils::{apply_padding, remove_padding, terminated_len};

/// Orchestrates one cipher operation end to end: derive the round tables
/// from the password, pad, transform each 8-byte block independently, and
/// concatenate in input order.
///
/// Key material and round tables live only for the duration of a single
/// call; both are zeroized before the call returns.
#[derive(Clone)]
pub struct CipherContext {
    sbox_expansion: Arc<dyn SboxExpansion + Send + Sync>,
    feistel: FeistelNetwork,
    dispatch: BlockDispatch,
}

impl CipherContext {
    pub fn new(
        sbox_expansion: Arc<dyn SboxExpansion + Send + Sync>,
        transformation: Arc<dyn RoundTransformation + Send + Sync>,
        dispatch: BlockDispatch,
    ) -> Self {
        CipherContext {
            sbox_expansion,
            feistel: FeistelNetwork::new(NUM_ROUNDS, transformation),
            dispatch,
        }
    }

    /// Encrypts `plaintext` up to its first zero byte.
    ///
    /// The zero-terminator scan is a documented constraint of the ported
    /// API; use [`CipherContext::encrypt_raw`] for binary-safe input.
    pub fn encrypt_bytes(
        &self,
        plaintext: &[u8],
        password: &[u8],
    ) -> Result<Vec<u8>, CipherError> {
        let effective = &plaintext[..terminated_len(plaintext)];
        self.encrypt_raw(effective, password)
    }

    /// Encrypts the whole slice as-is, zero bytes included.
    pub fn encrypt_raw(&self, plaintext: &[u8], password: &[u8]) -> Result<Vec<u8>, CipherError> {
        let padded = apply_padding(plaintext)?;
        let mut sboxes = self.sbox_expansion.generate_sboxes(password)?;

        debug!(
            "encrypting {} blocks, {:?} dispatch",
            padded.len() / BLOCK_SIZE,
            self.dispatch
        );

        let ciphertext = self.process_blocks(&padded, &sboxes, true);
        sboxes.zeroize();
        ciphertext
    }

    /// Decrypts `ciphertext` and strips the padding block structure.
    pub fn decrypt_bytes(
        &self,
        ciphertext: &[u8],
        password: &[u8],
    ) -> Result<Vec<u8>, CipherError> {
        if ciphertext.is_empty() || ciphertext.len() % BLOCK_SIZE != 0 {
            return Err(CipherError::MisalignedCiphertext(ciphertext.len()));
        }

        let mut sboxes = self.sbox_expansion.generate_sboxes(password)?;

        debug!(
            "decrypting {} blocks, {:?} dispatch",
            ciphertext.len() / BLOCK_SIZE,
            self.dispatch
        );

        let padded = self.process_blocks(ciphertext, &sboxes, false);
        sboxes.zeroize();
        remove_padding(&padded?)
    }

    /// Exposes the generated round tables for independent inspection.
    pub fn generate_sboxes(&self, password: &[u8]) -> Result<Vec<SBox>, CipherError> {
        self.sbox_expansion.generate_sboxes(password)
    }

    fn process_blocks(
        &self,
        data: &[u8],
        sboxes: &[SBox],
        encrypt: bool,
    ) -> Result<Vec<u8>, CipherError> {
        let mut output = Vec::new();
        output.try_reserve_exact(data.len())?;

        match self.dispatch {
            BlockDispatch::Sequential => {
                for block in data.chunks_exact(BLOCK_SIZE) {
                    let processed = if encrypt {
                        self.feistel.encrypt_with_sboxes(block, sboxes)
                    } else {
                        self.feistel.decrypt_with_sboxes(block, sboxes)
                    };
                    output.extend_from_slice(&processed);
                }
            }
            BlockDispatch::Parallel => {
                // par_chunks keeps block order on collect
                let blocks: Vec<Vec<u8>> = data
                    .par_chunks(BLOCK_SIZE)
                    .map(|block| {
                        if encrypt {
                            self.feistel.encrypt_with_sboxes(block, sboxes)
                        } else {
                            self.feistel.decrypt_with_sboxes(block, sboxes)
                        }
                    })
                    .collect();
                for block in blocks {
                    output.extend_from_slice(&block);
                }
            }
        }
        Ok(output)
    }

    /// Encrypts from any input source to any output sink.
    ///
    /// Byte inputs are processed on the calling task; file inputs are drained
    /// and processed on a blocking worker. The zero-terminator scan of
    /// [`CipherContext::encrypt_bytes`] applies to file contents as well.
    pub async fn encrypt(
        &self,
        input: CipherInput,
        output: &mut CipherOutput,
        password: &[u8],
    ) -> Result<(), CipherError> {
        self.process_io(input, output, password, true).await
    }

    /// Decrypts from any input source to any output sink.
    pub async fn decrypt(
        &self,
        input: CipherInput,
        output: &mut CipherOutput,
        password: &[u8],
    ) -> Result<(), CipherError> {
        self.process_io(input, output, password, false).await
    }

    async fn process_io(
        &self,
        input: CipherInput,
        output: &mut CipherOutput,
        password: &[u8],
        encrypt: bool,
    ) -> Result<(), CipherError> {
        match input {
            CipherInput::Bytes(data) => {
                let processed = if encrypt {
                    self.encrypt_bytes(&data, password)?
                } else {
                    self.decrypt_bytes(&data, password)?
                };
                write_all(output, &processed)?;
                Ok(())
            }
            CipherInput::File(path) => {
                let this = self.clone();
                let password = password.to_vec();
                let processed = Self::run_file_task(move || {
                    let data = read_all(&CipherInput::File(path))?;
                    if encrypt {
                        this.encrypt_bytes(&data, &password)
                    } else {
                        this.decrypt_bytes(&data, &password)
                    }
                })
                .await?;
                write_all(output, &processed)?;
                Ok(())
            }
        }
    }

    async fn run_file_task<F, T>(task: F) -> Result<T, CipherError>
    where
        F: FnOnce() -> Result<T, CipherError> + Send + 'static,
        T: Send + 'static,
    {
        tokio::task::spawn_blocking(task)
            .await
            .map_err(|e| CipherError::Io(io::Error::new(io::ErrorKind::Other, e)))?
    }
}

impl PasswordCipher for CipherContext {
    fn encrypt(&self, plaintext: &[u8], password: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.encrypt_bytes(plaintext, password)
    }

    fn decrypt(&self, ciphertext: &[u8], password: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.decrypt_bytes(ciphertext, password)
    }
}
