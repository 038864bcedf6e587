use std::collections::TryReserveError;

use thiserror::Error;

/// Errors produced by the cipher engine and its collaborators.
#[derive(Debug, Error)]
pub enum CipherError {
    /// A working buffer could not be allocated.
    #[error("buffer allocation failed: {0}")]
    ResourceExhaustion(#[from] TryReserveError),

    /// The trailing padding-length byte decodes to more than one block.
    #[error("padding length byte out of range for 8-byte blocks")]
    CorruptPadding,

    /// Decryption input is not a positive multiple of the block size.
    #[error("ciphertext length {0} is not a positive multiple of 8 bytes")]
    MisalignedCiphertext(usize),

    /// The DES reference path needs a full 8-byte key from the password.
    #[error("reference cipher requires at least 8 password bytes, got {0}")]
    ReferenceKeyLength(usize),

    /// File-backed input or output failed.
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
}
