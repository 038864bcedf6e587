//! Password-keyed 64-bit Feistel cipher.
//!
//! Each of the 16 rounds substitutes through its own 256-entry table derived
//! deterministically from a SHA-256 digest of the password. Blocks are
//! transformed independently, with no inter-block feedback, so identical
//! plaintext blocks produce identical ciphertext blocks under one password.

pub mod crypto;

pub use crypto::cipher_context::*;
pub use crypto::cipher_traits::*;
pub use crypto::cipher_types::*;
pub use crypto::des_reference::*;
pub use crypto::error::*;
