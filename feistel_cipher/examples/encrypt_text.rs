use std::sync::Arc;

use feistel_cipher::crypto::chained_substitution::ChainedSubstitution;
use feistel_cipher::crypto::cipher_context::CipherContext;
use feistel_cipher::crypto::cipher_types::BlockDispatch;
use feistel_cipher::crypto::sbox_generation::KeyedSboxGeneration;
use feistel_cipher::{CipherError, DesEcbReference, PasswordCipher};

fn main() -> Result<(), CipherError> {
    env_logger::init();

    let text = "The quick brown fox jumps over the lazy dog. Symmetric encryption test string!";
    let password = b"my_secret_password";

    let ctx = CipherContext::new(
        Arc::new(KeyedSboxGeneration),
        Arc::new(ChainedSubstitution),
        BlockDispatch::Sequential,
    );

    let ciphertext = ctx.encrypt_bytes(text.as_bytes(), password)?;
    let restored = ctx.decrypt_bytes(&ciphertext, password)?;
    assert_eq!(restored, text.as_bytes());
    println!("Feistel: {} plaintext bytes -> {} ciphertext bytes", text.len(), ciphertext.len());

    // same plaintext through the library DES baseline
    let ciphers: [(&str, Box<dyn PasswordCipher>); 2] = [
        ("feistel", Box::new(ctx)),
        ("des-reference", Box::new(DesEcbReference)),
    ];
    for (name, cipher) in ciphers {
        let encrypted = cipher.encrypt(text.as_bytes(), password)?;
        let decrypted = cipher.decrypt(&encrypted, password)?;
        assert_eq!(decrypted, text.as_bytes());
        println!("{name} roundtrip OK ({} bytes)", encrypted.len());
    }

    Ok(())
}
