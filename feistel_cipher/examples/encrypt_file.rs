use std::sync::Arc;

use feistel_cipher::crypto::chained_substitution::ChainedSubstitution;
use feistel_cipher::crypto::cipher_context::CipherContext;
use feistel_cipher::crypto::cipher_types::{BlockDispatch, CipherInput, CipherOutput};
use feistel_cipher::crypto::sbox_generation::KeyedSboxGeneration;
use feistel_cipher::CipherError;

#[tokio::main]
async fn main() -> Result<(), CipherError> {
    env_logger::init();

    let dir = std::env::temp_dir();
    let plain_path = dir.join("feistel_demo_plain.txt");
    let cipher_path = dir.join("feistel_demo_cipher.bin");
    let restored_path = dir.join("feistel_demo_restored.txt");

    std::fs::write(&plain_path, "A small file, encrypted block by block.\n")?;

    let ctx = CipherContext::new(
        Arc::new(KeyedSboxGeneration),
        Arc::new(ChainedSubstitution),
        BlockDispatch::Parallel,
    );
    let password = b"my_secret_password";

    let mut encrypted_out = CipherOutput::File(cipher_path.to_string_lossy().into_owned());
    ctx.encrypt(
        CipherInput::File(plain_path.to_string_lossy().into_owned()),
        &mut encrypted_out,
        password,
    )
    .await?;

    let mut restored_out = CipherOutput::File(restored_path.to_string_lossy().into_owned());
    ctx.decrypt(
        CipherInput::File(cipher_path.to_string_lossy().into_owned()),
        &mut restored_out,
        password,
    )
    .await?;

    let original = std::fs::read(&plain_path)?;
    let restored = std::fs::read(&restored_path)?;
    assert_eq!(original, restored);
    println!(
        "encrypted {} -> {}, roundtrip OK",
        plain_path.display(),
        cipher_path.display()
    );

    Ok(())
}
