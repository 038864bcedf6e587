use hex_literal::hex;

use feistel_cipher::{CipherError, DesEcbReference};

#[test]
fn test_des_nist_vector_first_block() {
    let key = hex!("13 34 57 79 9B BC DF F1");
    let plaintext = hex!("01 23 45 67 89 AB CD EF");

    let ciphertext = DesEcbReference.encrypt(&plaintext, &key).unwrap();

    // 8-byte input gains a full padding block; the first block is the
    // textbook single-block vector
    assert_eq!(ciphertext.len(), 16);
    assert_eq!(ciphertext[..8], hex!("85 E8 13 54 0F 0A B4 05"));
}

#[test]
fn test_reference_golden_vector() {
    let ciphertext = DesEcbReference.encrypt(b"ABCDEFG", b"password").unwrap();
    assert_eq!(ciphertext, hex!("965a768e451fcd90"));

    let plaintext = DesEcbReference.decrypt(&ciphertext, b"password").unwrap();
    assert_eq!(plaintext, b"ABCDEFG");
}

#[test]
fn test_reference_golden_vector_multi_block() {
    let ciphertext = DesEcbReference
        .encrypt(b"The quick brown fox jumps over the lazy dog", b"password")
        .unwrap();
    assert_eq!(
        ciphertext,
        hex!(
            "b3fe87397a55c8cc857523d85202209de311634a372ae6e4b6da6b0c6fd4eb8f"
            "19eb849d32e9921be2035c9931fbd10c"
        )
    );
}

#[test]
fn test_reference_roundtrip() {
    let plaintexts: [&[u8]; 4] = [b"", b"x", b"12345678", b"a somewhat longer plaintext"];
    for plaintext in plaintexts {
        let ciphertext = DesEcbReference.encrypt(plaintext, b"password").unwrap();
        let restored = DesEcbReference.decrypt(&ciphertext, b"password").unwrap();
        assert_eq!(restored, plaintext);
    }
}

#[test]
fn test_reference_rejects_short_password() {
    let result = DesEcbReference.encrypt(b"data", b"short");
    assert!(matches!(result, Err(CipherError::ReferenceKeyLength(5))));
}

#[test]
fn test_reference_rejects_misaligned_ciphertext() {
    let result = DesEcbReference.decrypt(&[0u8; 7], b"password");
    assert!(matches!(result, Err(CipherError::MisalignedCiphertext(7))));
}
