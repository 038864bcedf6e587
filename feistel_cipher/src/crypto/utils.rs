use crate::crypto::error::CipherError;
use crate::crypto::feistel_network::BLOCK_SIZE;

/// Length of `bytes` up to (not including) the first zero byte, or the whole
/// slice when none is present.
pub fn terminated_len(bytes: &[u8]) -> usize {
    bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len())
}

/// Extends `data` to the next multiple of the block size.
///
/// The pad length is encoded as the ASCII digit `'1'..'8'` repeated in every
/// padding byte. Input that is already block-aligned still receives a full
/// extra block, so the result is always strictly longer than the input.
pub fn apply_padding(data: &[u8]) -> Result<Vec<u8>, CipherError> {
    let padding_length = BLOCK_SIZE - (data.len() % BLOCK_SIZE);

    let mut padded = Vec::new();
    padded.try_reserve_exact(data.len() + padding_length)?;
    padded.extend_from_slice(data);
    padded.resize(data.len() + padding_length, padding_length as u8 + b'0');
    Ok(padded)
}

/// Strips the digit-encoded padding appended by [`apply_padding`].
///
/// A trailing byte that decodes to more than one block is rejected as
/// [`CipherError::CorruptPadding`]; a byte of `'0'` decodes to zero and
/// removes nothing.
pub fn remove_padding(data: &[u8]) -> Result<Vec<u8>, CipherError> {
    let mut kept = data.len();
    if let Some(&last) = data.last() {
        let candidate = last.wrapping_sub(b'0') as usize;
        if candidate > BLOCK_SIZE {
            return Err(CipherError::CorruptPadding);
        }
        kept = data.len().saturating_sub(candidate);
    }

    let mut plaintext = Vec::new();
    plaintext.try_reserve_exact(kept)?;
    plaintext.extend_from_slice(&data[..kept]);
    Ok(plaintext)
}
