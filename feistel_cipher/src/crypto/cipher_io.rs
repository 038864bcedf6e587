use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};

use crate::crypto::cipher_types::{CipherInput, CipherOutput};

/// Drains the input source fully into one buffer.
pub fn read_all(input: &CipherInput) -> io::Result<Vec<u8>> {
    match input {
        CipherInput::Bytes(data) => Ok(data.clone()),
        CipherInput::File(path) => {
            let mut reader = BufReader::new(File::open(path)?);
            let mut buffer = Vec::new();
            reader.read_to_end(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Emits `data` to the output sink in one piece.
pub fn write_all(output: &mut CipherOutput, data: &[u8]) -> io::Result<()> {
    match output {
        CipherOutput::Buffer(buffer) => {
            buffer.clear();
            buffer.extend_from_slice(data);
            Ok(())
        }
        CipherOutput::File(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            writer.write_all(data)?;
            writer.flush()
        }
    }
}
