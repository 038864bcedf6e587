/// Where a cipher operation reads its input from.
pub enum CipherInput {
    Bytes(Vec<u8>),
    File(String),
}

/// Where a cipher operation writes its result.
pub enum CipherOutput {
    Buffer(Box<Vec<u8>>),
    File(String),
}

/// Scheduling of the independent per-block transforms within one call.
///
/// `Sequential` is the default. `Parallel` fans blocks out across the rayon
/// pool; output block order always matches input order, so both modes
/// produce identical bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BlockDispatch {
    #[default]
    Sequential,
    Parallel,
}
