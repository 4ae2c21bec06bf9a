/// Errors returned by the fallible scalar constructors.
///
/// The arithmetic itself cannot fail; only decoding untrusted input can.
#[derive(Debug, thiserror::Error)]
pub enum ScalarError {
    #[error("scalar input has length {actual}, expected {expected} bytes")]
    InvalidLength { expected: usize, actual: usize },
    #[error("invalid hexadecimal scalar encoding: {0}")]
    InvalidHex(#[from] hex::FromHexError),
    #[error("scalar encoding is not below the group order")]
    NonCanonical,
}
