use thiserror::Error;

pub type Result<T> = std::result::Result<T, KeccakError>;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum KeccakError {
    /// The permutation width is not one of 25, 50, 100, 200, 400, 800, 1600.
    #[error("Invalid permutation width: {0}")]
    InvalidWidth(usize),

    /// A state bit string does not hold exactly b bits.
    #[error("Invalid state length: expected {expected} bits, got {actual}")]
    InvalidStateLength { expected: usize, actual: usize },

    /// The rate must satisfy 0 < r < b.
    #[error("Invalid rate {rate} for permutation width {width}")]
    InvalidRate { rate: usize, width: usize },

    /// The capacity must satisfy 0 < c < b.
    #[error("Invalid capacity {capacity} for permutation width {width}")]
    InvalidCapacity { capacity: usize, width: usize },

    #[error("Bit string of length {0} does not split into whole bytes")]
    PartialByte(usize),

    /// The requested byte count has no bit length representable in usize.
    #[error("Requested output of {0} bytes is too long")]
    OutputTooLong(usize),
}
