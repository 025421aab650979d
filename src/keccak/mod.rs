use crate::error::{KeccakError, Result};

pub mod permutation;
pub mod state;

pub use permutation::KeccakP;
pub use state::StateArray;

pub const PERMUTATION_WIDTHS: [usize; 7] = [25, 50, 100, 200, 400, 800, 1600];

/// Dimensions of a Keccak-p permutation: width b, lane size w = b / 25
/// and l = log2(w).
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct KeccakParams {
    pub b: usize,
    pub w: usize,
    pub l: usize,
}

impl KeccakParams {
    pub const KECCAK_1600: KeccakParams = KeccakParams {
        b: 1600,
        w: 64,
        l: 6,
    };

    pub fn new(b: usize) -> Result<Self> {
        if !PERMUTATION_WIDTHS.contains(&b) {
            return Err(KeccakError::InvalidWidth(b));
        }
        let w = b / 25;
        Ok(Self {
            b,
            w,
            l: w.trailing_zeros() as usize,
        })
    }

    /// Round count of Keccak-f[b], the full schedule 12 + 2l.
    pub const fn full_rounds(&self) -> usize {
        12 + 2 * self.l
    }
}
