use super::{KeccakParams, StateArray};
use crate::bits::BitString;
use crate::error::Result;
use std::ops::Range;
use tracing::trace;

/// KECCAK-p[b, nr]: the last `nr` rounds of the 12 + 2l round schedule.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct KeccakP {
    params: KeccakParams,
    rounds: usize,
}

impl KeccakP {
    pub fn new(b: usize, nr: usize) -> Result<Self> {
        Ok(Self {
            params: KeccakParams::new(b)?,
            rounds: nr,
        })
    }

    /// KECCAK-f[b] = KECCAK-p[b, 12 + 2l]
    pub fn keccak_f(b: usize) -> Result<Self> {
        let params = KeccakParams::new(b)?;
        Ok(Self {
            params,
            rounds: params.full_rounds(),
        })
    }

    pub fn width(&self) -> usize {
        self.params.b
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Indices 12 + 2l - nr ..= 12 + 2l - 1; negative when nr exceeds the full schedule.
    pub fn round_indices(&self) -> Range<i64> {
        let end = self.params.full_rounds() as i64;
        (end - self.rounds as i64)..end
    }

    pub fn permute(&self, s: &BitString) -> Result<BitString> {
        trace!(width = self.params.b, rounds = self.rounds, "keccak-p");
        let mut state = StateArray::from_bits(self.params, s)?;
        for ir in self.round_indices() {
            state.round(ir);
        }
        Ok(state.to_bits())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KeccakError;

    fn lanes(s: &BitString) -> Vec<u64> {
        let state = StateArray::from_bits(KeccakParams::KECCAK_1600, s).unwrap();
        let mut res = Vec::with_capacity(25);
        for y in 0..5 {
            for x in 0..5 {
                res.push(state.lane(x, y));
            }
        }
        res
    }

    /// Keccak-f[1600] applied to the all-zero state, from the Keccak team's
    /// intermediate values.
    #[test]
    fn keccak_f1600_zero_state() {
        let f = KeccakP::keccak_f(1600).unwrap();
        assert_eq!(f.rounds(), 24);
        let out = lanes(&f.permute(&BitString::zeros(1600)).unwrap());
        assert_eq!(out[0], 0xF1258F7940E1DDE7);
        assert_eq!(out[1], 0x84D5CCF933C0478A);
        assert_eq!(out[2], 0xD598261EA65AA9EE);
    }

    #[test]
    fn round_schedule() {
        let f = KeccakP::keccak_f(1600).unwrap();
        assert_eq!(f.round_indices(), 0..24);

        let p = KeccakP::new(1600, 12).unwrap();
        assert_eq!(p.round_indices(), 12..24);

        let p = KeccakP::new(200, 18).unwrap();
        assert_eq!(p.round_indices(), 0..18);

        let p = KeccakP::new(25, 14).unwrap();
        assert_eq!(p.round_indices(), -2..12);
    }

    #[test]
    fn reduced_rounds_continue_the_full_schedule() {
        let params = KeccakParams::KECCAK_1600;
        let s = BitString::from_bits(&(0..1600).map(|i| (i * i) % 11 == 3).collect::<Vec<_>>());

        let mut state = StateArray::from_bits(params, &s).unwrap();
        for ir in 0..12 {
            state.round(ir);
        }
        let tail = KeccakP::new(1600, 12).unwrap().permute(&state.to_bits()).unwrap();
        let full = KeccakP::keccak_f(1600).unwrap().permute(&s).unwrap();
        assert_eq!(tail, full);
    }

    #[test]
    fn zero_rounds_is_identity() {
        let s = BitString::from_bits(&(0..400).map(|i| i % 3 == 1).collect::<Vec<_>>());
        let p = KeccakP::new(400, 0).unwrap();
        assert_eq!(p.permute(&s).unwrap(), s);
    }

    #[test]
    fn every_width_permutes() {
        for b in crate::keccak::PERMUTATION_WIDTHS {
            let f = KeccakP::keccak_f(b).unwrap();
            let zero = BitString::zeros(b);
            let out = f.permute(&zero).unwrap();
            assert_eq!(out.len(), b);
            assert_ne!(out, zero);
            assert_eq!(f.permute(&zero).unwrap(), out);
        }
    }

    #[test]
    fn invalid_inputs() {
        assert_eq!(KeccakP::new(1601, 24), Err(KeccakError::InvalidWidth(1601)));
        assert_eq!(KeccakP::keccak_f(30), Err(KeccakError::InvalidWidth(30)));

        let f = KeccakP::keccak_f(800).unwrap();
        assert_eq!(
            f.permute(&BitString::zeros(1600)),
            Err(KeccakError::InvalidStateLength {
                expected: 800,
                actual: 1600
            })
        );
    }
}
