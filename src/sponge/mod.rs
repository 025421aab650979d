use crate::bits::BitString;
use crate::error::{KeccakError, Result};
use crate::keccak::KeccakP;
use tracing::debug;

pub mod pad;

pub use pad::{pad10star1, PaddingRule};

/// SPONGE[f, pad, r]: absorbs padded input r bits at a time through `f`
/// and squeezes output r bits at a time.
#[derive(Debug, Clone, Copy)]
pub struct Sponge {
    f: KeccakP,
    pad: PaddingRule,
    rate: usize,
}

impl Sponge {
    pub fn new(f: KeccakP, pad: PaddingRule, rate: usize) -> Result<Self> {
        let width = f.width();
        if rate == 0 || rate >= width {
            return Err(KeccakError::InvalidRate { rate, width });
        }
        Ok(Self { f, pad, rate })
    }

    pub fn rate(&self) -> usize {
        self.rate
    }

    pub fn capacity(&self) -> usize {
        self.f.width() - self.rate
    }

    pub fn permutation(&self) -> KeccakP {
        self.f
    }

    /// Absorb `message` and return the b-bit state ready for squeezing.
    pub fn absorb(&self, message: &BitString) -> Result<BitString> {
        let r = self.rate;
        let p = BitString::concat(&[message, &(self.pad)(r, message.len())]);
        let n = p.len() / r;
        let capacity = BitString::zeros(self.capacity());
        debug!(
            blocks = n,
            rate = r,
            capacity = self.capacity(),
            "sponge absorb"
        );

        let mut s = BitString::zeros(self.f.width());
        for i in 0..n {
            let block = BitString::concat(&[&p.slice(i * r..(i + 1) * r), &capacity]);
            s = self.f.permute(&(&s ^ &block))?;
        }
        Ok(s)
    }

    /// Emit the first `d` bits of the output stream starting from `state`.
    pub fn squeeze(&self, state: BitString, d: usize) -> Result<BitString> {
        let r = self.rate;
        let mut s = state;
        let mut z = BitString::new();
        let mut calls = 0usize;
        loop {
            z.append(&s.truncate(r));
            if d <= z.len() {
                break;
            }
            s = self.f.permute(&s)?;
            calls += 1;
        }
        debug!(bits = d, permutations = calls, "sponge squeeze");
        Ok(z.truncate(d))
    }

    pub fn digest(&self, message: &BitString, d: usize) -> Result<BitString> {
        let state = self.absorb(message)?;
        self.squeeze(state, d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_sponge() -> Sponge {
        Sponge::new(KeccakP::keccak_f(200).unwrap(), pad10star1, 72).unwrap()
    }

    fn message(len: usize) -> BitString {
        BitString::from_bits(&(0..len).map(|i| (i * 5 + 1) % 7 < 3).collect::<Vec<_>>())
    }

    #[test]
    fn rate_bounds() {
        let f = KeccakP::keccak_f(200).unwrap();
        assert_eq!(
            Sponge::new(f, pad10star1, 0).unwrap_err(),
            KeccakError::InvalidRate { rate: 0, width: 200 }
        );
        assert_eq!(
            Sponge::new(f, pad10star1, 200).unwrap_err(),
            KeccakError::InvalidRate {
                rate: 200,
                width: 200
            }
        );
        let sponge = Sponge::new(f, pad10star1, 199).unwrap();
        assert_eq!(sponge.capacity(), 1);
    }

    #[test]
    fn absorbing_the_empty_message_is_one_block() {
        let sponge = small_sponge();
        let f = sponge.permutation();

        let mut bits = vec![false; 200];
        bits[0] = true;
        bits[71] = true;
        let block = BitString::from(bits);

        assert_eq!(sponge.absorb(&BitString::new()).unwrap(), f.permute(&block).unwrap());
    }

    #[test]
    fn absorb_runs_one_permutation_per_block() {
        let sponge = small_sponge();
        let f = sponge.permutation();
        // 70 bits leave room for the two padding bits: one block
        let m = message(70);
        let block = BitString::concat(&[&m, &pad10star1(72, 70), &BitString::zeros(128)]);
        assert_eq!(sponge.absorb(&m).unwrap(), f.permute(&block).unwrap());

        // 71 bits spill the padding into a second block
        let m = message(71);
        let p = BitString::concat(&[&m, &pad10star1(72, 71)]);
        assert_eq!(p.len(), 144);
        let first = BitString::concat(&[&p.slice(0..72), &BitString::zeros(128)]);
        let second = BitString::concat(&[&p.slice(72..144), &BitString::zeros(128)]);
        let s = f.permute(&first).unwrap();
        let s = f.permute(&(&s ^ &second)).unwrap();
        assert_eq!(sponge.absorb(&m).unwrap(), s);
    }

    #[test]
    fn squeeze_permutes_between_blocks() {
        let sponge = small_sponge();
        let f = sponge.permutation();
        let state = sponge.absorb(&message(30)).unwrap();

        let out = sponge.squeeze(state.clone(), 200).unwrap();
        assert_eq!(out.len(), 200);
        let second_state = f.permute(&state).unwrap();
        let third_state = f.permute(&second_state).unwrap();
        assert_eq!(out.slice(0..72), state.truncate(72));
        assert_eq!(out.slice(72..144), second_state.truncate(72));
        assert_eq!(out.slice(144..200), third_state.truncate(56));
        assert_ne!(out.slice(0..72), out.slice(72..144));
    }

    #[test]
    fn output_prefixes_agree() {
        let sponge = small_sponge();
        let m = message(100);
        let long = sponge.digest(&m, 500).unwrap();
        for d in [0, 1, 71, 72, 73, 144, 499] {
            assert_eq!(sponge.digest(&m, d).unwrap(), long.truncate(d));
        }
    }
}
