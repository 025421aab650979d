use super::KeccakParams;
use crate::bits::BitString;
use crate::error::{KeccakError, Result};

/// The 5 x 5 x w state of a Keccak-p permutation.
///
/// Bits live in one flat buffer where A[x, y, z] sits at w(5y + x) + z,
/// which is exactly the position of that bit in the linear state string.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct StateArray {
    params: KeccakParams,
    bits: Vec<bool>,
}

impl StateArray {
    pub fn new(params: KeccakParams) -> Self {
        Self {
            params,
            bits: vec![false; params.b],
        }
    }

    /// A[x, y, z] = S[w(5y + x) + z]
    pub fn from_bits(params: KeccakParams, s: &BitString) -> Result<Self> {
        if s.len() != params.b {
            return Err(KeccakError::InvalidStateLength {
                expected: params.b,
                actual: s.len(),
            });
        }
        Ok(Self {
            params,
            bits: s.as_slice().to_vec(),
        })
    }

    pub fn to_bits(&self) -> BitString {
        BitString::from_bits(&self.bits)
    }

    #[inline]
    fn index(&self, x: usize, y: usize, z: usize) -> usize {
        self.params.w * (5 * y + x) + z
    }

    pub fn get(&self, x: usize, y: usize, z: usize) -> bool {
        self.bits[self.index(x, y, z)]
    }

    pub fn set(&mut self, x: usize, y: usize, z: usize, bit: bool) {
        let i = self.index(x, y, z);
        self.bits[i] = bit;
    }

    /// Lane (x, y) as an integer with bit z at 2^z.
    pub fn lane(&self, x: usize, y: usize) -> u64 {
        (0..self.params.w).fold(0u64, |acc, z| acc | (self.get(x, y, z) as u64) << z)
    }

    /// Mix the parity of two neighbouring columns into every bit.
    pub fn theta(&mut self) {
        let w = self.params.w;
        let mut c = vec![false; 5 * w];
        for x in 0..5 {
            for z in 0..w {
                c[x * w + z] = (0..5).fold(false, |acc, y| acc ^ self.get(x, y, z));
            }
        }

        let mut d = vec![false; 5 * w];
        for x in 0..5 {
            for z in 0..w {
                d[x * w + z] = c[((x + 4) % 5) * w + z] ^ c[((x + 1) % 5) * w + (z + w - 1) % w];
            }
        }

        for x in 0..5 {
            for y in 0..5 {
                for z in 0..w {
                    let i = self.index(x, y, z);
                    self.bits[i] ^= d[x * w + z];
                }
            }
        }
    }

    /// Rotate each lane by a triangular-number offset; lane (0, 0) stays put.
    pub fn rho(&mut self) {
        let w = self.params.w;
        let a = self.bits.clone();
        let (mut x, mut y) = (1, 0);
        for t in 0..24 {
            let offset = ((t + 1) * (t + 2) / 2) % w;
            for z in 0..w {
                let i = self.index(x, y, z);
                self.bits[i] = a[self.index(x, y, (z + w - offset) % w)];
            }
            (x, y) = (y, (2 * x + 3 * y) % 5);
        }
    }

    /// Rearrange the lanes: A'[x, y, z] = A[(x + 3y) mod 5, x, z].
    pub fn pi(&mut self) {
        let a = self.bits.clone();
        for x in 0..5 {
            for y in 0..5 {
                for z in 0..self.params.w {
                    let i = self.index(x, y, z);
                    self.bits[i] = a[self.index((x + 3 * y) % 5, x, z)];
                }
            }
        }
    }

    /// The only non-linear step, applied row by row.
    pub fn chi(&mut self) {
        let a = self.bits.clone();
        for x in 0..5 {
            for y in 0..5 {
                for z in 0..self.params.w {
                    let i = self.index(x, y, z);
                    let next = a[self.index((x + 1) % 5, y, z)];
                    let after = a[self.index((x + 2) % 5, y, z)];
                    self.bits[i] = a[i] ^ (!next & after);
                }
            }
        }
    }

    /// XOR the round constant of round `ir` into lane (0, 0).
    pub fn iota(&mut self, ir: i64) {
        for j in 0..=self.params.l {
            if rc(j as i64 + 7 * ir) {
                let i = self.index(0, 0, (1 << j) - 1);
                self.bits[i] ^= true;
            }
        }
    }

    /// Rnd(A, ir) = iota(chi(pi(rho(theta(A)))), ir)
    pub fn round(&mut self, ir: i64) {
        self.theta();
        self.rho();
        self.pi();
        self.chi();
        self.iota(ir);
    }
}

/// Output bit of the round-constant LFSR x^8 + x^6 + x^5 + x^4 + 1 after t steps.
pub fn rc(t: i64) -> bool {
    let steps = t.rem_euclid(255);
    if steps == 0 {
        return true;
    }
    // bit i holds R[i]
    let mut r: u16 = 1;
    for _ in 0..steps {
        r <<= 1;
        if r & 0x100 != 0 {
            r ^= 0x71;
        }
        r &= 0xff;
    }
    r & 1 == 1
}
