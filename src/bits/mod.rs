use crate::error::{KeccakError, Result};
use std::ops::{BitXor, Range};

pub const BYTE_LENGTH: usize = 8;

/// An ordered sequence of bits, the representation shared by messages,
/// padding, permutation states and sponge output.
///
/// Bit `8i + j` of a byte string is bit `j` (least significant first) of byte `i`.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct BitString {
    bits: Vec<bool>,
}

impl BitString {
    pub const fn new() -> Self {
        Self { bits: Vec::new() }
    }

    pub fn zeros(len: usize) -> Self {
        Self {
            bits: vec![false; len],
        }
    }

    pub fn from_bits(bits: &[bool]) -> Self {
        Self {
            bits: bits.to_vec(),
        }
    }

    /// Unpack each byte into 8 bits, least significant bit first.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut bits = Vec::with_capacity(bytes.len() * BYTE_LENGTH);
        for byte in bytes {
            for j in 0..BYTE_LENGTH {
                bits.push((byte >> j) & 1 == 1);
            }
        }
        Self { bits }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn get_bit(&self, pos: usize) -> bool {
        self.bits[pos]
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }

    pub fn append(&mut self, other: &Self) {
        self.bits.extend_from_slice(&other.bits);
    }

    pub fn concat(items: &[&Self]) -> Self {
        let len = items.iter().map(|s| s.bits.len()).sum();
        let mut bits = Vec::with_capacity(len);
        for item in items.iter() {
            bits.extend_from_slice(&item.bits)
        }

        Self { bits }
    }

    pub fn slice(&self, range: Range<usize>) -> Self {
        Self {
            bits: self.bits[range].to_vec(),
        }
    }

    pub fn truncate(&self, len: usize) -> Self {
        let mut bits = self.bits.clone();
        bits.truncate(len);
        Self { bits }
    }

    /// Pack into bytes, reversing each 8-bit group before the MSB-first pack.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        if self.bits.len() % BYTE_LENGTH != 0 {
            return Err(KeccakError::PartialByte(self.bits.len()));
        }
        let bytes = self
            .bits
            .chunks(BYTE_LENGTH)
            .map(|chunk| {
                chunk
                    .iter()
                    .rev()
                    .fold(0u8, |acc, &bit| (acc << 1) | bit as u8)
            })
            .collect();
        Ok(bytes)
    }

    /// Lowercase hex rendering, two digits per byte.
    pub fn to_hex(&self) -> Result<String> {
        Ok(hex::encode(self.to_bytes()?))
    }
}

impl From<Vec<bool>> for BitString {
    fn from(bits: Vec<bool>) -> Self {
        Self { bits }
    }
}

/// Bitwise XOR over the common prefix; lengths are expected to match.
impl BitXor for &BitString {
    type Output = BitString;

    fn bitxor(self, rhs: Self) -> BitString {
        debug_assert_eq!(self.len(), rhs.len());
        let bits = self
            .bits
            .iter()
            .zip(rhs.bits.iter())
            .map(|(a, b)| a ^ b)
            .collect();
        BitString { bits }
    }
}

pub fn bits_of(bytes: &[u8]) -> BitString {
    BitString::from_bytes(bytes)
}

pub fn hex_of(bits: &BitString) -> Result<String> {
    bits.to_hex()
}
