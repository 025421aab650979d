//! SHA-3 hash functions and SHAKE extendable-output functions built on the
//! Keccak[c] sponge.
//!
//! Messages and digests are bit strings; the `*_hex` and byte-level
//! functions wrap them for whole-byte inputs and outputs.

use crate::bits::{bits_of, hex_of, BitString, BYTE_LENGTH};
use crate::error::{KeccakError, Result};
use crate::keccak::KeccakP;
use crate::sponge::{pad10star1, Sponge};

/// Domain separation suffix of the SHAKE functions.
pub const SHAKE_SUFFIX: [bool; 4] = [true, true, true, true];
/// Domain separation suffix of the SHA-3 hash functions.
pub const SHA3_SUFFIX: [bool; 2] = [false, true];

pub const SHAKE128_CAPACITY: usize = 256;
pub const SHAKE256_CAPACITY: usize = 512;

/// KECCAK[c] on KECCAK-f[b]: the sponge with pad10*1 and rate b - c.
pub fn keccak_with_width(b: usize, c: usize) -> Result<Sponge> {
    let f = KeccakP::keccak_f(b)?;
    if c == 0 || c >= b {
        return Err(KeccakError::InvalidCapacity { capacity: c, width: b });
    }
    Sponge::new(f, pad10star1, b - c)
}

/// KECCAK[c] = SPONGE[KECCAK-p[1600, 24], pad10*1, 1600 - c]
pub fn keccak(c: usize) -> Result<Sponge> {
    keccak_with_width(1600, c)
}

fn with_suffix(message: &BitString, suffix: &[bool]) -> BitString {
    BitString::concat(&[message, &BitString::from_bits(suffix)])
}

/// SHAKE128(M, d) = KECCAK[256](M || 1111, d)
pub fn shake128(message: &BitString, d: usize) -> Result<BitString> {
    keccak(SHAKE128_CAPACITY)?.digest(&with_suffix(message, &SHAKE_SUFFIX), d)
}

/// SHAKE256(M, d) = KECCAK[512](M || 1111, d)
pub fn shake256(message: &BitString, d: usize) -> Result<BitString> {
    keccak(SHAKE256_CAPACITY)?.digest(&with_suffix(message, &SHAKE_SUFFIX), d)
}

fn sha3(message: &BitString, d: usize) -> Result<BitString> {
    keccak(2 * d)?.digest(&with_suffix(message, &SHA3_SUFFIX), d)
}

pub fn sha3_224(message: &BitString) -> Result<BitString> {
    sha3(message, 224)
}

pub fn sha3_256(message: &BitString) -> Result<BitString> {
    sha3(message, 256)
}

pub fn sha3_384(message: &BitString) -> Result<BitString> {
    sha3(message, 384)
}

pub fn sha3_512(message: &BitString) -> Result<BitString> {
    sha3(message, 512)
}

fn output_bits(byte_num: usize) -> Result<usize> {
    byte_num
        .checked_mul(BYTE_LENGTH)
        .ok_or(KeccakError::OutputTooLong(byte_num))
}

/// SHAKE128 of a byte string, `byte_num` output bytes rendered as lowercase hex.
pub fn shake128_hex(byte_string: &[u8], byte_num: usize) -> Result<String> {
    hex_of(&shake128(&bits_of(byte_string), output_bits(byte_num)?)?)
}

/// shake-128 over bytes
pub fn shake_128(data: &[u8], len: usize) -> Result<Vec<u8>> {
    shake128(&bits_of(data), output_bits(len)?)?.to_bytes()
}

/// shake-256 over bytes
pub fn shake_256(data: &[u8], len: usize) -> Result<Vec<u8>> {
    shake256(&bits_of(data), output_bits(len)?)?.to_bytes()
}

/// sha3-256 over bytes
pub fn sha3_256_bytes(data: &[u8]) -> Result<Vec<u8>> {
    sha3_256(&bits_of(data))?.to_bytes()
}
