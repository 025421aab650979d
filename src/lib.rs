pub mod bits;
pub mod error;
pub mod fips202;
pub mod keccak;
pub mod sponge;

pub use bits::{bits_of, hex_of, BitString};
pub use error::{KeccakError, Result};
pub use fips202::{shake128, shake128_hex, shake_128};
