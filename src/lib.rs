#![no_std]
#![allow(clippy::excessive_precision)]

extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod double;
pub mod histogram;
pub mod uint128;
pub mod uint256;

pub use double::Double;
pub use histogram::Histogram;
pub use uint128::Uint128;
pub use uint256::Uint256;
