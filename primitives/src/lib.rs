//! Byte containers shared by the codec crates.

extern crate rustc_hex as hex;

pub mod bytes;
pub mod hash;
