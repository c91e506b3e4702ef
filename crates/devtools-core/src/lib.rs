//! Checksum identifiers for devtools.
//!
//! This crate implements validation and generation of the Polish tax number
//! (NIP) and the business registry number (REGON, short and long form).
//! Everything here is pure: randomness is always passed in by the caller.

mod digits;
pub mod error;
pub mod nip;
pub mod regon;

pub use error::{Error, Result};
pub use nip::{
    NIP_LENGTH, Nip, format_nip, generate_invalid_nip, generate_nip, is_valid_nip, nip_checksum,
    strip_separators,
};
pub use regon::{
    RegonKind, generate_regon, generate_regon14, generate_regon9, is_valid_regon,
    is_valid_regon14, is_valid_regon9, regon14_checksum, regon9_checksum,
};
