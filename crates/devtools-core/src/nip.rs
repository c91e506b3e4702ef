//! NIP, the Polish tax identification number.
//!
//! A NIP is ten digits: a three digit tax office code, six more digits and a
//! check digit computed as a weighted sum modulo 11. A sum whose remainder is
//! 10 has no representable check digit, so such prefixes never form a valid
//! number.

use std::fmt;

use rand::{Rng, RngCore};

use crate::digits::{parse_exact, push_number, render, weighted_mod11};

pub const NIP_LENGTH: usize = 10;

const WEIGHTS: [u32; 9] = [6, 5, 7, 2, 3, 4, 5, 6, 7];

/// A validated NIP in canonical digit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Nip([u8; NIP_LENGTH]);

impl Nip {
    /// Parse and validate a NIP; hyphens and spaces are ignored.
    pub fn parse(value: &str) -> Option<Self> {
        let clean = strip_separators(value);
        let digits = parse_exact(&clean, NIP_LENGTH)?;
        let mut array = [0_u8; NIP_LENGTH];
        array.copy_from_slice(&digits);
        let checksum = nip_checksum(&array[..9]);
        (checksum != 10 && checksum == array[9]).then_some(Self(array))
    }

    /// Draw a fresh valid NIP.
    ///
    /// Prefixes whose checksum is 10 are thrown away and redrawn. Each attempt
    /// is rejected with probability close to 1/11, so k consecutive rejections
    /// happen with probability about (1/11)^k.
    pub fn generate(rng: &mut dyn RngCore) -> Self {
        loop {
            let mut digits = Vec::with_capacity(NIP_LENGTH);
            push_number(&mut digits, rng.random_range(101..=998), 3);
            push_number(&mut digits, rng.random_range(10_000..=99_999), 5);
            digits.push(rng.random_range(0..=9));

            let checksum = nip_checksum(&digits);
            if checksum == 10 {
                continue;
            }
            digits.push(checksum);

            let mut array = [0_u8; NIP_LENGTH];
            array.copy_from_slice(&digits);
            return Self(array);
        }
    }

    pub fn digits(&self) -> String {
        render(&self.0)
    }

    /// Hyphenated display form, `XXX-XXX-XX-XX`.
    pub fn formatted(&self) -> String {
        hyphenate(&self.digits())
    }
}

impl fmt::Display for Nip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

/// Weighted checksum of the first nine NIP digits. May return 10.
pub fn nip_checksum(first_nine: &[u8]) -> u8 {
    weighted_mod11(first_nine, &WEIGHTS)
}

pub fn is_valid_nip(value: &str) -> bool {
    Nip::parse(value).is_some()
}

/// Remove the hyphens and spaces users commonly type into identifiers.
pub fn strip_separators(value: &str) -> String {
    value.chars().filter(|ch| *ch != '-' && *ch != ' ').collect()
}

/// Render ten digits as `XXX-XXX-XX-XX` regardless of checksum validity.
///
/// Returns `None` when the input, once stripped, is not exactly ten digits.
pub fn format_nip(value: &str) -> Option<String> {
    let clean = strip_separators(value);
    parse_exact(&clean, NIP_LENGTH)?;
    Some(hyphenate(&clean))
}

/// Generate a valid NIP in hyphenated form.
pub fn generate_nip(rng: &mut dyn RngCore) -> String {
    Nip::generate(rng).formatted()
}

/// Generate a well-formed NIP whose check digit is deliberately wrong.
pub fn generate_invalid_nip(rng: &mut dyn RngCore) -> String {
    let valid = Nip::generate(rng);
    let mut digits = valid.0;
    let current = digits[9];
    let mut replacement = rng.random_range(0..=8);
    if replacement >= current {
        replacement += 1;
    }
    digits[9] = replacement;
    hyphenate(&render(&digits))
}

fn hyphenate(digits: &str) -> String {
    format!(
        "{}-{}-{}-{}",
        &digits[..3],
        &digits[3..6],
        &digits[6..8],
        &digits[8..]
    )
}
