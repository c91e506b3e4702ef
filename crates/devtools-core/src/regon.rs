//! REGON, the Polish business registry number.
//!
//! The short form has nine digits. The long form used for local units has
//! fourteen: a valid short REGON, four unit digits and a second check digit.
//! Unlike NIP, a remainder of 10 folds to a check digit of 0.

use std::fmt;

use rand::RngCore;

use crate::digits::{parse_exact, random_digits, render, weighted_mod11};
use crate::error::{Error, Result};

const WEIGHTS_9: [u32; 8] = [8, 9, 2, 3, 4, 5, 6, 7];
const WEIGHTS_14: [u32; 13] = [2, 4, 8, 5, 0, 9, 7, 3, 6, 1, 2, 4, 8];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RegonKind {
    #[default]
    Short,
    Long,
}

impl RegonKind {
    pub fn from_length(length: usize) -> Result<Self> {
        match length {
            9 => Ok(Self::Short),
            14 => Ok(Self::Long),
            other => Err(Error::InvalidArgument(format!(
                "REGON length must be either 9 or 14, got {other}"
            ))),
        }
    }

    pub fn length(self) -> usize {
        match self {
            Self::Short => 9,
            Self::Long => 14,
        }
    }
}

impl fmt::Display for RegonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "REGON-{}", self.length())
    }
}

/// Folded checksum over the first eight digits.
pub fn regon9_checksum(first_eight: &[u8]) -> u8 {
    fold(weighted_mod11(first_eight, &WEIGHTS_9))
}

/// Folded checksum over the first thirteen digits.
pub fn regon14_checksum(first_thirteen: &[u8]) -> u8 {
    fold(weighted_mod11(first_thirteen, &WEIGHTS_14))
}

fn fold(checksum: u8) -> u8 {
    if checksum == 10 { 0 } else { checksum }
}

pub fn is_valid_regon9(value: &str) -> bool {
    parse_exact(value, 9).is_some_and(|digits| valid_short(&digits))
}

pub fn is_valid_regon14(value: &str) -> bool {
    parse_exact(value, 14).is_some_and(|digits| {
        valid_short(&digits[..9]) && regon14_checksum(&digits[..13]) == digits[13]
    })
}

/// Validate a REGON of either length. Anything else is simply invalid.
pub fn is_valid_regon(value: &str) -> bool {
    match value.len() {
        9 => is_valid_regon9(value),
        14 => is_valid_regon14(value),
        _ => false,
    }
}

fn valid_short(digits: &[u8]) -> bool {
    regon9_checksum(&digits[..8]) == digits[8]
}

pub fn generate_regon9(rng: &mut dyn RngCore) -> String {
    render(&short_digits(rng))
}

pub fn generate_regon14(rng: &mut dyn RngCore) -> String {
    let mut digits = [0_u8; 14];
    digits[..9].copy_from_slice(&short_digits(rng));
    random_digits(rng, &mut digits[9..13]);
    digits[13] = regon14_checksum(&digits[..13]);
    render(&digits)
}

/// Generate a REGON of the requested length (9 or 14).
pub fn generate_regon(length: usize, rng: &mut dyn RngCore) -> Result<String> {
    Ok(match RegonKind::from_length(length)? {
        RegonKind::Short => generate_regon9(rng),
        RegonKind::Long => generate_regon14(rng),
    })
}

fn short_digits(rng: &mut dyn RngCore) -> [u8; 9] {
    let mut digits = [0_u8; 9];
    random_digits(rng, &mut digits[..8]);
    digits[8] = regon9_checksum(&digits[..8]);
    digits
}
