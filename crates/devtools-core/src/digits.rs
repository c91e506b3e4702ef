use rand::{Rng, RngCore};

/// Parse a string made only of ASCII digits with the exact expected length.
pub(crate) fn parse_exact(value: &str, len: usize) -> Option<Vec<u8>> {
    if value.len() != len {
        return None;
    }
    value
        .bytes()
        .map(|byte| byte.is_ascii_digit().then(|| byte - b'0'))
        .collect()
}

pub(crate) fn weighted_mod11(digits: &[u8], weights: &[u32]) -> u8 {
    let sum: u32 = digits
        .iter()
        .zip(weights)
        .map(|(digit, weight)| u32::from(*digit) * weight)
        .sum();
    (sum % 11) as u8
}

pub(crate) fn random_digits(rng: &mut dyn RngCore, out: &mut [u8]) {
    for digit in out.iter_mut() {
        *digit = rng.random_range(0..=9);
    }
}

pub(crate) fn push_number(out: &mut Vec<u8>, value: u32, width: usize) {
    let text = format!("{value:0width$}");
    out.extend(text.bytes().map(|byte| byte - b'0'));
}

pub(crate) fn render(digits: &[u8]) -> String {
    digits.iter().map(|d| char::from(b'0' + *d)).collect()
}
