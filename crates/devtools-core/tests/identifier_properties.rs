//! Property-based tests for identifier generation.
//!
//! Every value drawn from a seeded generator must satisfy its own checksum,
//! and the display form of a NIP must strip back to the canonical digits.

use devtools_core::{
    Nip, generate_nip, generate_regon9, generate_regon14, is_valid_nip, is_valid_regon,
    is_valid_regon9, nip_checksum, regon9_checksum, regon14_checksum, strip_separators,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn digits_of(value: &str) -> Vec<u8> {
    value.bytes().map(|b| b - b'0').collect()
}

proptest! {
    #[test]
    fn generated_nip_satisfies_checksum(seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let nip = generate_nip(&mut rng);
        let digits = digits_of(&strip_separators(&nip));

        prop_assert_eq!(digits.len(), 10);
        let checksum = nip_checksum(&digits[..9]);
        prop_assert_ne!(checksum, 10);
        prop_assert_eq!(checksum, digits[9]);
        prop_assert!(is_valid_nip(&nip));
    }

    #[test]
    fn generated_short_regon_satisfies_checksum(seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let regon = generate_regon9(&mut rng);
        let digits = digits_of(&regon);

        prop_assert_eq!(digits.len(), 9);
        prop_assert_eq!(digits[8], regon9_checksum(&digits[..8]));
        prop_assert!(is_valid_regon(&regon));
    }

    #[test]
    fn generated_long_regon_satisfies_checksum(seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let regon = generate_regon14(&mut rng);
        let digits = digits_of(&regon);

        prop_assert_eq!(digits.len(), 14);
        prop_assert!(is_valid_regon9(&regon[..9]));
        prop_assert_eq!(digits[13], regon14_checksum(&digits[..13]));
        prop_assert!(is_valid_regon(&regon));
    }

    #[test]
    fn nip_format_round_trips(seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let nip = Nip::generate(&mut rng);
        prop_assert_eq!(strip_separators(&nip.formatted()), nip.digits());
    }

    #[test]
    fn arbitrary_text_never_panics(value in ".{0,20}") {
        let _ = is_valid_nip(&value);
        let _ = is_valid_regon(&value);
    }
}
