use std::cell::RefCell;

use devtools_core::{is_valid_nip, is_valid_regon9};
use devtools_generate::{
    FakeProvider, FakeRsAdapter, GeneratorContext, LocaleKey, ParseValueTypeError, ValueType,
    create, random_int, resolve,
};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(Debug, Default)]
struct RecordingFaker {
    locales: RefCell<Vec<LocaleKey>>,
}

impl FakeProvider for RecordingFaker {
    fn full_name(&self, _rng: &mut dyn RngCore) -> String {
        "Full Name".to_string()
    }

    fn first_name(&self, locale: LocaleKey, _rng: &mut dyn RngCore) -> String {
        self.locales.borrow_mut().push(locale);
        "Zofia".to_string()
    }

    fn last_name(&self, locale: LocaleKey, _rng: &mut dyn RngCore) -> String {
        self.locales.borrow_mut().push(locale);
        "Nowak".to_string()
    }

    fn word(&self, _rng: &mut dyn RngCore) -> String {
        "lorem".to_string()
    }

    fn email(&self, _rng: &mut dyn RngCore) -> String {
        "user@example.com".to_string()
    }

    fn user_name(&self, _rng: &mut dyn RngCore) -> String {
        "user".to_string()
    }
}

#[test]
fn resolve_is_case_insensitive_and_exact() {
    assert_eq!(resolve("FirstName"), Ok(ValueType::FirstName));
    assert_eq!(resolve("firstname"), Ok(ValueType::FirstName));
    assert_eq!(resolve("NIP"), Ok(ValueType::Nip));
    assert_eq!(resolve("guid"), Ok(ValueType::Guid));

    for tag in ["", "Numbers", "first_name", " Nip", "Phone"] {
        assert_eq!(
            resolve(tag),
            Err(ParseValueTypeError {
                tag: tag.to_string()
            })
        );
    }
}

#[test]
fn every_value_type_has_a_generator() {
    for value_type in ValueType::ALL {
        assert_eq!(create(value_type).value_type(), value_type);
        assert_eq!(resolve(value_type.as_str()), Ok(value_type));
    }
}

#[test]
fn number_stays_below_one_hundred() {
    let ctx = GeneratorContext {
        faker: &FakeRsAdapter,
    };
    let generator = create(ValueType::Number);
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    for _ in 0..1000 {
        let value: i64 = generator
            .generate(&ctx, &mut rng)
            .parse()
            .expect("decimal integer");
        assert!((0..100).contains(&value));
    }
}

#[test]
fn identifier_generators_emit_valid_values() {
    let ctx = GeneratorContext {
        faker: &FakeRsAdapter,
    };
    let nip = create(ValueType::Nip);
    let regon = create(ValueType::Regon);
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    for _ in 0..200 {
        let value = nip.generate(&ctx, &mut rng);
        assert_eq!(value.matches('-').count(), 3, "{value}");
        assert!(is_valid_nip(&value), "{value}");

        let value = regon.generate(&ctx, &mut rng);
        assert_eq!(value.len(), 9, "{value}");
        assert!(is_valid_regon9(&value), "{value}");
    }
}

#[test]
fn guid_is_hyphenated_version_four() {
    let ctx = GeneratorContext {
        faker: &FakeRsAdapter,
    };
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let value = create(ValueType::Guid).generate(&ctx, &mut rng);
    assert_eq!(value.len(), 36);
    assert_eq!(value, value.to_lowercase());
    let parsed = uuid::Uuid::parse_str(&value).expect("valid uuid");
    assert_eq!(parsed.get_version_num(), 4);
}

#[test]
fn faker_backed_generators_delegate_with_polish_names() {
    let faker = RecordingFaker::default();
    let ctx = GeneratorContext { faker: &faker };
    let mut rng = ChaCha8Rng::seed_from_u64(4);

    assert_eq!(create(ValueType::FirstName).generate(&ctx, &mut rng), "Zofia");
    assert_eq!(create(ValueType::LastName).generate(&ctx, &mut rng), "Nowak");
    assert_eq!(create(ValueType::String).generate(&ctx, &mut rng), "lorem");
    assert_eq!(
        create(ValueType::Email).generate(&ctx, &mut rng),
        "user@example.com"
    );
    assert_eq!(*faker.locales.borrow(), vec![LocaleKey::PlPl, LocaleKey::PlPl]);
}

#[test]
fn real_faker_values_look_right() {
    let ctx = GeneratorContext {
        faker: &FakeRsAdapter,
    };
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    for _ in 0..50 {
        let word = create(ValueType::String).generate(&ctx, &mut rng);
        assert!(!word.is_empty());
        assert_eq!(word, word.to_lowercase());

        let email = create(ValueType::Email).generate(&ctx, &mut rng);
        assert_eq!(email.matches('@').count(), 1, "{email}");
    }
}

#[test]
fn same_seed_same_values() {
    let ctx = GeneratorContext {
        faker: &FakeRsAdapter,
    };
    let sample = |seed: u64| -> Vec<String> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        ValueType::ALL
            .into_iter()
            .map(|value_type| create(value_type).generate(&ctx, &mut rng))
            .collect()
    };
    assert_eq!(sample(42), sample(42));
}

#[test]
fn random_int_uses_half_open_range() {
    let mut rng = ChaCha8Rng::seed_from_u64(6);
    for _ in 0..200 {
        let value = random_int(&mut rng, 1, 3).expect("valid range");
        assert!(value == 1 || value == 2);
    }
    assert!(random_int(&mut rng, 5, 5).is_err());
    assert!(random_int(&mut rng, 10, 1).is_err());
}
