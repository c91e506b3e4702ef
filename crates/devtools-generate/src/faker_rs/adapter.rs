use std::fmt;

use fake::Fake;
use fake::faker::internet::en::{SafeEmail, Username};
use fake::faker::lorem::en::Word;
use fake::faker::name::en::{FirstName, LastName, Name};
use rand::seq::IndexedRandom;
use rand::RngCore;

use super::locales::LocaleKey;
use super::pl_pl;

pub const DEFAULT_EMAIL_DOMAIN: &str = "example.com";

/// Source of human-looking fake values.
///
/// Every call draws from the supplied RNG, so a seeded RNG makes the
/// sequence of values reproducible.
pub trait FakeProvider: fmt::Debug {
    fn full_name(&self, rng: &mut dyn RngCore) -> String;
    fn first_name(&self, locale: LocaleKey, rng: &mut dyn RngCore) -> String;
    fn last_name(&self, locale: LocaleKey, rng: &mut dyn RngCore) -> String;
    fn word(&self, rng: &mut dyn RngCore) -> String;
    fn email(&self, rng: &mut dyn RngCore) -> String;
    fn user_name(&self, rng: &mut dyn RngCore) -> String;

    /// Email with an optional domain override.
    ///
    /// No domain, an empty one, or `example.com` falls back to `email()`.
    fn email_with_domain(&self, domain: Option<&str>, rng: &mut dyn RngCore) -> String {
        match domain.map(str::trim) {
            None | Some("") | Some(DEFAULT_EMAIL_DOMAIN) => self.email(rng),
            Some(domain) => format!("{}@{domain}", self.user_name(rng)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FakeRsAdapter;

impl FakeProvider for FakeRsAdapter {
    fn full_name(&self, rng: &mut dyn RngCore) -> String {
        Name().fake_with_rng(rng)
    }

    fn first_name(&self, locale: LocaleKey, rng: &mut dyn RngCore) -> String {
        match locale {
            LocaleKey::EnUs => FirstName().fake_with_rng(rng),
            LocaleKey::PlPl => pick(pl_pl::FIRST_NAMES, rng, "Jan"),
        }
    }

    fn last_name(&self, locale: LocaleKey, rng: &mut dyn RngCore) -> String {
        match locale {
            LocaleKey::EnUs => LastName().fake_with_rng(rng),
            LocaleKey::PlPl => pick(pl_pl::LAST_NAMES, rng, "Kowalski"),
        }
    }

    fn word(&self, rng: &mut dyn RngCore) -> String {
        let word: String = Word().fake_with_rng(rng);
        word.to_lowercase()
    }

    fn email(&self, rng: &mut dyn RngCore) -> String {
        SafeEmail().fake_with_rng(rng)
    }

    fn user_name(&self, rng: &mut dyn RngCore) -> String {
        Username().fake_with_rng(rng)
    }
}

fn pick(values: &[&str], rng: &mut dyn RngCore, fallback: &str) -> String {
    values.choose(rng).copied().unwrap_or(fallback).to_string()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn polish_names_come_from_builtin_tables() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..50 {
            let first = FakeRsAdapter.first_name(LocaleKey::PlPl, &mut rng);
            let last = FakeRsAdapter.last_name(LocaleKey::PlPl, &mut rng);
            assert!(pl_pl::FIRST_NAMES.contains(&first.as_str()));
            assert!(pl_pl::LAST_NAMES.contains(&last.as_str()));
        }
    }

    #[test]
    fn custom_domain_uses_user_name() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let email = FakeRsAdapter.email_with_domain(Some("firma.pl"), &mut rng);
        let (user, domain) = email.split_once('@').expect("email has an @");
        assert!(!user.is_empty());
        assert_eq!(domain, "firma.pl");
    }

    #[test]
    fn default_domain_falls_back_to_provider_email() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for domain in [None, Some(""), Some("example.com")] {
            let email = FakeRsAdapter.email_with_domain(domain, &mut rng);
            assert!(email.contains('@'), "{email}");
        }
    }
}
