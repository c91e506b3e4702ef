use rand::RngCore;

use crate::faker_rs::LocaleKey;
use crate::generators::{Generator, GeneratorContext, ValueType};

const NAME_LOCALE: LocaleKey = LocaleKey::PlPl;

pub(super) struct WordGenerator;

impl Generator for WordGenerator {
    fn value_type(&self) -> ValueType {
        ValueType::String
    }

    fn generate(&self, ctx: &GeneratorContext<'_>, rng: &mut dyn RngCore) -> String {
        ctx.faker.word(rng)
    }
}

pub(super) struct FirstNameGenerator;

impl Generator for FirstNameGenerator {
    fn value_type(&self) -> ValueType {
        ValueType::FirstName
    }

    fn generate(&self, ctx: &GeneratorContext<'_>, rng: &mut dyn RngCore) -> String {
        ctx.faker.first_name(NAME_LOCALE, rng)
    }
}

pub(super) struct LastNameGenerator;

impl Generator for LastNameGenerator {
    fn value_type(&self) -> ValueType {
        ValueType::LastName
    }

    fn generate(&self, ctx: &GeneratorContext<'_>, rng: &mut dyn RngCore) -> String {
        ctx.faker.last_name(NAME_LOCALE, rng)
    }
}

pub(super) struct EmailGenerator;

impl Generator for EmailGenerator {
    fn value_type(&self) -> ValueType {
        ValueType::Email
    }

    fn generate(&self, ctx: &GeneratorContext<'_>, rng: &mut dyn RngCore) -> String {
        ctx.faker.email(rng)
    }
}
