use rand::RngCore;

use devtools_core::{generate_nip, generate_regon9};

use crate::generators::{Generator, GeneratorContext, ValueType};

pub(super) struct NipGenerator;

impl Generator for NipGenerator {
    fn value_type(&self) -> ValueType {
        ValueType::Nip
    }

    fn generate(&self, _ctx: &GeneratorContext<'_>, rng: &mut dyn RngCore) -> String {
        generate_nip(rng)
    }
}

pub(super) struct RegonGenerator;

impl Generator for RegonGenerator {
    fn value_type(&self) -> ValueType {
        ValueType::Regon
    }

    fn generate(&self, _ctx: &GeneratorContext<'_>, rng: &mut dyn RngCore) -> String {
        generate_regon9(rng)
    }
}
