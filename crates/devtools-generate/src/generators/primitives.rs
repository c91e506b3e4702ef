use rand::{Rng, RngCore};

use devtools_core::Error;

use crate::generators::{Generator, GeneratorContext, ValueType};

const NUMBER_MIN: i64 = 0;
const NUMBER_MAX: i64 = 100;

/// Uniform integer in `[min, max)`.
pub fn random_int(rng: &mut dyn RngCore, min: i64, max: i64) -> Result<i64, Error> {
    if min >= max {
        return Err(Error::InvalidArgument(format!(
            "min ({min}) must be lower than max ({max})"
        )));
    }
    Ok(rng.random_range(min..max))
}

pub(super) struct NumberGenerator;

impl Generator for NumberGenerator {
    fn value_type(&self) -> ValueType {
        ValueType::Number
    }

    fn generate(&self, _ctx: &GeneratorContext<'_>, rng: &mut dyn RngCore) -> String {
        rng.random_range(NUMBER_MIN..NUMBER_MAX).to_string()
    }
}

pub(super) struct GuidGenerator;

impl Generator for GuidGenerator {
    fn value_type(&self) -> ValueType {
        ValueType::Guid
    }

    fn generate(&self, _ctx: &GeneratorContext<'_>, rng: &mut dyn RngCore) -> String {
        random_guid(rng)
    }
}

/// Version 4 UUID drawn from the supplied RNG, lowercase hyphenated.
pub fn random_guid(rng: &mut dyn RngCore) -> String {
    let bytes: [u8; 16] = rng.random();
    uuid::Builder::from_random_bytes(bytes)
        .into_uuid()
        .to_string()
}
