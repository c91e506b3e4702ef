use std::fmt;
use std::str::FromStr;

use rand::RngCore;
use serde::Serialize;
use thiserror::Error;

use crate::faker_rs::FakeProvider;

mod faker;
pub mod primitives;
mod semantic;

pub use primitives::{random_guid, random_int};

/// Closed set of value types a schema column can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ValueType {
    Number,
    String,
    FirstName,
    LastName,
    Email,
    Nip,
    Regon,
    Guid,
}

impl ValueType {
    pub const ALL: [ValueType; 8] = [
        ValueType::Number,
        ValueType::String,
        ValueType::FirstName,
        ValueType::LastName,
        ValueType::Email,
        ValueType::Nip,
        ValueType::Regon,
        ValueType::Guid,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ValueType::Number => "Number",
            ValueType::String => "String",
            ValueType::FirstName => "FirstName",
            ValueType::LastName => "LastName",
            ValueType::Email => "Email",
            ValueType::Nip => "Nip",
            ValueType::Regon => "Regon",
            ValueType::Guid => "Guid",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown value type '{tag}'")]
pub struct ParseValueTypeError {
    pub tag: String,
}

impl FromStr for ValueType {
    type Err = ParseValueTypeError;

    /// Case-insensitive exact match on the variant name.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        ValueType::ALL
            .into_iter()
            .find(|value_type| value_type.as_str().eq_ignore_ascii_case(tag))
            .ok_or_else(|| ParseValueTypeError {
                tag: tag.to_string(),
            })
    }
}

pub fn resolve(tag: &str) -> Result<ValueType, ParseValueTypeError> {
    tag.parse()
}

/// Shared collaborators handed to every generator call.
#[derive(Clone, Copy)]
pub struct GeneratorContext<'a> {
    pub faker: &'a dyn FakeProvider,
}

/// Produces one fresh random value per call.
pub trait Generator {
    fn value_type(&self) -> ValueType;

    fn generate(&self, ctx: &GeneratorContext<'_>, rng: &mut dyn RngCore) -> String;
}

/// Build the generator for a value type.
pub fn create(value_type: ValueType) -> Box<dyn Generator> {
    match value_type {
        ValueType::Number => Box::new(primitives::NumberGenerator),
        ValueType::String => Box::new(faker::WordGenerator),
        ValueType::FirstName => Box::new(faker::FirstNameGenerator),
        ValueType::LastName => Box::new(faker::LastNameGenerator),
        ValueType::Email => Box::new(faker::EmailGenerator),
        ValueType::Nip => Box::new(semantic::NipGenerator),
        ValueType::Regon => Box::new(semantic::RegonGenerator),
        ValueType::Guid => Box::new(primitives::GuidGenerator),
    }
}
