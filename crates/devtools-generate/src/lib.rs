//! Value generation and schema-driven CSV output for devtools.
//!
//! A two-line schema (headers, then value types) is resolved into a list of
//! generators, and the engine streams the requested number of rows into a
//! `<stem>-generated.csv` file next to the schema.

pub mod engine;
pub mod errors;
pub mod faker_rs;
pub mod generators;
pub mod model;
pub mod output;
pub mod schema;

pub use engine::{GenerationEngine, GenerationResult, output_path_for};
pub use errors::GenerationError;
pub use faker_rs::{FakeProvider, FakeRsAdapter, LocaleKey};
pub use generators::{
    Generator, GeneratorContext, ParseValueTypeError, ValueType, create, random_guid, random_int,
    resolve,
};
pub use model::{ColumnReport, GenerateOptions, GenerationReport};
pub use schema::{ColumnSchema, ColumnSpec, SCHEMA_DELIMITER};
