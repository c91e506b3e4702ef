//! Fake-data provider backed by the `fake` crate.

mod adapter;
pub mod locales;
mod pl_pl;

pub use adapter::{DEFAULT_EMAIL_DOMAIN, FakeProvider, FakeRsAdapter};
pub use locales::LocaleKey;
