use std::path::{Path, PathBuf};
use std::time::Instant;

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::errors::GenerationError;
use crate::faker_rs::{FakeProvider, FakeRsAdapter};
use crate::generators::{GeneratorContext, create};
use crate::model::{ColumnReport, GenerateOptions, GenerationReport};
use crate::output::csv::write_rows_csv;
use crate::schema::ColumnSchema;

const OUTPUT_SUFFIX: &str = "-generated.csv";

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub output_path: PathBuf,
    pub report: GenerationReport,
}

/// Entry point for generating a CSV file from a column schema.
#[derive(Debug)]
pub struct GenerationEngine {
    options: GenerateOptions,
    faker: Box<dyn FakeProvider>,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self {
            options,
            faker: Box::new(FakeRsAdapter),
        }
    }

    /// Replace the fake-data provider used by name and email columns.
    pub fn with_faker(mut self, faker: Box<dyn FakeProvider>) -> Self {
        self.faker = faker;
        self
    }

    /// Load the schema, resolve every column and write the output file.
    ///
    /// Arguments are checked before any file is touched, and the output file
    /// is only opened once the schema resolved completely.
    pub fn run(&self) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        let started_at = chrono::Utc::now();
        let divider = self.validate_options()?;

        let schema_path = self.options.schema_path.as_path();
        let schema = ColumnSchema::load(schema_path)?;
        info!(
            event = "schema_loaded",
            path = %schema_path.display(),
            columns = schema.len()
        );

        let generators: Vec<_> = schema
            .columns()
            .iter()
            .map(|column| create(column.value_type))
            .collect();
        for (column, generator) in schema.columns().iter().zip(&generators) {
            debug!(
                header = %column.header,
                value_type = %generator.value_type(),
                "column resolved"
            );
        }

        let output_path = output_path_for(schema_path);
        let mut rng = self.rng();
        let ctx = GeneratorContext {
            faker: self.faker.as_ref(),
        };
        let rows = (0..self.options.count).map(|_| {
            generators
                .iter()
                .map(|generator| generator.generate(&ctx, rng.as_mut()))
                .collect::<Vec<String>>()
        });

        let summary = write_rows_csv(&output_path, &schema.headers(), rows, divider)?;
        let duration_ms = start.elapsed().as_millis() as u64;
        info!(
            event = "csv_written",
            path = %output_path.display(),
            rows = summary.rows,
            bytes = summary.bytes,
            duration_ms
        );

        let report = GenerationReport {
            schema_path: schema_path.to_path_buf(),
            output_path: output_path.clone(),
            columns: schema
                .columns()
                .iter()
                .map(|column| ColumnReport {
                    header: column.header.clone(),
                    value_type: column.value_type,
                })
                .collect(),
            rows_written: summary.rows,
            bytes_written: summary.bytes,
            column_divider: self.options.column_divider,
            seed: self.options.seed,
            started_at,
            duration_ms,
        };

        Ok(GenerationResult {
            output_path,
            report,
        })
    }

    fn validate_options(&self) -> Result<u8, GenerationError> {
        if self.options.count < 1 {
            return Err(GenerationError::InvalidArgument(
                "count must be greater than 0".to_string(),
            ));
        }
        let divider = self.options.column_divider;
        if !divider.is_ascii() || divider == '\n' || divider == '\r' {
            return Err(GenerationError::InvalidArgument(format!(
                "column divider must be a single ASCII character other than a line break, got {divider:?}"
            )));
        }
        Ok(divider as u8)
    }

    fn rng(&self) -> Box<dyn RngCore> {
        match self.options.seed {
            Some(seed) => Box::new(ChaCha8Rng::seed_from_u64(seed)),
            None => Box::new(ChaCha8Rng::from_os_rng()),
        }
    }
}

/// `dir/foo.csv` becomes `dir/foo-generated.csv`.
pub fn output_path_for(schema_path: &Path) -> PathBuf {
    let stem = schema_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "schema".to_string());
    schema_path.with_file_name(format!("{stem}{OUTPUT_SUFFIX}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_replaces_extension() {
        assert_eq!(
            output_path_for(Path::new("data/foo.csv")),
            PathBuf::from("data/foo-generated.csv")
        );
        assert_eq!(
            output_path_for(Path::new("schema")),
            PathBuf::from("schema-generated.csv")
        );
        assert_eq!(
            output_path_for(Path::new("a/b.schema.txt")),
            PathBuf::from("a/b.schema-generated.csv")
        );
    }
}
