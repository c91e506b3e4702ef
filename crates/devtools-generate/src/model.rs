use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::generators::ValueType;

pub const DEFAULT_COLUMN_DIVIDER: char = ';';
pub const DEFAULT_SCHEMA_PATH: &str = "schema.csv";

/// Options for the CSV generation engine.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Schema file; the output lands next to it.
    pub schema_path: PathBuf,
    /// Number of data rows, header excluded. Must be at least 1.
    pub count: usize,
    /// Output field separator. Must be a single ASCII character.
    pub column_divider: char,
    /// Fixed seed for reproducible output.
    pub seed: Option<u64>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            schema_path: PathBuf::from(DEFAULT_SCHEMA_PATH),
            count: 1,
            column_divider: DEFAULT_COLUMN_DIVIDER,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ColumnReport {
    pub header: String,
    pub value_type: ValueType,
}

/// Report for a generation run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    pub schema_path: PathBuf,
    pub output_path: PathBuf,
    pub columns: Vec<ColumnReport>,
    pub rows_written: u64,
    pub bytes_written: u64,
    pub column_divider: char,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub started_at: DateTime<Utc>,
    pub duration_ms: u64,
}
