use std::io::ErrorKind;
use std::path::Path;

use serde::Serialize;

use crate::errors::GenerationError;
use crate::generators::{ValueType, resolve};

/// Schema files are always `;`-separated, whatever the output divider is.
pub const SCHEMA_DELIMITER: char = ';';

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnSpec {
    pub header: String,
    pub value_type: ValueType,
}

/// Ordered column definitions read from a two-line schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnSchema {
    columns: Vec<ColumnSpec>,
}

impl ColumnSchema {
    pub fn load(path: &Path) -> Result<Self, GenerationError> {
        let contents = std::fs::read_to_string(path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => GenerationError::FileNotFound(path.to_path_buf()),
            _ => GenerationError::Io(err),
        })?;
        Self::parse(&contents)
    }

    /// Parse header names from the first line and value types from the
    /// second. Resolution stops at the first unknown type.
    pub fn parse(contents: &str) -> Result<Self, GenerationError> {
        let lines: Vec<&str> = contents.lines().collect();
        if lines.len() < 2 {
            return Err(GenerationError::SchemaTooShort { lines: lines.len() });
        }

        let headers: Vec<&str> = lines[0].split(SCHEMA_DELIMITER).collect();
        let tags: Vec<&str> = lines[1].split(SCHEMA_DELIMITER).collect();
        if headers.len() != tags.len() {
            return Err(GenerationError::HeaderTypeMismatch {
                headers: headers.len(),
                types: tags.len(),
            });
        }

        let mut columns = Vec::with_capacity(headers.len());
        for (idx, (header, tag)) in headers.iter().zip(&tags).enumerate() {
            let tag = tag.trim();
            let value_type = resolve(tag).map_err(|err| GenerationError::UnknownValueType {
                column: idx + 1,
                tag: err.tag,
            })?;
            columns.push(ColumnSpec {
                header: (*header).to_string(),
                value_type,
            });
        }

        Ok(Self { columns })
    }

    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    pub fn headers(&self) -> Vec<String> {
        self.columns.iter().map(|col| col.header.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
