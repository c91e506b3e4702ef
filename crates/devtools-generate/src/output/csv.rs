use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::errors::GenerationError;

/// Totals for a finished CSV write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvWriteSummary {
    pub rows: u64,
    pub bytes: u64,
}

/// Write a header row followed by `rows` into `path`, fields joined by
/// `divider`.
///
/// Fields are written verbatim: nothing is quoted or escaped, so a value that
/// contains the divider will shift columns for a CSV reader. A record made of
/// a single empty field is written as an empty line.
///
/// The data goes to a temporary sibling file first and is renamed over `path`
/// only once every row has been flushed, so a failed run leaves any previous
/// output untouched and no partial file behind.
pub fn write_rows_csv<I>(
    path: &Path,
    header: &[String],
    rows: I,
    divider: u8,
) -> Result<CsvWriteSummary, GenerationError>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let tmp_path = temp_path(path)?;
    match write_to(&tmp_path, header, rows, divider) {
        Ok(summary) => match std::fs::rename(&tmp_path, path) {
            Ok(()) => Ok(summary),
            Err(err) => {
                let _ = std::fs::remove_file(&tmp_path);
                Err(err.into())
            }
        },
        Err(err) => {
            let _ = std::fs::remove_file(&tmp_path);
            Err(err)
        }
    }
}

fn write_to<I>(
    path: &Path,
    header: &[String],
    rows: I,
    divider: u8,
) -> Result<CsvWriteSummary, GenerationError>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let file = OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .open(path)?;
    let mut counting = CountingWriter::new(BufWriter::new(file));
    let mut builder = csv::WriterBuilder::new();
    builder
        .has_headers(false)
        .delimiter(divider)
        .quote_style(csv::QuoteStyle::Never);

    let mut writer = builder.from_writer(&mut counting);
    writer = write_record(&builder, writer, header)?;

    let mut written = 0_u64;
    for record in rows {
        writer = write_record(&builder, writer, &record)?;
        written += 1;
    }

    writer.into_inner().map_err(|err| err.into_error())?;
    let bytes = counting.bytes_written();
    let file = counting.into_inner().into_inner().map_err(|err| err.into_error())?;
    file.sync_all()?;

    Ok(CsvWriteSummary {
        rows: written,
        bytes,
    })
}

// The csv writer quotes a lone empty field even with `QuoteStyle::Never`.
fn write_record<'w, W: Write>(
    builder: &csv::WriterBuilder,
    mut writer: csv::Writer<&'w mut W>,
    record: &[String],
) -> Result<csv::Writer<&'w mut W>, GenerationError> {
    if matches!(record, [only] if only.is_empty()) {
        let inner = writer.into_inner().map_err(|err| err.into_error())?;
        inner.write_all(b"\n")?;
        return Ok(builder.from_writer(inner));
    }
    writer.write_record(record)?;
    Ok(writer)
}

fn temp_path(path: &Path) -> Result<PathBuf, GenerationError> {
    let file_name = path.file_name().ok_or_else(|| {
        GenerationError::InvalidArgument(format!("invalid output path: {}", path.display()))
    })?;
    let tmp_name = format!("{}.tmp", file_name.to_string_lossy());
    Ok(path.with_file_name(tmp_name))
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }

    fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
