//! Delimited-text input for batches of workout records.
//!
//! Each line is a workout code followed by that kind's numeric fields, e.g.
//! `RUN,15000,1,75`. Field counts are not checked here; that is left to
//! dispatch so a short line is reported against the record, not the file.
//! Bytes that are not valid UTF-8 are replaced, which leaves the field
//! non-numeric and the record malformed rather than failing the whole read.

use crate::config::InputConfig;
use crate::Result;
use std::io::Read;
use std::path::Path;

/// One unparsed line of input
#[derive(Clone, Debug, PartialEq)]
pub struct RawRecord {
    /// 1-based line number in the source
    pub line: u64,
    pub workout_type: String,
    pub fields: Vec<String>,
}

impl RawRecord {
    /// Comma-joined form used when reporting a bad record
    pub fn raw(&self) -> String {
        std::iter::once(self.workout_type.as_str())
            .chain(self.fields.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Read every record from a reader
pub fn read_records<R: Read>(reader: R, options: &InputConfig) -> Result<Vec<RawRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter_byte()?)
        .has_headers(options.has_headers)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut records = Vec::new();
    for result in csv_reader.byte_records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();

        if record.iter().all(|field| field.is_empty()) {
            tracing::debug!("Skipping empty record at line {}", line);
            continue;
        }

        let mut values = record
            .iter()
            .map(|field| String::from_utf8_lossy(field).into_owned());
        let workout_type = values.next().unwrap_or_default();

        records.push(RawRecord {
            line,
            workout_type,
            fields: values.collect(),
        });
    }

    tracing::info!("Read {} records", records.len());
    Ok(records)
}

/// Read every record from a file
pub fn read_records_from_path(path: &Path, options: &InputConfig) -> Result<Vec<RawRecord>> {
    let file = std::fs::File::open(path)?;
    tracing::info!("Reading workouts from {:?}", path);
    read_records(file, options)
}
