//! Batch processing of workout records.
//!
//! Records are handled one at a time, in input order. A bad record becomes a
//! `Skipped` outcome and the batch moves on; only fatal errors stop it.

use crate::dispatch::{read_package, read_raw_package};
use crate::{Error, RawRecord, Result, WorkoutSummary};

/// What happened to a single record
#[derive(Debug)]
pub enum RecordOutcome {
    Reported {
        line: u64,
        summary: WorkoutSummary,
    },
    Skipped {
        line: u64,
        record: String,
        error: Error,
    },
}

impl RecordOutcome {
    pub fn summary(&self) -> Option<&WorkoutSummary> {
        match self {
            RecordOutcome::Reported { summary, .. } => Some(summary),
            RecordOutcome::Skipped { .. } => None,
        }
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, RecordOutcome::Skipped { .. })
    }
}

/// Process records read from delimited input
pub fn process_records(records: &[RawRecord]) -> Result<Vec<RecordOutcome>> {
    records
        .iter()
        .map(|record| {
            let fields: Vec<&str> = record.fields.iter().map(String::as_str).collect();
            let result = read_raw_package(&record.workout_type, &fields)
                .and_then(|workout| workout.show_training_info());
            classify(record.line, || record.raw(), result)
        })
        .collect()
}

/// Process in-memory packages; `line` is the 1-based package index
pub fn process_packages(packages: &[(&str, Vec<f64>)]) -> Result<Vec<RecordOutcome>> {
    packages
        .iter()
        .zip(1u64..)
        .map(|((code, data), line)| {
            let result =
                read_package(code, data).and_then(|workout| workout.show_training_info());
            classify(line, || describe_package(code, data), result)
        })
        .collect()
}

fn classify(
    line: u64,
    record: impl FnOnce() -> String,
    result: Result<WorkoutSummary>,
) -> Result<RecordOutcome> {
    match result {
        Ok(summary) => {
            tracing::debug!("Record {} reported as {}", line, summary.workout_type);
            Ok(RecordOutcome::Reported { line, summary })
        }
        Err(error) if error.is_record_error() => {
            let record = record();
            tracing::warn!("Skipping record {} ({}): {}", line, record, error);
            Ok(RecordOutcome::Skipped {
                line,
                record,
                error,
            })
        }
        Err(error) => {
            tracing::error!("Aborting batch at record {}: {}", line, error);
            Err(error)
        }
    }
}

fn describe_package(code: &str, data: &[f64]) -> String {
    std::iter::once(code.to_string())
        .chain(data.iter().map(|v| v.to_string()))
        .collect::<Vec<_>>()
        .join(",")
}
