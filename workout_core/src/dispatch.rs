//! Dispatch from workout codes to calculation variants.
//!
//! A record is a code plus a flat list of numbers in the kind's fixed order.
//! The code is resolved first, then the field count is checked, then every
//! field is validated. Nothing is constructed until all checks pass.

use crate::training::{Running, SportsWalking, Swimming, Workout};
use crate::{Error, Result, WorkoutInput, WorkoutKind};

/// Build a workout from a code and its numeric fields
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Workout> {
    let kind: WorkoutKind = workout_type.parse()?;
    build(kind, data, || format_record(kind, data))
}

/// Build a workout from a code and its fields still in text form
///
/// Unknown codes are reported before any field is looked at.
pub fn read_raw_package(workout_type: &str, fields: &[&str]) -> Result<Workout> {
    let kind: WorkoutKind = workout_type.parse()?;
    let raw_record = || {
        std::iter::once(kind.code())
            .chain(fields.iter().copied())
            .collect::<Vec<_>>()
            .join(",")
    };

    let data = fields
        .iter()
        .zip(kind.field_names().iter().chain(std::iter::repeat(&"extra")))
        .map(|(field, name)| {
            field.trim().parse::<f64>().map_err(|_| Error::MalformedInput {
                record: raw_record(),
                reason: format!("{} is not a number: {:?}", name, field),
            })
        })
        .collect::<Result<Vec<f64>>>()?;

    build(kind, &data, raw_record)
}

/// The three reference workouts: swimming, running, sports walking
pub fn demo_packages() -> Vec<(&'static str, Vec<f64>)> {
    vec![
        ("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        ("RUN", vec![15000.0, 1.0, 75.0]),
        ("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

fn build(kind: WorkoutKind, data: &[f64], record: impl Fn() -> String) -> Result<Workout> {
    if data.len() != kind.field_count() {
        return Err(Error::MalformedInput {
            record: record(),
            reason: format!(
                "{} expects {} fields ({}), got {}",
                kind.display_name(),
                kind.field_count(),
                kind.field_names().join(", "),
                data.len()
            ),
        });
    }

    if let Some((name, value)) = kind
        .field_names()
        .iter()
        .zip(data)
        .find(|(_, value)| !value.is_finite())
    {
        return Err(Error::MalformedInput {
            record: record(),
            reason: format!("{} is not a finite number: {}", name, value),
        });
    }

    let action = as_count("action", data[0], &record)?;
    let input = WorkoutInput::new(action, data[1], data[2])?;

    let workout = match kind {
        WorkoutKind::Running => Workout::Running(Running::new(input)),
        WorkoutKind::SportsWalking => Workout::SportsWalking(SportsWalking::new(input, data[3])?),
        WorkoutKind::Swimming => {
            let count_pool = as_count("count_pool", data[4], &record)?;
            Workout::Swimming(Swimming::new(input, data[3], count_pool)?)
        }
    };

    tracing::debug!("Dispatched {} record to {:?}", kind.code(), workout.kind());
    Ok(workout)
}

/// Counts must be whole and non-negative
fn as_count(field: &'static str, value: f64, record: &impl Fn() -> String) -> Result<u32> {
    if value < 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(Error::MalformedInput {
            record: record(),
            reason: format!("{} must be a whole non-negative count, got {}", field, value),
        });
    }
    Ok(value as u32)
}

fn format_record(kind: WorkoutKind, data: &[f64]) -> String {
    std::iter::once(kind.code().to_string())
        .chain(data.iter().map(|v| v.to_string()))
        .collect::<Vec<_>>()
        .join(",")
}
