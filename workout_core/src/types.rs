//! Core domain types for the workout calculator.
//!
//! This module defines the fundamental types used throughout the system:
//! - Workout kinds and their wire codes
//! - Validated common workout input
//! - The immutable calculation summary

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Workout Kinds
// ============================================================================

/// Type of workout, fixed by the supported codes
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutKind {
    Swimming,
    Running,
    SportsWalking,
}

impl WorkoutKind {
    /// Every supported kind, in the order codes are documented
    pub const ALL: [WorkoutKind; 3] = [
        WorkoutKind::Swimming,
        WorkoutKind::Running,
        WorkoutKind::SportsWalking,
    ];

    /// Code used in input records
    pub fn code(self) -> &'static str {
        match self {
            WorkoutKind::Swimming => "SWM",
            WorkoutKind::Running => "RUN",
            WorkoutKind::SportsWalking => "WLK",
        }
    }

    /// Label shown in reports
    pub fn display_name(self) -> &'static str {
        match self {
            WorkoutKind::Swimming => "Swimming",
            WorkoutKind::Running => "Running",
            WorkoutKind::SportsWalking => "SportsWalking",
        }
    }

    /// Names of the numeric fields a record of this kind carries, in order
    pub fn field_names(self) -> &'static [&'static str] {
        match self {
            WorkoutKind::Swimming => &["action", "duration", "weight", "length_pool", "count_pool"],
            WorkoutKind::Running => &["action", "duration", "weight"],
            WorkoutKind::SportsWalking => &["action", "duration", "weight", "height"],
        }
    }

    pub fn field_count(self) -> usize {
        self.field_names().len()
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for WorkoutKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let code = s.trim();
        WorkoutKind::ALL
            .into_iter()
            .find(|kind| kind.code() == code)
            .ok_or_else(|| Error::UnknownWorkoutType(code.to_string()))
    }
}

// ============================================================================
// Input and Summary Types
// ============================================================================

/// Fields shared by every workout kind
#[derive(Clone, Debug, PartialEq)]
pub struct WorkoutInput {
    /// Steps or strokes performed
    pub action: u32,
    /// Hours
    pub duration: f64,
    /// Kilograms
    pub weight: f64,
}

impl WorkoutInput {
    /// Build a validated input; duration and weight must be positive and finite
    pub fn new(action: u32, duration: f64, weight: f64) -> Result<Self> {
        Ok(Self {
            action,
            duration: require_positive("duration", duration)?,
            weight: require_positive("weight", weight)?,
        })
    }
}

/// Result of a single calculation, consumed once by the reporter
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct WorkoutSummary {
    pub workout_type: &'static str,
    pub duration: f64,
    pub distance: f64,
    pub speed: f64,
    pub calories: f64,
}

/// Reject zero, negative and non-finite values before they reach a division
pub(crate) fn require_positive(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(Error::InvalidDomainValue { field, value })
    }
}

/// Reject results that overflowed or went undefined during a calculation
pub(crate) fn require_finite(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::InvalidDomainValue { field, value })
    }
}
