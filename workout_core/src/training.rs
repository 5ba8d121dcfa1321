//! Calculation variants for each workout kind.
//!
//! Every variant derives distance from its action count and step length,
//! mean speed from distance over duration, and calories from its own formula:
//! - Running: speed-scaled per-minute burn
//! - Sports walking: weight and height based per-minute burn
//! - Swimming: pool geometry drives speed, and speed drives burn

use crate::types::{require_finite, require_positive};
use crate::{Error, Result, WorkoutInput, WorkoutKind, WorkoutSummary};

/// Meters in a kilometer
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in an hour
pub const MIN_IN_H: f64 = 60.0;
/// Default step length in meters (running, walking)
pub const LEN_STEP: f64 = 0.65;

/// Shared calculation contract
pub trait Training {
    /// Common input fields
    fn input(&self) -> &WorkoutInput;

    /// Label used in reports
    fn display_name(&self) -> &'static str;

    /// Meters covered per action
    fn step_length(&self) -> f64 {
        LEN_STEP
    }

    /// Distance in kilometers
    fn distance(&self) -> f64 {
        f64::from(self.input().action) * self.step_length() / M_IN_KM
    }

    /// Mean speed in km/h
    fn mean_speed(&self) -> f64 {
        self.distance() / self.input().duration
    }

    /// Calories burned over the whole workout
    fn spent_calories(&self) -> Result<f64> {
        Err(Error::NotImplemented(self.display_name()))
    }

    /// Compute distance, speed and calories once each, in that order
    ///
    /// Inputs that pass validation can still overflow (a subnormal duration,
    /// an enormous weight); such results are rejected rather than reported.
    fn show_training_info(&self) -> Result<WorkoutSummary> {
        let distance = self.distance();
        let speed = self.mean_speed();
        let calories = self.spent_calories()?;

        Ok(WorkoutSummary {
            workout_type: self.display_name(),
            duration: self.input().duration,
            distance: require_finite("distance", distance)?,
            speed: require_finite("speed", speed)?,
            calories: require_finite("calories", calories)?,
        })
    }
}

// ============================================================================
// Running
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct Running {
    input: WorkoutInput,
}

impl Running {
    pub const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;

    pub fn new(input: WorkoutInput) -> Self {
        Self { input }
    }
}

impl Training for Running {
    fn input(&self) -> &WorkoutInput {
        &self.input
    }

    fn display_name(&self) -> &'static str {
        WorkoutKind::Running.display_name()
    }

    fn spent_calories(&self) -> Result<f64> {
        Ok((Self::CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed()
            + Self::CALORIES_MEAN_SPEED_SHIFT)
            * self.input.weight
            / M_IN_KM
            * self.input.duration
            * MIN_IN_H)
    }
}

// ============================================================================
// Sports Walking
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct SportsWalking {
    input: WorkoutInput,
    /// Centimeters
    height: f64,
}

impl SportsWalking {
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    pub const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
    /// km/h to m/s, rounded to three places
    pub const KMH_IN_MSEC: f64 = 0.278;
    pub const CM_IN_M: f64 = 100.0;

    pub fn new(input: WorkoutInput, height: f64) -> Result<Self> {
        Ok(Self {
            input,
            height: require_positive("height", height)?,
        })
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Training for SportsWalking {
    fn input(&self) -> &WorkoutInput {
        &self.input
    }

    fn display_name(&self) -> &'static str {
        WorkoutKind::SportsWalking.display_name()
    }

    fn spent_calories(&self) -> Result<f64> {
        let speed_mps = self.mean_speed() * Self::KMH_IN_MSEC;
        let height_m = self.height / Self::CM_IN_M;

        Ok((Self::CALORIES_WEIGHT_MULTIPLIER * self.input.weight
            + (speed_mps.powi(2) / height_m)
                * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER
                * self.input.weight)
            * self.input.duration
            * MIN_IN_H)
    }
}

// ============================================================================
// Swimming
// ============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct Swimming {
    input: WorkoutInput,
    /// Meters
    length_pool: f64,
    count_pool: u32,
}

impl Swimming {
    /// Stroke length in meters
    pub const LEN_STEP: f64 = 1.38;
    pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    pub fn new(input: WorkoutInput, length_pool: f64, count_pool: u32) -> Result<Self> {
        Ok(Self {
            input,
            length_pool: require_positive("length_pool", length_pool)?,
            count_pool,
        })
    }
}

impl Training for Swimming {
    fn input(&self) -> &WorkoutInput {
        &self.input
    }

    fn display_name(&self) -> &'static str {
        WorkoutKind::Swimming.display_name()
    }

    fn step_length(&self) -> f64 {
        Self::LEN_STEP
    }

    // Speed comes from pool geometry, not from strokes
    fn mean_speed(&self) -> f64 {
        self.length_pool * f64::from(self.count_pool) / M_IN_KM / self.input.duration
    }

    fn spent_calories(&self) -> Result<f64> {
        Ok((self.mean_speed() + Self::CALORIES_MEAN_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * self.input.weight
            * self.input.duration)
    }
}

// ============================================================================
// Closed set of variants
// ============================================================================

/// A fully constructed workout of one of the supported kinds
#[derive(Clone, Debug, PartialEq)]
pub enum Workout {
    Swimming(Swimming),
    Running(Running),
    SportsWalking(SportsWalking),
}

impl Workout {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            Workout::Swimming(_) => WorkoutKind::Swimming,
            Workout::Running(_) => WorkoutKind::Running,
            Workout::SportsWalking(_) => WorkoutKind::SportsWalking,
        }
    }

    /// Borrow the variant through the shared contract
    pub fn as_training(&self) -> &dyn Training {
        match self {
            Workout::Swimming(w) => w,
            Workout::Running(w) => w,
            Workout::SportsWalking(w) => w,
        }
    }

    pub fn show_training_info(&self) -> Result<WorkoutSummary> {
        self.as_training().show_training_info()
    }
}
