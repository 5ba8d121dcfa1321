//! Report formatting for workout summaries.

use crate::{Error, Result, WorkoutSummary};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How report lines are rendered
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Fixed-layout human readable line
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(Error::Config(format!("Unknown output format: {}", other))),
        }
    }
}

impl WorkoutSummary {
    /// The fixed-layout report line, every number with three decimals
    pub fn get_message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for WorkoutSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.workout_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

/// Render a summary as a single output line
pub fn render(summary: &WorkoutSummary, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(summary.get_message()),
        OutputFormat::Json => Ok(serde_json::to_string(summary)?),
    }
}
