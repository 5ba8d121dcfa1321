#![forbid(unsafe_code)]

//! Core domain model and calculations for the workout calculator.
//!
//! This crate provides:
//! - Domain types (workout kinds, validated inputs, summaries)
//! - Calculation variants (running, sports walking, swimming)
//! - Dispatch from workout codes to variants
//! - Report formatting
//! - Delimited-text input and batch processing

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod training;
pub mod dispatch;
pub mod report;
pub mod input;
pub mod batch;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use training::{Running, SportsWalking, Swimming, Training, Workout};
pub use dispatch::{demo_packages, read_package, read_raw_package};
pub use report::{render, OutputFormat};
pub use input::{read_records, read_records_from_path, RawRecord};
pub use batch::{process_packages, process_records, RecordOutcome};
