//! BMI calculation module
//!
//! Handles unit normalization and BMI classification.

pub mod classifier;
pub mod units;

pub use classifier::{
    calculate, classify, compute_bmi, round_to_tenth, CategoryBand, CATEGORY_BANDS,
};
pub use units::{normalize, parse_measurement, BodyMetrics, MeasurementError};
