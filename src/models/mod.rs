//! Data models
//!
//! Plain value records for measurements and calculation results.

mod measurement;
mod result;

pub use measurement::{MeasurementInput, UnitSystem};
pub use result::{BmiCategory, BmiResult};
