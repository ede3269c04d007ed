//! Form state
//!
//! Owns the measurement fields and the currently displayed result, and
//! implements the calculate and reset operations. Invalid input fails
//! silently: the prior result is left untouched and nothing is surfaced to
//! the user beyond a debug-level trace event.

use crate::bmi;
use crate::models::{BmiResult, MeasurementInput, UnitSystem};

/// In-memory state of the measurement form
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub input: MeasurementInput,
    pub result: Option<BmiResult>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch unit systems, keeping any typed field text
    pub fn set_unit_system(&mut self, unit_system: UnitSystem) {
        self.input.unit_system = unit_system;
    }

    /// Whether the calculate action should be enabled
    pub fn can_calculate(&self) -> bool {
        self.input.is_complete()
    }

    /// Run a calculation from the current fields
    ///
    /// On success the new result replaces the prior one and `true` is
    /// returned. On invalid input (non-numeric, empty, or zero height) the
    /// prior result is preserved and `false` is returned.
    pub fn calculate(&mut self) -> bool {
        match bmi::calculate(&self.input) {
            Ok(result) => {
                tracing::debug!(
                    bmi = result.bmi,
                    category = result.category.as_str(),
                    "calculated BMI"
                );
                self.result = Some(result);
                true
            }
            Err(err) => {
                tracing::debug!(%err, "measurement rejected, keeping previous result");
                false
            }
        }
    }

    /// Clear all input fields and the current result
    pub fn reset(&mut self) {
        self.input.clear();
        self.result = None;
    }
}
