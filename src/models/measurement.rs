//! Measurement input model
//!
//! Raw, as-typed measurement fields together with the unit system that
//! determines which of them are meaningful. Fields are transient and
//! re-entered per calculation; nothing is persisted.

use serde::{Deserialize, Serialize};

/// Unit system for entering measurements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    Metric,
    Imperial,
}

impl UnitSystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "metric" => Some(UnitSystem::Metric),
            "imperial" => Some(UnitSystem::Imperial),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "Metric (kg/cm)",
            UnitSystem::Imperial => "Imperial (lbs/ft)",
        }
    }

    /// Label for the weight field in this unit system
    pub fn weight_label(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "Weight (kg)",
            UnitSystem::Imperial => "Weight (lbs)",
        }
    }
}

/// Raw measurement fields as entered by the user
///
/// Metric uses `weight` and `height` (cm); imperial uses `weight` (lbs),
/// `feet`, and `inches`. The unused fields keep whatever text they held, so
/// switching unit systems does not discard typed values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasurementInput {
    pub unit_system: UnitSystem,
    pub weight: String,
    pub height: String,
    pub feet: String,
    pub inches: String,
}

impl MeasurementInput {
    /// Create an empty input for the given unit system
    pub fn new(unit_system: UnitSystem) -> Self {
        Self {
            unit_system,
            weight: String::new(),
            height: String::new(),
            feet: String::new(),
            inches: String::new(),
        }
    }

    /// Whether every field required by the active unit system is non-empty
    ///
    /// Weight is always required. Metric additionally requires height;
    /// imperial requires both feet and inches.
    pub fn is_complete(&self) -> bool {
        if self.weight.trim().is_empty() {
            return false;
        }
        match self.unit_system {
            UnitSystem::Metric => !self.height.trim().is_empty(),
            UnitSystem::Imperial => {
                !self.feet.trim().is_empty() && !self.inches.trim().is_empty()
            }
        }
    }

    /// Clear all measurement fields, keeping the unit system selection
    pub fn clear(&mut self) {
        self.weight.clear();
        self.height.clear();
        self.feet.clear();
        self.inches.clear();
    }
}

impl Default for MeasurementInput {
    fn default() -> Self {
        Self::new(UnitSystem::Metric)
    }
}
