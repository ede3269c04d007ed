//! Unit normalization
//!
//! Converts raw measurement text into kilograms and meters, regardless of
//! the unit system the values were entered in.

use thiserror::Error;

use crate::models::{MeasurementInput, UnitSystem};

/// Measurement error types
#[derive(Debug, Error)]
pub enum MeasurementError {
    #[error("measurement is empty or not a number")]
    NotANumber,

    #[error("height must be greater than zero")]
    ZeroHeight,
}

/// Result type for normalization
pub type MeasurementResult<T> = Result<T, MeasurementError>;

// ============================================================================
// Conversion Constants
// ============================================================================

/// Kilograms per pound
pub const KG_PER_LB: f64 = 0.453592;
/// Meters per inch
pub const M_PER_INCH: f64 = 0.0254;
/// Inches per foot
pub const INCHES_PER_FOOT: f64 = 12.0;
/// Centimeters per meter
pub const CM_PER_M: f64 = 100.0;

/// Normalized body measurements in SI units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyMetrics {
    pub weight_kg: f64,
    pub height_m: f64,
}

/// Parse a raw measurement field
///
/// Empty or non-numeric text yields NaN, mirroring the lenient parse the
/// form relies on. Callers detect the sentinel through [`normalize`].
pub fn parse_measurement(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Normalize raw measurement fields to `(weight_kg, height_m)`
///
/// Metric height is entered in centimeters; imperial height as feet plus
/// inches. Fails if any required field is missing or non-numeric, or if the
/// resulting height is zero. On failure the caller must leave any previously
/// displayed result untouched.
pub fn normalize(input: &MeasurementInput) -> MeasurementResult<BodyMetrics> {
    let (weight_kg, height_m) = match input.unit_system {
        UnitSystem::Metric => {
            let weight_kg = parse_measurement(&input.weight);
            let height_m = parse_measurement(&input.height) / CM_PER_M;
            (weight_kg, height_m)
        }
        UnitSystem::Imperial => {
            let weight_kg = parse_measurement(&input.weight) * KG_PER_LB;
            let height_inches = parse_measurement(&input.feet) * INCHES_PER_FOOT
                + parse_measurement(&input.inches);
            (weight_kg, height_inches * M_PER_INCH)
        }
    };

    if weight_kg.is_nan() || height_m.is_nan() {
        return Err(MeasurementError::NotANumber);
    }
    if height_m == 0.0 {
        return Err(MeasurementError::ZeroHeight);
    }

    Ok(BodyMetrics { weight_kg, height_m })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric(weight: &str, height: &str) -> MeasurementInput {
        MeasurementInput {
            unit_system: UnitSystem::Metric,
            weight: weight.to_string(),
            height: height.to_string(),
            feet: String::new(),
            inches: String::new(),
        }
    }

    fn imperial(weight: &str, feet: &str, inches: &str) -> MeasurementInput {
        MeasurementInput {
            unit_system: UnitSystem::Imperial,
            weight: weight.to_string(),
            height: String::new(),
            feet: feet.to_string(),
            inches: inches.to_string(),
        }
    }

    #[test]
    fn test_parse_measurement() {
        assert_eq!(parse_measurement("70"), 70.0);
        assert_eq!(parse_measurement(" 70.5 "), 70.5);
        assert!(parse_measurement("").is_nan());
        assert!(parse_measurement("abc").is_nan());
    }

    #[test]
    fn test_normalize_metric() {
        let metrics = normalize(&metric("70", "175")).unwrap();
        assert!((metrics.weight_kg - 70.0).abs() < 1e-9);
        assert!((metrics.height_m - 1.75).abs() < 1e-9);
    }

    #[test]
    fn test_normalize_imperial() {
        let metrics = normalize(&imperial("154", "5", "9")).unwrap();
        // 154 lbs ~= 69.85 kg, 69 inches ~= 1.7526 m
        assert!((metrics.weight_kg - 69.853).abs() < 0.001);
        assert!((metrics.height_m - 1.7526).abs() < 0.0001);
    }

    #[test]
    fn test_normalize_rejects_zero_height() {
        let err = normalize(&metric("70", "0")).unwrap_err();
        assert!(matches!(err, MeasurementError::ZeroHeight));
    }

    #[test]
    fn test_normalize_rejects_missing_fields() {
        assert!(matches!(
            normalize(&metric("", "175")).unwrap_err(),
            MeasurementError::NotANumber
        ));
        assert!(matches!(
            normalize(&metric("70", "")).unwrap_err(),
            MeasurementError::NotANumber
        ));
        // Imperial with missing inches cannot produce a height
        assert!(matches!(
            normalize(&imperial("154", "5", "")).unwrap_err(),
            MeasurementError::NotANumber
        ));
    }

    #[test]
    fn test_normalize_rejects_non_numeric() {
        assert!(matches!(
            normalize(&metric("seventy", "175")).unwrap_err(),
            MeasurementError::NotANumber
        ));
    }
}
