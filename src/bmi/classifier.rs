//! BMI computation and classification
//!
//! Computes `weight / height²` and maps the raw value onto a fixed table of
//! four category bands. Classification always uses the unrounded value;
//! rounding to one decimal happens only for the displayed score.

use crate::models::{BmiCategory, BmiResult, MeasurementInput};

use super::units::{normalize, MeasurementResult};

/// A single category band: a half-open BMI range with its advisory text
///
/// The bands are static configuration, ordered ascending and non-overlapping.
#[derive(Debug, Clone, Copy)]
pub struct CategoryBand {
    pub category: BmiCategory,
    /// Inclusive lower bound
    pub lower: f64,
    /// Exclusive upper bound; `None` for the open-ended top band
    pub upper: Option<f64>,
    pub advisory: &'static str,
}

impl CategoryBand {
    /// Human-readable range, as shown in the reference table
    pub fn range_label(&self) -> String {
        match (self.lower, self.upper) {
            (l, Some(u)) if l == 0.0 => format!("< {u}"),
            (l, Some(u)) => format!("{l} - {:.1}", u - 0.1),
            (l, None) => format!(">= {l}"),
        }
    }
}

/// The four BMI category bands, evaluated in ascending order, first match wins
pub const CATEGORY_BANDS: [CategoryBand; 4] = [
    CategoryBand {
        category: BmiCategory::Underweight,
        lower: 0.0,
        upper: Some(18.5),
        advisory: "Consider consulting a nutritionist to gain weight healthily.",
    },
    CategoryBand {
        category: BmiCategory::Normal,
        lower: 18.5,
        upper: Some(25.0),
        advisory: "Great! Maintain your current healthy lifestyle.",
    },
    CategoryBand {
        category: BmiCategory::Overweight,
        lower: 25.0,
        upper: Some(30.0),
        advisory: "Consider regular exercise and a balanced diet.",
    },
    CategoryBand {
        category: BmiCategory::Obese,
        lower: 30.0,
        upper: None,
        advisory: "Consult a healthcare provider for personalized advice.",
    },
];

/// Compute the raw (unrounded) BMI
pub fn compute_bmi(weight_kg: f64, height_m: f64) -> f64 {
    weight_kg / (height_m * height_m)
}

/// Round a BMI score to one decimal place, half away from zero
pub fn round_to_tenth(bmi: f64) -> f64 {
    (bmi * 10.0).round() / 10.0
}

/// Classify a raw BMI value into its category band
pub fn classify(bmi: f64) -> &'static CategoryBand {
    CATEGORY_BANDS
        .iter()
        .find(|band| band.upper.map_or(true, |upper| bmi < upper))
        .unwrap_or(&CATEGORY_BANDS[CATEGORY_BANDS.len() - 1])
}

/// Calculate a BMI result from raw measurement input
///
/// Normalizes units, computes and classifies the raw BMI, then rounds the
/// score for display. Pure apart from the normalization failure path.
pub fn calculate(input: &MeasurementInput) -> MeasurementResult<BmiResult> {
    let metrics = normalize(input)?;
    let bmi = compute_bmi(metrics.weight_kg, metrics.height_m);
    let band = classify(bmi);

    Ok(BmiResult {
        bmi: round_to_tenth(bmi),
        category: band.category,
        recommendation: band.advisory.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UnitSystem;

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
    fn test_compute_bmi_exact() {
        let bmi = compute_bmi(70.0, 1.75);
        assert!((bmi - 70.0 / (1.75 * 1.75)).abs() < 1e-12);
        assert!((bmi - 22.857142857).abs() < 1e-6);
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify(10.0).category, BmiCategory::Underweight);
        assert_eq!(classify(18.499).category, BmiCategory::Underweight);
        assert_eq!(classify(18.5).category, BmiCategory::Normal);
        assert_eq!(classify(24.999).category, BmiCategory::Normal);
        assert_eq!(classify(25.0).category, BmiCategory::Overweight);
        assert_eq!(classify(29.999).category, BmiCategory::Overweight);
        assert_eq!(classify(30.0).category, BmiCategory::Obese);
        assert_eq!(classify(45.0).category, BmiCategory::Obese);
    }

    #[test]
    fn test_round_to_tenth_half_away_from_zero() {
        assert_eq!(round_to_tenth(22.849), 22.8);
        assert_eq!(round_to_tenth(22.85), 22.9);
        assert_eq!(round_to_tenth(30.0), 30.0);
    }

    #[test]
    fn test_calculate_metric_end_to_end() {
        let result = calculate(&metric("70", "175")).unwrap();
        assert_eq!(result.bmi, 22.9);
        assert_eq!(result.category, BmiCategory::Normal);
        assert_eq!(
            result.recommendation,
            "Great! Maintain your current healthy lifestyle."
        );
    }

    #[test]
    fn test_calculate_imperial_end_to_end() {
        let result = calculate(&imperial("154", "5", "9")).unwrap();
        assert_eq!(result.bmi, 22.7);
        assert_eq!(result.category, BmiCategory::Normal);
    }

    #[test]
    fn test_metric_imperial_round_trip() {
        // 70 kg / 175 cm expressed in imperial units: 154.324 lbs, 68.898 in
        let metric_result = calculate(&metric("70", "175")).unwrap();
        let imperial_result = calculate(&imperial("154.324", "5", "8.898")).unwrap();
        assert!((metric_result.bmi - imperial_result.bmi).abs() < 0.11);
        assert_eq!(metric_result.category, imperial_result.category);
    }

    #[test]
    fn test_classification_uses_raw_value_not_rounded() {
        // Raw BMI 24.96 rounds to 25.0 for display but stays Normal
        let result = calculate(&metric("24.96", "100")).unwrap();
        assert_eq!(result.bmi, 25.0);
        assert_eq!(result.category, BmiCategory::Normal);

        // Raw BMI 29.96 rounds to 30.0 but stays Overweight
        let result = calculate(&metric("29.96", "100")).unwrap();
        assert_eq!(result.bmi, 30.0);
        assert_eq!(result.category, BmiCategory::Overweight);
    }

    #[test]
    fn test_range_labels() {
        let labels: Vec<String> = CATEGORY_BANDS.iter().map(|b| b.range_label()).collect();
        assert_eq!(labels, vec!["< 18.5", "18.5 - 24.9", "25 - 29.9", ">= 30"]);
    }

    #[test]
    fn test_bands_are_contiguous_and_ascending() {
        for pair in CATEGORY_BANDS.windows(2) {
            assert_eq!(pair[0].upper, Some(pair[1].lower));
        }
        assert!(CATEGORY_BANDS.last().unwrap().upper.is_none());
    }
}
