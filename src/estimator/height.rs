//! Height normalization
//!
//! Converts a metric or imperial height entry to centimeters.

use super::tables::{CM_PER_INCH, INCHES_PER_FOOT, MIN_HEIGHT_CM};
use crate::models::{HeightInput, HeightUnit};

/// Resolve a height entry to centimeters
///
/// Returns `None` when the fields required by the selected unit are missing or
/// not finite, or when a metric entry is below the minimum height. Imperial
/// entries are converted as-is; range checks on the result belong to the
/// resting burn gate.
pub fn resolve_height_cm(height: &HeightInput) -> Option<f64> {
    match height.unit {
        HeightUnit::Metric => {
            let cm = finite(height.cm)?;
            if cm < MIN_HEIGHT_CM {
                tracing::debug!("Metric height {} cm below minimum", cm);
                return None;
            }
            Some(cm)
        }
        HeightUnit::Imperial => {
            let feet = finite(height.feet)?;
            let inches = finite(height.inches)?;
            Some((feet * INCHES_PER_FOOT + inches) * CM_PER_INCH)
        }
    }
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_imperial_five_ten() {
        assert_eq!(resolve_height_cm(&HeightInput::imperial(5.0, 10.0)), Some(177.8));
    }

    #[test]
    fn test_metric_passes_through() {
        assert_eq!(resolve_height_cm(&HeightInput::metric(177.8)), Some(177.8));
        assert_eq!(resolve_height_cm(&HeightInput::metric(100.0)), Some(100.0));
    }

    #[test]
    fn test_metric_below_minimum_is_unresolved() {
        assert_eq!(resolve_height_cm(&HeightInput::metric(99.9)), None);
        assert_eq!(resolve_height_cm(&HeightInput::metric(0.0)), None);
    }

    #[test]
    fn test_missing_fields_are_unresolved() {
        let metric = HeightInput::default();
        assert_eq!(resolve_height_cm(&metric), None);

        let no_inches = HeightInput {
            unit: HeightUnit::Imperial,
            cm: None,
            feet: Some(6.0),
            inches: None,
        };
        assert_eq!(resolve_height_cm(&no_inches), None);

        // cm is ignored when the unit is imperial
        let wrong_unit = HeightInput {
            unit: HeightUnit::Imperial,
            cm: Some(180.0),
            feet: None,
            inches: None,
        };
        assert_eq!(resolve_height_cm(&wrong_unit), None);
    }

    #[test]
    fn test_non_finite_is_unresolved() {
        assert_eq!(resolve_height_cm(&HeightInput::metric(f64::NAN)), None);
        assert_eq!(resolve_height_cm(&HeightInput::imperial(f64::INFINITY, 0.0)), None);
    }

    #[test]
    fn test_imperial_short_height_still_converts() {
        let cm = resolve_height_cm(&HeightInput::imperial(3.0, 0.0)).unwrap();
        assert!((cm - 91.44).abs() < 1e-9);
    }
}
