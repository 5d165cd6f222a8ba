//! Quantile-based color scale for the odds heatmap.

use serde::Serialize;

use crate::pipeline::utility::quantiles;

/// Percentiles the color stops sit at.
pub const STOP_QUANTILES: [f64; 5] = [0.0, 0.05, 0.5, 0.95, 1.0];

/// Colors for the stops, lowest odds first.
pub const STOP_COLORS: [&str; 5] = ["white", "#d3f9d8", "#95d79e", "#4ca672", "forestgreen"];

/// Continuous color scale whose domain comes from the displayed values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorScale {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<Vec<f64>>,
    pub range: Vec<&'static str>,
}

impl ColorScale {
    /// Builds the scale from the currently displayed values. With no values
    /// the domain is left unset.
    pub fn from_values(values: &[f64]) -> Self {
        let stops = quantiles(values, &STOP_QUANTILES);
        Self {
            domain: (stops.len() == STOP_QUANTILES.len()).then_some(stops),
            range: STOP_COLORS.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_tracks_values() {
        let values: Vec<f64> = (0..=20).map(f64::from).collect();
        let scale = ColorScale::from_values(&values);
        let domain = scale.domain.unwrap();

        assert_eq!(domain.len(), 5);
        for (got, want) in domain.iter().zip([0.0, 1.0, 10.0, 19.0, 20.0]) {
            assert!((got - want).abs() < 1e-9, "{got} != {want}");
        }
        assert_eq!(scale.range, STOP_COLORS);
    }

    #[test]
    fn test_domain_recomputed_for_new_values() {
        let low = ColorScale::from_values(&[1.0, 2.0, 3.0]);
        let high = ColorScale::from_values(&[10.0, 20.0, 30.0]);
        assert_ne!(low.domain, high.domain);
    }

    #[test]
    fn test_empty_values_leave_domain_unset() {
        let scale = ColorScale::from_values(&[]);
        assert!(scale.domain.is_none());
        let json = serde_json::to_value(&scale).unwrap();
        assert!(json.get("domain").is_none());
    }
}
