use serde::Deserialize;

// ---------------------------------------------------------------------------
// SalaryRegressor – the deserialized model artifact
// ---------------------------------------------------------------------------

/// A pre-trained linear regression over the encoded posting features.
/// Opaque to the dashboard: coefficients and intercept come from an
/// external training run and are only ever read back from the artifact.
#[derive(Debug, Clone, Deserialize)]
pub struct SalaryRegressor {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl SalaryRegressor {
    /// Predict salaries for one encoded record. Returns the model's output
    /// sequence; callers take the first element.
    pub fn predict(&self, features: &[f64]) -> Vec<f64> {
        let dot: f64 = self
            .coefficients
            .iter()
            .zip(features)
            .map(|(coef, x)| coef * x)
            .sum();
        vec![self.intercept + dot]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicts_intercept_plus_dot_product() {
        let model = SalaryRegressor {
            coefficients: vec![2.0, -1.0, 0.5],
            intercept: 100.0,
        };
        let outputs = model.predict(&[10.0, 4.0, 8.0]);
        assert_eq!(outputs, vec![100.0 + 20.0 - 4.0 + 4.0]);
    }

    #[test]
    fn deserializes_from_artifact_json() {
        let model: SalaryRegressor = serde_json::from_str(
            r#"{"coefficients": [1.5, 2.5], "intercept": 3.0}"#,
        )
        .expect("valid artifact");
        assert_eq!(model.coefficients.len(), 2);
        assert_eq!(model.predict(&[2.0, 2.0]), vec![11.0]);
    }
}
