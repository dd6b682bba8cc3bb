/// Prediction layer: encode form selections, fetch and load the model
/// artifact, and run the regression.
///
/// ```text
///   UI selections ──▶ encoder ──▶ [f64; 6]
///                                    │
///   remote artifact ─▶ artifact ─▶ regressor ─▶ predicted salary
/// ```
pub mod artifact;
pub mod encoder;
pub mod regressor;

use std::sync::Arc;

use artifact::{ArtifactError, ModelStore};
use encoder::PredictionInput;
use regressor::SalaryRegressor;

// ---------------------------------------------------------------------------
// Predictor state machine
// ---------------------------------------------------------------------------

/// What the predictor surface currently shows. Two states only; the sole
/// transition is a form submission.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PredictionOutcome {
    /// No prediction yet – the form shows its prompt.
    #[default]
    Idle,
    /// A prediction was made; the value is the estimated salary in USD.
    Predicted(f64),
}

/// State behind the predictor tab: the current selections plus the
/// session-cached model. The model is loaded lazily on first submit and
/// shared read-only for the rest of the process lifetime.
pub struct SalaryPredictor {
    pub input: PredictionInput,
    pub outcome: PredictionOutcome,
    store: ModelStore,
    model: Option<Arc<SalaryRegressor>>,
}

impl SalaryPredictor {
    pub fn new(store: ModelStore) -> Self {
        SalaryPredictor {
            input: PredictionInput::default(),
            outcome: PredictionOutcome::Idle,
            store,
            model: None,
        }
    }

    /// Handle a form submission: load the model on first use, encode the
    /// current selections, and record the predicted salary. On failure the
    /// outcome stays as it was and the error propagates to the status line.
    pub fn submit(&mut self) -> Result<(), ArtifactError> {
        let model = match self.model.clone() {
            Some(model) => model,
            None => {
                let loaded = Arc::new(self.store.load()?);
                self.model = Some(Arc::clone(&loaded));
                loaded
            }
        };

        let outputs = model.predict(&self.input.encode());
        if let Some(first) = outputs.first() {
            log::debug!("Predicted salary {first:.2} for {:?}", self.input);
            self.outcome = PredictionOutcome::Predicted(*first);
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Currency formatting
// ---------------------------------------------------------------------------

/// Format a salary as US dollars with thousands separators and exactly two
/// decimal places: `$123,456.78`.
pub fn format_usd(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let dollars = cents / 100;
    let fraction = cents % 100;

    let digits = dollars.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{fraction:02}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::artifact::MODEL_FILE;

    fn predictor_with_model(name: &str, coefficients: &str, intercept: f64) -> SalaryPredictor {
        let dir = std::env::temp_dir().join(name);
        std::fs::create_dir_all(&dir).expect("creating test model dir");
        std::fs::write(
            dir.join(MODEL_FILE),
            format!(r#"{{"coefficients": {coefficients}, "intercept": {intercept}}}"#),
        )
        .expect("writing test artifact");
        SalaryPredictor::new(ModelStore::new(dir, "http://127.0.0.1:9/unreachable"))
    }

    #[test]
    fn submit_moves_idle_to_predicted() {
        let mut predictor =
            predictor_with_model("datapay_predictor_ok", "[0, 0, 0, 0, 0, 0]", 90000.0);
        assert_eq!(predictor.outcome, PredictionOutcome::Idle);

        predictor.submit().expect("submission succeeds");
        assert_eq!(predictor.outcome, PredictionOutcome::Predicted(90000.0));

        // Resubmission stays predicted and reuses the cached model.
        predictor.submit().expect("resubmission succeeds");
        assert_eq!(predictor.outcome, PredictionOutcome::Predicted(90000.0));
    }

    #[test]
    fn failed_submit_stays_idle() {
        let dir = std::env::temp_dir().join("datapay_predictor_missing");
        let _ = std::fs::remove_dir_all(&dir);
        let mut predictor =
            SalaryPredictor::new(ModelStore::new(dir, "http://127.0.0.1:9/unreachable"));

        assert!(predictor.submit().is_err());
        assert_eq!(predictor.outcome, PredictionOutcome::Idle);
    }

    #[test]
    fn formats_currency_with_two_decimals() {
        assert_eq!(format_usd(1234567.891), "$1,234,567.89");
        assert_eq!(format_usd(90000.0), "$90,000.00");
        assert_eq!(format_usd(4.5), "$4.50");
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(999.999), "$1,000.00");
        assert_eq!(format_usd(-250.25), "-$250.25");
    }
}
