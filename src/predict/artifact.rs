use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::regressor::SalaryRegressor;

/// Remote location of the trained model, used when `SALARY_MODEL_URL` is
/// not set.
pub const DEFAULT_MODEL_URL: &str =
    "https://storage.googleapis.com/datapay-insights/models/salary_model.json";

/// Directory the artifact is cached in, used when `SALARY_MODEL_DIR` is
/// not set.
pub const DEFAULT_MODEL_DIR: &str = "model";

/// File name of the artifact inside the model directory.
pub const MODEL_FILE: &str = "salary_model.json";

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("model download failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("model file access failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("model artifact is malformed: {0}")]
    Parse(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// ModelStore – local cache of the remote model artifact
// ---------------------------------------------------------------------------

/// Owns the local artifact directory and the remote source URL. The
/// artifact is fetched once and reused from disk afterwards.
#[derive(Debug, Clone)]
pub struct ModelStore {
    dir: PathBuf,
    url: String,
}

impl ModelStore {
    pub fn new(dir: impl Into<PathBuf>, url: impl Into<String>) -> Self {
        ModelStore {
            dir: dir.into(),
            url: url.into(),
        }
    }

    /// Build the store from `SALARY_MODEL_DIR` / `SALARY_MODEL_URL`,
    /// falling back to the defaults.
    pub fn from_env() -> Self {
        let dir = std::env::var_os("SALARY_MODEL_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL_DIR));
        let url = std::env::var("SALARY_MODEL_URL")
            .unwrap_or_else(|_| DEFAULT_MODEL_URL.to_string());
        ModelStore::new(dir, url)
    }

    /// Path the artifact lives at once cached.
    pub fn artifact_path(&self) -> PathBuf {
        self.dir.join(MODEL_FILE)
    }

    /// Return the local artifact path, downloading the remote copy on
    /// first use. An existing local file is reused as-is.
    pub fn ensure_local(&self) -> Result<PathBuf, ArtifactError> {
        let path = self.artifact_path();
        if path.exists() {
            return Ok(path);
        }

        log::info!("Model artifact not cached, fetching {}", self.url);
        fs::create_dir_all(&self.dir)?;
        let response = reqwest::blocking::get(&self.url)?.error_for_status()?;
        let bytes = response.bytes()?;
        fs::write(&path, &bytes)?;
        log::info!("Model artifact cached at {}", path.display());

        Ok(path)
    }

    /// Load the regressor, fetching the artifact first if needed.
    pub fn load(&self) -> Result<SalaryRegressor, ArtifactError> {
        let path = self.ensure_local()?;
        let model = read_artifact(&path)?;
        log::info!(
            "Loaded regression model with {} coefficients",
            model.coefficients.len()
        );
        Ok(model)
    }
}

fn read_artifact(path: &Path) -> Result<SalaryRegressor, ArtifactError> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_artifact(name: &str, contents: &str) -> ModelStore {
        let dir = std::env::temp_dir().join(name);
        fs::create_dir_all(&dir).expect("creating test model dir");
        fs::write(dir.join(MODEL_FILE), contents).expect("writing test artifact");
        // URL is never hit: ensure_local sees the cached file first.
        ModelStore::new(dir, "http://127.0.0.1:9/unreachable")
    }

    #[test]
    fn cached_artifact_is_reused_without_network() {
        let store = store_with_artifact(
            "datapay_artifact_cached",
            r#"{"coefficients": [1.0, 2.0, 3.0, 4.0, 5.0, 6.0], "intercept": 7.0}"#,
        );
        let model = store.load().expect("loading cached artifact");
        assert_eq!(model.coefficients.len(), 6);
        assert_eq!(model.intercept, 7.0);
    }

    #[test]
    fn malformed_artifact_is_a_parse_error() {
        let store = store_with_artifact("datapay_artifact_bad", "not json");
        match store.load() {
            Err(ArtifactError::Parse(_)) => {}
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}
