//! Inference engine - ONNX Runtime integration
//!
//! Loads the pre-trained depression classifier once at startup and serves
//! `predict_proba`-style calls for the rest of the process lifetime. The
//! artifact ships with a JSON metadata sidecar describing the feature
//! schema it was trained on; a mismatch is a fatal load error, never
//! silently worked around.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Value;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::logic::features::{FeatureVector, FEATURE_COUNT, FEATURE_NAMES};
use super::threshold::RISK_THRESHOLD;

/// Metadata sidecar schema version this build understands
pub const SUPPORTED_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("model artifact not found: {0}")]
    ArtifactMissing(String),
    #[error("metadata sidecar error: {0}")]
    Metadata(String),
    #[error("feature schema mismatch: {0}")]
    SchemaMismatch(String),
    #[error("onnx session error: {0}")]
    Session(String),
    #[error("inference failed: {0}")]
    Inference(String),
}

/// Model metadata, merged from the sidecar at load time
#[derive(Debug, Clone, Serialize)]
pub struct ModelMetadata {
    pub model_path: String,
    pub schema_version: u32,
    pub feature_names: Vec<String>,
    pub threshold: f32,
    pub loaded_at: DateTime<Utc>,
}

/// On-disk sidecar format (`<model>.json`)
#[derive(Debug, Deserialize)]
struct MetadataFile {
    schema_version: u32,
    feature_names: Vec<String>,
    #[serde(default)]
    threshold: Option<f32>,
}

/// Engine status for the status endpoint
#[derive(Debug, Clone, Serialize)]
pub struct EngineStatus {
    pub model_loaded: bool,
    pub model_path: String,
    pub feature_count: usize,
    pub threshold: f32,
    pub inference_count: u64,
    pub avg_latency_ms: f32,
}

/// The loaded classifier artifact. Read-only for the process lifetime;
/// the session itself sits behind a lock because `run` needs `&mut`.
pub struct RiskModel {
    session: Mutex<Session>,
    metadata: ModelMetadata,
    latency_sum_us: AtomicU64,
    inference_count: AtomicU64,
}

impl RiskModel {
    /// Load the ONNX artifact and its metadata sidecar, failing fast on
    /// a missing file or a schema the feature encoder does not produce.
    pub fn load(model_path: &str) -> Result<Self, InferenceError> {
        tracing::info!("Loading classifier artifact from: {}", model_path);

        if !std::path::Path::new(model_path).exists() {
            return Err(InferenceError::ArtifactMissing(model_path.to_string()));
        }

        let sidecar_path = format!("{}.json", model_path);
        let sidecar = std::fs::read_to_string(&sidecar_path)
            .map_err(|e| InferenceError::Metadata(format!("{}: {}", sidecar_path, e)))?;
        let metadata = parse_metadata(&sidecar, model_path)?;

        let session = Session::builder()
            .map_err(|e| InferenceError::Session(format!("Failed to create session builder: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| InferenceError::Session(format!("Failed to set optimization: {}", e)))?
            .commit_from_file(model_path)
            .map_err(|e| InferenceError::Session(format!("Failed to load model: {}", e)))?;

        tracing::info!(
            "Classifier loaded ({} features, threshold {})",
            metadata.feature_names.len(),
            metadata.threshold
        );

        Ok(Self {
            session: Mutex::new(session),
            metadata,
            latency_sum_us: AtomicU64::new(0),
            inference_count: AtomicU64::new(0),
        })
    }

    /// Probability of the positive (depressed) class for one feature vector.
    /// Deterministic for a fixed vector; any runtime failure here means the
    /// artifact and the encoder disagree and is surfaced as-is.
    pub fn predict(&self, features: &FeatureVector) -> Result<f32, InferenceError> {
        let start_time = std::time::Instant::now();

        let input_array = Array2::<f32>::from_shape_vec((1, FEATURE_COUNT), features.to_vec())
            .map_err(|e| InferenceError::Inference(format!("Failed to create array: {}", e)))?;

        let mut session = self.session.lock();

        // sklearn-exported classifiers emit the label first and the
        // probability row last; prefer an output named "probabilities".
        let output_name = session
            .outputs()
            .iter()
            .map(|o| o.name().to_string())
            .find(|n| n == "probabilities")
            .or_else(|| session.outputs().last().map(|o| o.name().to_string()))
            .ok_or_else(|| InferenceError::Inference("No output defined".to_string()))?;

        let input_tensor = Value::from_array(input_array)
            .map_err(|e| InferenceError::Inference(format!("Failed to create tensor: {}", e)))?;

        let outputs = session
            .run(ort::inputs![input_tensor])
            .map_err(|e| InferenceError::Inference(format!("Inference failed: {}", e)))?;

        let output = outputs
            .get(&output_name)
            .ok_or_else(|| InferenceError::Inference("No output from model".to_string()))?;

        let output_tensor = output
            .try_extract_tensor::<f32>()
            .map_err(|e| InferenceError::Inference(format!("Failed to extract output: {}", e)))?;

        // Row shape is (1, 2): [P(class 0), P(class 1)]. The positive
        // class is the last column either way.
        let data = output_tensor.1;
        let probability = data
            .last()
            .copied()
            .ok_or_else(|| InferenceError::Inference("Empty model output".to_string()))?;

        drop(outputs);
        drop(session);

        let elapsed = start_time.elapsed().as_micros() as u64;
        self.latency_sum_us.fetch_add(elapsed, Ordering::Relaxed);
        self.inference_count.fetch_add(1, Ordering::Relaxed);

        Ok(probability.clamp(0.0, 1.0))
    }

    pub fn threshold(&self) -> f32 {
        self.metadata.threshold
    }

    pub fn status(&self) -> EngineStatus {
        let sum = self.latency_sum_us.load(Ordering::Relaxed);
        let count = self.inference_count.load(Ordering::Relaxed);
        let avg = if count > 0 {
            (sum as f32 / count as f32) / 1000.0
        } else {
            0.0
        };

        EngineStatus {
            model_loaded: true,
            model_path: self.metadata.model_path.clone(),
            feature_count: self.metadata.feature_names.len(),
            threshold: self.metadata.threshold,
            inference_count: count,
            avg_latency_ms: avg,
        }
    }
}

/// Parse and validate the sidecar against the encoder's feature contract
fn parse_metadata(content: &str, model_path: &str) -> Result<ModelMetadata, InferenceError> {
    let file: MetadataFile = serde_json::from_str(content)
        .map_err(|e| InferenceError::Metadata(format!("Failed to parse sidecar: {}", e)))?;

    if file.schema_version != SUPPORTED_SCHEMA_VERSION {
        return Err(InferenceError::SchemaMismatch(format!(
            "sidecar schema version {} (supported: {})",
            file.schema_version, SUPPORTED_SCHEMA_VERSION
        )));
    }

    if file.feature_names.len() != FEATURE_COUNT {
        return Err(InferenceError::SchemaMismatch(format!(
            "artifact expects {} features, encoder produces {}",
            file.feature_names.len(),
            FEATURE_COUNT
        )));
    }

    for (i, (got, expected)) in file.feature_names.iter().zip(FEATURE_NAMES.iter()).enumerate() {
        if got != expected {
            return Err(InferenceError::SchemaMismatch(format!(
                "feature {} is '{}', encoder produces '{}'",
                i, got, expected
            )));
        }
    }

    let threshold = file.threshold.unwrap_or(RISK_THRESHOLD);
    if threshold != RISK_THRESHOLD {
        tracing::warn!(
            "Sidecar overrides risk cutoff: {} (shipped default {})",
            threshold,
            RISK_THRESHOLD
        );
    }

    Ok(ModelMetadata {
        model_path: model_path.to_string(),
        schema_version: file.schema_version,
        feature_names: file.feature_names,
        threshold,
        loaded_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sidecar_json(names: &[&str], version: u32) -> String {
        serde_json::json!({
            "schema_version": version,
            "feature_names": names,
        })
        .to_string()
    }

    #[test]
    fn test_valid_sidecar_defaults_threshold() {
        let content = sidecar_json(&FEATURE_NAMES, 1);
        let meta = parse_metadata(&content, "model.onnx").unwrap();

        assert_eq!(meta.threshold, RISK_THRESHOLD);
        assert_eq!(meta.feature_names.len(), FEATURE_COUNT);
        assert_eq!(meta.model_path, "model.onnx");
    }

    #[test]
    fn test_unsupported_schema_version_rejected() {
        let content = sidecar_json(&FEATURE_NAMES, 2);
        let err = parse_metadata(&content, "model.onnx").unwrap_err();
        assert!(matches!(err, InferenceError::SchemaMismatch(_)));
    }

    #[test]
    fn test_wrong_feature_count_rejected() {
        let content = sidecar_json(&["age", "gender"], 1);
        let err = parse_metadata(&content, "model.onnx").unwrap_err();
        assert!(matches!(err, InferenceError::SchemaMismatch(_)));
    }

    #[test]
    fn test_reordered_features_rejected() {
        let mut names = FEATURE_NAMES.to_vec();
        names.swap(0, 1);
        let content = sidecar_json(&names, 1);
        let err = parse_metadata(&content, "model.onnx").unwrap_err();
        assert!(matches!(err, InferenceError::SchemaMismatch(_)));
    }

    #[test]
    fn test_threshold_override() {
        let content = serde_json::json!({
            "schema_version": 1,
            "feature_names": FEATURE_NAMES,
            "threshold": 0.35,
        })
        .to_string();

        let meta = parse_metadata(&content, "model.onnx").unwrap();
        assert_eq!(meta.threshold, 0.35);
    }

    #[test]
    fn test_garbage_sidecar_rejected() {
        let err = parse_metadata("not json", "model.onnx").unwrap_err();
        assert!(matches!(err, InferenceError::Metadata(_)));
    }
}
