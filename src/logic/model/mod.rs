//! Model module - classifier inference and tiering

pub mod inference;
pub mod threshold;

// Re-export common types
pub use inference::{EngineStatus, InferenceError, ModelMetadata, RiskModel};
pub use threshold::{RiskTier, RISK_THRESHOLD};
