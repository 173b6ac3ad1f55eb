//! Risk tier thresholding
//!
//! Maps the classifier's probability onto the two-tier message the UI
//! shows. The cutoff is strict greater-than: exactly 0.4 is still low.

use serde::{Deserialize, Serialize};

/// Default probability cutoff between low and high risk
pub const RISK_THRESHOLD: f32 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    High,
}

impl RiskTier {
    /// Classify against an explicit cutoff (the artifact metadata may pin one)
    pub fn classify(probability: f32, threshold: f32) -> Self {
        if probability > threshold {
            RiskTier::High
        } else {
            RiskTier::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskTier::Low => "low",
            RiskTier::High => "high",
        }
    }

    /// Display status used by the form view
    pub fn status(self) -> &'static str {
        match self {
            RiskTier::Low => "success",
            RiskTier::High => "danger",
        }
    }

    /// Headline message shown with the assessment
    pub fn message(self) -> &'static str {
        match self {
            RiskTier::Low => "🟢 You are less prone to depression.",
            RiskTier::High => "🔴 You are more prone to depression.",
        }
    }
}
