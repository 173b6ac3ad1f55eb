//! Assessment request/response models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::logic::features::{
    DietQuality, EducationLevel, FeatureVector, FinancialStress, Gender, Occupation,
    SleepDuration, YesNo,
};
use crate::logic::model::RiskTier;

/// The 13 questionnaire answers. Ranges mirror the form widget limits;
/// anything outside them is rejected before encoding.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AssessmentRequest {
    #[validate(range(min = 10, max = 100))]
    pub age: u8,
    pub gender: Gender,
    pub occupation: Occupation,
    /// Work or academic pressure, 1-5
    #[validate(range(min = 1, max = 5))]
    pub pressure: u8,
    /// Job or study satisfaction, 1-5
    #[validate(range(min = 1, max = 5))]
    pub satisfaction: u8,
    /// CGPA, 0.0 if working
    #[validate(range(min = 0.0, max = 10.0))]
    pub cgpa: f32,
    pub sleep: SleepDuration,
    pub diet: DietQuality,
    pub suicidal_thoughts: YesNo,
    pub family_history: YesNo,
    pub financial_stress: FinancialStress,
    #[validate(range(min = 0, max = 24))]
    pub work_study_hours: u8,
    pub education: EducationLevel,
}

impl AssessmentRequest {
    /// Encode in the fixed order the classifier was trained on
    pub fn to_feature_vector(&self) -> FeatureVector {
        [
            self.age as f32,
            self.gender.encode(),
            self.occupation.encode(),
            self.pressure as f32,
            self.satisfaction as f32,
            self.cgpa,
            self.sleep.encode(),
            self.diet.encode(),
            self.suicidal_thoughts.encode(),
            self.family_history.encode(),
            self.financial_stress.encode(),
            self.work_study_hours as f32,
            self.education.encode(),
        ]
    }
}

/// One screening result. Created per request, never persisted.
#[derive(Debug, Serialize)]
pub struct RiskAssessment {
    pub id: Uuid,
    pub probability: f32,
    /// Probability as a percentage, rounded to 2 decimals for display
    pub probability_pct: f32,
    pub tier: RiskTier,
    pub status: &'static str,
    pub message: &'static str,
    pub suggestion: String,
    pub assessed_at: DateTime<Utc>,
}

impl RiskAssessment {
    pub fn new(probability: f32, tier: RiskTier, suggestion: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            probability,
            probability_pct: (probability * 10000.0).round() / 100.0,
            tier,
            status: tier.status(),
            message: tier.message(),
            suggestion,
            assessed_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> AssessmentRequest {
        AssessmentRequest {
            age: 25,
            gender: Gender::Male,
            occupation: Occupation::WorkingProfessional,
            pressure: 3,
            satisfaction: 2,
            cgpa: 8.5,
            sleep: SleepDuration::SevenToEightHours,
            diet: DietQuality::Healthy,
            suicidal_thoughts: YesNo::No,
            family_history: YesNo::No,
            financial_stress: FinancialStress::Moderate,
            work_study_hours: 8,
            education: EducationLevel::Undergraduate,
        }
    }

    #[test]
    fn test_encoding_order_matches_training_schema() {
        let vector = sample_request().to_feature_vector();
        let expected: FeatureVector = [
            25.0, 1.0, 1.0, 3.0, 2.0, 8.5, 2.0, 0.0, 0.0, 0.0, 3.0, 8.0, 1.0,
        ];
        assert_eq!(vector, expected);
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let req = sample_request();
        assert_eq!(req.to_feature_vector(), req.to_feature_vector());
    }

    #[test]
    fn test_valid_request_passes_validation() {
        assert!(sample_request().validate().is_ok());
    }

    #[test]
    fn test_age_out_of_range_rejected() {
        let mut req = sample_request();
        req.age = 9;
        assert!(req.validate().is_err());
        req.age = 101;
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_cgpa_out_of_range_rejected() {
        let mut req = sample_request();
        req.cgpa = 10.5;
        assert!(req.validate().is_err());
        req.cgpa = -0.1;
        assert!(req.validate().is_err());
        req.cgpa = 10.0;
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_hours_and_scales_bounded() {
        let mut req = sample_request();
        req.work_study_hours = 25;
        assert!(req.validate().is_err());

        let mut req = sample_request();
        req.pressure = 0;
        assert!(req.validate().is_err());

        let mut req = sample_request();
        req.satisfaction = 6;
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_probability_pct_rounding() {
        let assessment = RiskAssessment::new(0.62345, RiskTier::High, "tip".to_string());
        assert_eq!(assessment.probability_pct, 62.35);
        assert!(assessment.message.starts_with("🔴"));
        assert_eq!(assessment.status, "danger");
    }
}
