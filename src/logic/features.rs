//! Feature encoding
//!
//! Maps questionnaire answers onto the fixed 13-slot vector the classifier
//! was trained on. Position and encoding are part of the model contract:
//! the metadata sidecar is checked against `FEATURE_NAMES` at load time.

use serde::{Deserialize, Serialize};

/// Number of features in the classifier's input vector
pub const FEATURE_COUNT: usize = 13;

/// Canonical feature order. The artifact's metadata sidecar must list
/// exactly these names in this order.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "age",
    "gender",
    "occupation",
    "pressure",
    "satisfaction",
    "cgpa",
    "sleep",
    "diet",
    "suicidal_thoughts",
    "family_history",
    "financial_stress",
    "work_study_hours",
    "education",
];

/// Encoded model input
pub type FeatureVector = [f32; FEATURE_COUNT];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    pub fn encode(self) -> f32 {
        match self {
            Gender::Female => 0.0,
            Gender::Male => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Occupation {
    Student,
    #[serde(rename = "Working Professional")]
    WorkingProfessional,
}

impl Occupation {
    pub fn encode(self) -> f32 {
        match self {
            Occupation::Student => 0.0,
            Occupation::WorkingProfessional => 1.0,
        }
    }
}

/// Nightly sleep bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SleepDuration {
    #[serde(rename = "Less than 5 hours")]
    LessThan5Hours,
    #[serde(rename = "5-6 hours")]
    FiveToSixHours,
    #[serde(rename = "7-8 hours")]
    SevenToEightHours,
    #[serde(rename = "More than 8 hours")]
    MoreThan8Hours,
}

impl SleepDuration {
    pub fn encode(self) -> f32 {
        match self {
            SleepDuration::LessThan5Hours => 0.0,
            SleepDuration::FiveToSixHours => 1.0,
            SleepDuration::SevenToEightHours => 2.0,
            SleepDuration::MoreThan8Hours => 3.0,
        }
    }
}

/// Dietary habit bucket. Healthier diets encode lower, matching training.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DietQuality {
    Healthy,
    Moderate,
    Unhealthy,
}

impl DietQuality {
    pub fn encode(self) -> f32 {
        match self {
            DietQuality::Healthy => 0.0,
            DietQuality::Moderate => 1.0,
            DietQuality::Unhealthy => 2.0,
        }
    }
}

/// Binary questionnaire flag (suicidal ideation, family history)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YesNo {
    No,
    Yes,
}

impl YesNo {
    pub fn encode(self) -> f32 {
        match self {
            YesNo::No => 0.0,
            YesNo::Yes => 1.0,
        }
    }
}

/// Self-reported financial stress, 1 (least) to 5 (severe)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinancialStress {
    Least,
    Slightly,
    Moderate,
    High,
    Severe,
}

impl FinancialStress {
    pub fn encode(self) -> f32 {
        match self {
            FinancialStress::Least => 1.0,
            FinancialStress::Slightly => 2.0,
            FinancialStress::Moderate => 3.0,
            FinancialStress::High => 4.0,
            FinancialStress::Severe => 5.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EducationLevel {
    Schooling,
    Undergraduate,
    Postgraduate,
    PhD,
}

impl EducationLevel {
    pub fn encode(self) -> f32 {
        match self {
            EducationLevel::Schooling => 0.0,
            EducationLevel::Undergraduate => 1.0,
            EducationLevel::Postgraduate => 2.0,
            EducationLevel::PhD => 3.0,
        }
    }
}
