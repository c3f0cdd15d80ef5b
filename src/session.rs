use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The neurological conditions the mock model can be asked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Alzheimers,
    Parkinsons,
    BrainTumor,
}

impl Condition {
    pub const ALL: [Condition; 3] = [Self::Alzheimers, Self::Parkinsons, Self::BrainTumor];

    pub fn label(self) -> &'static str {
        match self {
            Self::Alzheimers => "Alzheimer's Disease",
            Self::Parkinsons => "Parkinson's Disease",
            Self::BrainTumor => "Brain Tumor",
        }
    }

    /// Compact form used in badges and filter entries.
    pub fn short_label(self) -> &'static str {
        match self {
            Self::Alzheimers => "Alzheimer's",
            Self::Parkinsons => "Parkinson's",
            Self::BrainTumor => "Brain Tumor",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Alzheimers => "Neurodegenerative disorder affecting memory",
            Self::Parkinsons => "Movement disorder with dopamine deficiency",
            Self::BrainTumor => "Abnormal cell growth in the brain",
        }
    }
}

/// One completed analysis, as kept in the history ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSession {
    pub id: Uuid,
    pub condition: Condition,
    /// Display name of the uploaded file. The content is never stored.
    pub source_name: String,
    pub recorded_at: DateTime<Utc>,
    pub probability: f64,
    pub prediction: String,
}

impl AnalysisSession {
    pub fn new(
        condition: Condition,
        source_name: impl Into<String>,
        probability: f64,
        prediction: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            condition,
            source_name: source_name.into(),
            recorded_at: Utc::now(),
            probability,
            prediction: prediction.into(),
        }
    }

    pub fn risk(&self) -> RiskLevel {
        RiskLevel::from_probability(self.probability)
    }
}

/// Coarse risk banding shown next to each history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    High,
    Moderate,
    Low,
}

impl RiskLevel {
    pub fn from_probability(probability: f64) -> Self {
        if probability > 0.8 {
            Self::High
        } else if probability > 0.5 {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::High => "High Risk",
            Self::Moderate => "Moderate",
            Self::Low => "Low Risk",
        }
    }
}
