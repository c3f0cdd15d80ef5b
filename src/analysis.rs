//! The mock result provider: fixed outcomes keyed by condition.
//!
//! Nothing here is computed from scan data. Every value is a constant picked
//! to look plausible in the dashboard, which is the point of the demo.

use crate::session::Condition;

/// Number of mock slices the viewer can page through.
pub const SLICE_COUNT: u32 = 20;

/// Detection probability above which a result is flagged as high risk.
pub const RISK_THRESHOLD: f64 = 0.7;

pub const MODEL_NAME: &str = "Hybrid CNN Architecture (EfficientNet-B4 + 3D CNN + Xception)";
pub const MODEL_BLURB: &str =
    "Model trained on 15,000+ validated MRI/fMRI scans with 92.4% validation accuracy.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confidence {
    Medium,
    High,
    VeryHigh,
}

impl Confidence {
    pub fn label(self) -> &'static str {
        match self {
            Self::Medium => "Medium",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        }
    }
}

/// A brain region and how strongly the mock heatmap implicates it, in [0, 1].
#[derive(Debug, Clone, Copy)]
pub struct Region {
    pub name: &'static str,
    pub severity: f64,
}

/// One key-findings row of the dashboard.
#[derive(Debug, Clone, Copy)]
pub struct Finding {
    pub label: &'static str,
    pub value: &'static str,
}

/// Everything the dashboard and report show for one completed analysis.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisOutcome {
    pub prediction: &'static str,
    pub probability: f64,
    pub confidence: Confidence,
    pub stage: &'static str,
    pub findings: &'static [Finding],
    pub regions: &'static [Region],
}

impl AnalysisOutcome {
    pub fn is_high_risk(&self) -> bool {
        self.probability > RISK_THRESHOLD
    }
}

static ALZHEIMERS: AnalysisOutcome = AnalysisOutcome {
    prediction: "Alzheimer's Disease Detected",
    probability: 0.87,
    confidence: Confidence::High,
    stage: "Mild Cognitive Impairment",
    findings: &[
        Finding {
            label: "Hippocampal Volume",
            value: "Reduced by 18%",
        },
        Finding {
            label: "Cortical Thickness",
            value: "Below normal threshold",
        },
        Finding {
            label: "Ventricle Size",
            value: "Enlarged",
        },
    ],
    regions: &[
        Region {
            name: "Hippocampus",
            severity: 0.89,
        },
        Region {
            name: "Temporal Lobe",
            severity: 0.76,
        },
        Region {
            name: "Parietal Lobe",
            severity: 0.62,
        },
        Region {
            name: "Frontal Lobe",
            severity: 0.45,
        },
    ],
};

static PARKINSONS: AnalysisOutcome = AnalysisOutcome {
    prediction: "Parkinson's Disease Indicators",
    probability: 0.82,
    confidence: Confidence::High,
    stage: "Stage 2 - Bilateral Symptoms",
    findings: &[
        Finding {
            label: "Substantia Nigra",
            value: "Dopaminergic reduction detected",
        },
        Finding {
            label: "Basal Ganglia",
            value: "Asymmetric activity",
        },
        Finding {
            label: "Motor Cortex",
            value: "Mild abnormalities",
        },
    ],
    regions: &[
        Region {
            name: "Substantia Nigra",
            severity: 0.91,
        },
        Region {
            name: "Basal Ganglia",
            severity: 0.84,
        },
        Region {
            name: "Motor Cortex",
            severity: 0.58,
        },
        Region {
            name: "Cerebellum",
            severity: 0.42,
        },
    ],
};

static BRAIN_TUMOR: AnalysisOutcome = AnalysisOutcome {
    prediction: "Tumor Mass Detected",
    probability: 0.94,
    confidence: Confidence::VeryHigh,
    stage: "Grade II Glioma",
    findings: &[
        Finding {
            label: "Location",
            value: "Right Temporal Lobe",
        },
        Finding {
            label: "Size",
            value: "2.3 x 1.8 x 2.1 cm",
        },
        Finding {
            label: "Characteristics",
            value: "Well-defined margins",
        },
    ],
    regions: &[
        Region {
            name: "Tumor Core",
            severity: 0.96,
        },
        Region {
            name: "Peritumoral Edema",
            severity: 0.78,
        },
        Region {
            name: "Adjacent Tissue",
            severity: 0.52,
        },
        Region {
            name: "Distant Regions",
            severity: 0.12,
        },
    ],
};

/// Look up the canned outcome for a condition.
pub fn outcome_for(condition: Condition) -> &'static AnalysisOutcome {
    match condition {
        Condition::Alzheimers => &ALZHEIMERS,
        Condition::Parkinsons => &PARKINSONS,
        Condition::BrainTumor => &BRAIN_TUMOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_condition_has_a_plausible_outcome() {
        for condition in Condition::ALL {
            let outcome = outcome_for(condition);
            assert!((0.0..=1.0).contains(&outcome.probability));
            assert!(!outcome.findings.is_empty());
            assert!(!outcome.regions.is_empty());
            for region in outcome.regions {
                assert!((0.0..=1.0).contains(&region.severity), "{}", region.name);
            }
        }
    }

    #[test]
    fn canned_probabilities_are_flagged_high_risk() {
        // All three demo outcomes sit above the 70% threshold on purpose.
        for condition in Condition::ALL {
            assert!(outcome_for(condition).is_high_risk());
        }
    }
}
