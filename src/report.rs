use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::analysis::{AnalysisOutcome, MODEL_NAME};
use crate::session::Condition;

/// Errors that can occur while exporting a report
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Write(#[from] std::io::Error),
}

const DISCLAIMER: &str = "This report is generated by an AI system for research and educational \
purposes only. It should NOT be used as a substitute for professional medical diagnosis, advice, \
or treatment. The predictions and findings presented are based on pattern recognition algorithms \
and may contain errors. Always consult qualified healthcare professionals for medical decisions.";

/// Render the completed analysis as a plain-text report.
pub fn render_report(
    source_name: &str,
    condition: Condition,
    outcome: &AnalysisOutcome,
    recorded_at: DateTime<Utc>,
) -> String {
    let mut out = String::new();

    out.push_str("NeuroScan Analysis Report\n");
    out.push_str("=========================\n");
    out.push_str(&format!(
        "Generated on {}\n\n",
        recorded_at.format("%Y-%m-%d %H:%M UTC")
    ));

    out.push_str("Scan Information\n");
    out.push_str("----------------\n");
    out.push_str(&format!("Source file:   {source_name}\n"));
    out.push_str(&format!("Analysis type: {} Detection\n", condition.label()));
    out.push_str(&format!("Model:         {MODEL_NAME}\n\n"));

    out.push_str("Result\n");
    out.push_str("------\n");
    out.push_str(&format!("{}\n", outcome.prediction));
    out.push_str(&format!(
        "Probability: {:.1}%  |  {} Confidence  |  {}\n\n",
        outcome.probability * 100.0,
        outcome.confidence.label(),
        outcome.stage
    ));

    out.push_str("Key Findings\n");
    out.push_str("------------\n");
    for finding in outcome.findings {
        out.push_str(&format!("{}: {}\n", finding.label, finding.value));
    }
    out.push('\n');

    out.push_str("Affected Brain Regions\n");
    out.push_str("----------------------\n");
    for region in outcome.regions {
        out.push_str(&format!(
            "{:<20} {:>4.0}%\n",
            region.name,
            region.severity * 100.0
        ));
    }
    out.push('\n');

    out.push_str("IMPORTANT DISCLAIMER\n");
    out.push_str(DISCLAIMER);
    out.push('\n');

    out
}

/// Write a rendered report to disk.
#[cfg(not(target_arch = "wasm32"))]
pub fn export_report(path: &std::path::Path, contents: &str) -> Result<(), ReportError> {
    std::fs::write(path, contents)?;
    log::info!("exported report to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::outcome_for;

    #[test]
    fn report_carries_every_dashboard_section() {
        let outcome = outcome_for(Condition::BrainTumor);
        let report = render_report("patient_scan_003.nii", Condition::BrainTumor, outcome, Utc::now());

        assert!(report.contains("patient_scan_003.nii"));
        assert!(report.contains("Tumor Mass Detected"));
        assert!(report.contains("94.0%"));
        assert!(report.contains("Grade II Glioma"));
        assert!(report.contains("Peritumoral Edema"));
        assert!(report.contains("IMPORTANT DISCLAIMER"));
    }
}
