use eframe::egui;

use crate::analysis::{AnalysisOutcome, MODEL_BLURB, MODEL_NAME, RISK_THRESHOLD};

use super::{badge, card, ACCENT, DANGER, OK};

/// The dashboard shown next to the viewer once an analysis completes.
pub(super) fn results_card(ui: &mut egui::Ui, outcome: &AnalysisOutcome) {
    card(ui, |ui| {
        ui.horizontal(|ui| {
            if outcome.is_high_risk() {
                ui.label(egui::RichText::new("⚠").size(18.0).color(DANGER));
            } else {
                ui.label(egui::RichText::new("✔").size(18.0).color(OK));
            }
            ui.vertical(|ui| {
                ui.strong(outcome.prediction);
                ui.weak(outcome.stage);
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                badge(ui, &format!("{} Confidence", outcome.confidence.label()), ACCENT);
            });
        });

        ui.add_space(8.0);
        probability_meter(ui, outcome.probability);
    });

    card(ui, |ui| {
        ui.strong("Key Findings");
        egui::Grid::new("findings_grid")
            .num_columns(2)
            .spacing([24.0, 6.0])
            .striped(true)
            .show(ui, |ui| {
                for finding in outcome.findings {
                    ui.weak(finding.label);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.strong(finding.value);
                    });
                    ui.end_row();
                }
            });
    });

    card(ui, |ui| {
        ui.strong("Affected Regions");
        for region in outcome.regions {
            ui.horizontal(|ui| {
                ui.weak(region.name);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.monospace(format!("{:.0}%", region.severity * 100.0));
                });
            });
            ui.add(
                egui::ProgressBar::new(region.severity as f32)
                    .desired_height(6.0)
                    .fill(ACCENT.gamma_multiply(0.8)),
            );
        }
    });

    card(ui, |ui| {
        ui.strong(MODEL_NAME);
        ui.weak(MODEL_BLURB);
    });
}

/// Probability bar with the fixed high-risk threshold marked on it.
fn probability_meter(ui: &mut egui::Ui, probability: f64) {
    ui.horizontal(|ui| {
        ui.weak("Detection Probability");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.monospace(format!("{:.1}%", probability * 100.0));
        });
    });

    let response = ui.add(egui::ProgressBar::new(probability as f32).fill(ACCENT));
    let rect = response.rect;
    let threshold_x = rect.min.x + rect.width() * RISK_THRESHOLD as f32;
    ui.painter().line_segment(
        [
            egui::pos2(threshold_x, rect.min.y),
            egui::pos2(threshold_x, rect.max.y),
        ],
        egui::Stroke::new(2.0, DANGER),
    );

    ui.horizontal(|ui| {
        ui.small("Low Risk");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.small("High Risk");
            ui.add_space(ui.available_width() / 2.0 - 40.0);
            ui.small(
                egui::RichText::new(format!("Threshold ({:.0}%)", RISK_THRESHOLD * 100.0))
                    .color(DANGER),
            );
        });
    });
}
