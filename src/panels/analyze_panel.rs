use eframe::egui;

use crate::analysis;
use crate::app::{NeuroScanApp, RunState};
use crate::progress::{AnalysisProgress, STAGES};
use crate::session::Condition;

use super::{card, results_panel, viewer_panel, ACCENT, DANGER};

const LIMITATIONS: [&str; 4] = [
    "This is a research demonstration and should not be used for clinical diagnosis.",
    "Results are generated from mock data for demonstration purposes only.",
    "Actual model performance may vary based on scan quality and patient demographics.",
    "Always consult qualified healthcare professionals for medical decisions.",
];

/// The main workflow page: upload, condition pick, run, results.
pub fn analyze_panel(app: &mut NeuroScanApp, ctx: &egui::Context) {
    // Drag-and-drop intake is live whenever a new upload would be accepted.
    if matches!(app.run, RunState::Idle) {
        if let Some(scan) = app.intake.poll_dropped(ctx) {
            app.scan = Some(scan);
        }
        app.intake.preview_hovered(ctx);
    }

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.heading("MRI Scan Analysis");
            ui.weak("Upload your MRI or fMRI scan and select the condition to analyze");
            ui.add_space(8.0);

            ui.columns(2, |columns| {
                workflow_column(app, &mut columns[0]);
                results_column(app, &mut columns[1]);
            });

            ui.add_space(12.0);
            card(ui, |ui| {
                ui.strong("Important Limitations");
                for line in LIMITATIONS {
                    ui.horizontal_wrapped(|ui| {
                        ui.label(egui::RichText::new("•").color(ACCENT));
                        ui.weak(line);
                    });
                }
            });
        });
    });
}

fn workflow_column(app: &mut NeuroScanApp, ui: &mut egui::Ui) {
    let idle = matches!(app.run, RunState::Idle);

    card(ui, |ui| {
        ui.strong("1. Upload Scan");
        ui.add_space(4.0);
        match app.scan.clone() {
            Some(scan) => {
                ui.label(egui::RichText::new(format!("✔ {}", scan.name)).strong());
                if let Some(size) = scan.size_label() {
                    ui.weak(size);
                }
                if ui.add_enabled(idle, egui::Button::new("Remove")).clicked() {
                    app.scan = None;
                }
            }
            None => {
                ui.label("Drag & drop your MRI scan");
                ui.weak("Supports DICOM (.dcm) and NIfTI (.nii, .nii.gz) formats");
                #[cfg(not(target_arch = "wasm32"))]
                if ui.add_enabled(idle, egui::Button::new("Browse…")).clicked() {
                    if let Some(scan) = app.intake.browse() {
                        app.scan = Some(scan);
                    }
                }
                if let Some(rejected) = app.intake.last_rejected() {
                    ui.label(
                        egui::RichText::new(format!("Not a supported scan: {rejected}"))
                            .color(DANGER),
                    );
                }
            }
        }
    });

    card(ui, |ui| {
        ui.strong("2. Select Condition");
        ui.add_space(4.0);
        ui.add_enabled_ui(idle, |ui| {
            egui::ComboBox::from_id_salt("condition_select")
                .width(ui.available_width())
                .selected_text(
                    app.condition
                        .map(Condition::label)
                        .unwrap_or("Choose a neurological condition..."),
                )
                .show_ui(ui, |ui| {
                    for condition in Condition::ALL {
                        ui.selectable_value(&mut app.condition, Some(condition), condition.label());
                    }
                });
        });
        if let Some(condition) = app.condition {
            ui.weak(condition.description());
        }
    });

    match app.run {
        RunState::Idle => {
            let start = ui.add_enabled(
                app.can_start_analysis(),
                egui::Button::new("▶ Start Analysis").min_size(egui::vec2(160.0, 32.0)),
            );
            if start.clicked() {
                app.start_analysis();
            }
            if !app.can_start_analysis() {
                ui.weak("Upload a scan and select a condition to begin.");
            }
        }
        RunState::Running(progress) => progress_card(ui, &progress),
        RunState::Complete { .. } => {
            ui.horizontal(|ui| {
                if ui.button("↺ New Analysis").clicked() {
                    app.reset_analysis();
                }
                #[cfg(not(target_arch = "wasm32"))]
                if ui.button("⬇ Export Report").clicked() {
                    app.export_report();
                }
            });
            if let Some(status) = &app.status {
                ui.weak(status.clone());
            }
        }
    }
}

fn results_column(app: &mut NeuroScanApp, ui: &mut egui::Ui) {
    match app.run {
        RunState::Complete { condition } => {
            let outcome = analysis::outcome_for(condition);
            viewer_panel::viewer_card(app, ui, outcome);
            results_panel::results_card(ui, outcome);
        }
        _ => {
            card(ui, |ui| {
                ui.add_space(48.0);
                ui.vertical_centered(|ui| {
                    ui.strong("No Results Yet");
                    ui.weak(
                        "Upload an MRI scan and select a condition to analyze. \
                         Results will appear here once the analysis is complete.",
                    );
                });
                ui.add_space(48.0);
            });
        }
    }
}

/// Staged progress readout for the running mock analysis.
fn progress_card(ui: &mut egui::Ui, progress: &AnalysisProgress) {
    let current = progress.current_stage();

    card(ui, |ui| {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.strong("Analyzing MRI Scan");
                ui.weak(STAGES[current].label);
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.monospace(format!("{:.0}%", progress.fraction() * 100.0));
            });
        });

        ui.add(egui::ProgressBar::new(progress.fraction()).fill(ACCENT));

        ui.horizontal(|ui| {
            for (i, stage) in STAGES.iter().enumerate() {
                let color = if i <= current {
                    ACCENT
                } else {
                    ui.visuals().weak_text_color()
                };
                ui.label(egui::RichText::new(stage.label).small().color(color));
                if i + 1 < STAGES.len() {
                    ui.separator();
                }
            }
        });
    });
}
