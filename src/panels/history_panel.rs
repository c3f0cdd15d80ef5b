use std::collections::HashSet;

use chrono::{DateTime, Utc};
use eframe::egui;
use uuid::Uuid;

use crate::app::{NeuroScanApp, View};
use crate::ledger::ConditionFilter;
use crate::session::{Condition, RiskLevel};

use super::{badge, card, ACCENT, DANGER, OK, PENDING};

/// Row data snapshot so the render loop does not hold a ledger borrow.
struct Row {
    id: Uuid,
    condition: Condition,
    prediction: String,
    source_name: String,
    recorded_at: DateTime<Utc>,
    probability: f64,
    risk: RiskLevel,
}

/// The persisted history of completed analyses.
pub fn history_panel(app: &mut NeuroScanApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.heading("Analysis History");
            ui.weak("View and manage your past MRI scan analyses");
            ui.add_space(8.0);

            controls_row(app, ui);
            ui.add_space(8.0);

            let rows: Vec<Row> = app
                .ledger
                .filter(app.history_filter)
                .into_iter()
                .map(|s| Row {
                    id: s.id,
                    condition: s.condition,
                    prediction: s.prediction.clone(),
                    source_name: s.source_name.clone(),
                    recorded_at: s.recorded_at,
                    probability: s.probability,
                    risk: s.risk(),
                })
                .collect();

            if rows.is_empty() {
                empty_state(app, ui);
            } else {
                session_rows(app, ui, &rows);
                ui.add_space(12.0);
                summary_stats(app, ui);
            }
        });
    });
}

fn controls_row(app: &mut NeuroScanApp, ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.weak("Filter by:");
        egui::ComboBox::from_id_salt("history_filter")
            .selected_text(app.history_filter.label())
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut app.history_filter, ConditionFilter::All, "All Conditions");
                for condition in Condition::ALL {
                    ui.selectable_value(
                        &mut app.history_filter,
                        ConditionFilter::Only(condition),
                        condition.short_label(),
                    );
                }
            });

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if !app.ledger.is_empty() {
                if ui
                    .button(egui::RichText::new("🗑 Clear All").color(DANGER))
                    .clicked()
                {
                    app.ledger.clear();
                    app.compare.clear();
                }
            }
            if ui.button("🧠 New Analysis").clicked() {
                app.view = View::Analyze;
            }
            match app.compare.len() {
                1 => {
                    ui.weak("Select 1 more scan to compare");
                }
                2 => {
                    if ui.button("⇄ Compare Selected").clicked() {
                        app.view = View::Compare;
                    }
                }
                _ => {}
            }
        });
    });
}

fn session_rows(app: &mut NeuroScanApp, ui: &mut egui::Ui, rows: &[Row]) {
    let mut delete = None;
    let mut toggle = None;

    for row in rows {
        card(ui, |ui| {
            ui.horizontal(|ui| {
                let mut selected = app.compare.contains(row.id);
                if ui.checkbox(&mut selected, "").changed() {
                    toggle = Some(row.id);
                }

                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        badge(ui, row.condition.short_label(), ACCENT);
                        let risk_color = match row.risk {
                            RiskLevel::High => DANGER,
                            RiskLevel::Moderate => PENDING,
                            RiskLevel::Low => OK,
                        };
                        badge(ui, row.risk.label(), risk_color);
                    });
                    ui.strong(&row.prediction);
                    ui.horizontal(|ui| {
                        ui.weak(format!("🗋 {}", row.source_name));
                        ui.weak(format!(
                            "🕐 {}",
                            row.recorded_at.format("%b %e, %Y %H:%M")
                        ));
                    });
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .button(egui::RichText::new("🗑").color(DANGER))
                        .on_hover_text("Delete this record")
                        .clicked()
                    {
                        delete = Some(row.id);
                    }
                    ui.vertical(|ui| {
                        ui.small("Probability");
                        ui.label(
                            egui::RichText::new(format!("{:.1}%", row.probability * 100.0))
                                .monospace()
                                .size(18.0)
                                .color(ACCENT),
                        );
                    });
                });
            });
        });
    }

    if let Some(id) = toggle {
        app.compare.toggle(id);
    }
    if let Some(id) = delete {
        app.ledger.remove(id);
        // A deleted record cannot stay picked for comparison.
        if app.compare.contains(id) {
            app.compare.toggle(id);
        }
    }
}

fn empty_state(app: &mut NeuroScanApp, ui: &mut egui::Ui) {
    card(ui, |ui| {
        ui.add_space(32.0);
        ui.vertical_centered(|ui| {
            ui.strong("No Analysis Records");
            ui.weak("Your analysis history will appear here. Start by uploading an MRI scan.");
            ui.add_space(8.0);
            if ui.button("Start First Analysis").clicked() {
                app.view = View::Analyze;
            }
        });
        ui.add_space(32.0);
    });
}

fn summary_stats(app: &NeuroScanApp, ui: &mut egui::Ui) {
    let sessions = app.ledger.sessions();
    let high_risk = sessions.iter().filter(|s| s.probability > 0.7).count();
    let conditions: HashSet<Condition> = sessions.iter().map(|s| s.condition).collect();

    ui.columns(3, |columns| {
        stat_tile(&mut columns[0], sessions.len(), "Total Analyses");
        stat_tile(&mut columns[1], high_risk, "High Risk Detected");
        stat_tile(&mut columns[2], conditions.len(), "Conditions Analyzed");
    });
}

fn stat_tile(ui: &mut egui::Ui, value: usize, label: &str) {
    card(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(egui::RichText::new(value.to_string()).size(24.0).strong());
            ui.weak(label);
        });
    });
}
