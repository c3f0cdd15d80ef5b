use eframe::egui;

use crate::analysis::{self, SLICE_COUNT};
use crate::app::{NeuroScanApp, View};
use crate::session::AnalysisSession;

use super::{badge, card, viewer_panel, ACCENT, DANGER, OK};

/// Side-by-side comparison of the two history entries picked for it.
pub fn compare_panel(app: &mut NeuroScanApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            if ui.button("← Back").clicked() {
                app.view = View::History;
            }
            ui.heading("Scan Comparison");
            ui.weak("Compare two analyses side by side to track progression");
            ui.add_space(8.0);

            let pair = app.compare.pair().and_then(|(first, second)| {
                Some((app.ledger.find(first)?.clone(), app.ledger.find(second)?.clone()))
            });

            match pair {
                None => missing_selection(app, ui),
                Some((first, second)) => comparison(app, ui, &first, &second),
            }
        });
    });
}

fn missing_selection(app: &mut NeuroScanApp, ui: &mut egui::Ui) {
    card(ui, |ui| {
        ui.add_space(24.0);
        ui.vertical_centered(|ui| {
            ui.strong("No Scans Selected");
            ui.weak("Please select two scans from your history to compare.");
            ui.add_space(8.0);
            if ui.button("← Go to History").clicked() {
                app.view = View::History;
            }
        });
        ui.add_space(24.0);
    });
}

fn comparison(
    app: &mut NeuroScanApp,
    ui: &mut egui::Ui,
    first: &AnalysisSession,
    second: &AnalysisSession,
) {
    let slice = app.compare_slice;
    ui.columns(2, |columns| {
        scan_card(&mut columns[0], first, "Earlier Scan", slice);
        scan_card(&mut columns[1], second, "Later Scan", slice);
    });

    ui.add_space(8.0);
    card(ui, |ui| {
        ui.weak("Navigate Both Scans (Slice Position)");
        ui.add(egui::Slider::new(&mut app.compare_slice, 1..=SLICE_COUNT));
    });

    ui.add_space(8.0);
    change_summary(ui, first, second);
}

fn scan_card(ui: &mut egui::Ui, session: &AnalysisSession, role: &str, slice: u32) {
    card(ui, |ui| {
        ui.horizontal(|ui| {
            badge(ui, role, ACCENT);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.weak(format!("🕐 {}", session.recorded_at.format("%b %e, %Y")));
            });
        });

        let side = ui.available_width().min(320.0);
        let (response, painter) =
            ui.allocate_painter(egui::vec2(side, side), egui::Sense::hover());
        let severity = analysis::outcome_for(session.condition).regions[0].severity;
        viewer_panel::paint_slice(
            &painter,
            response.rect,
            slice,
            session.probability as f32 * 0.8,
            severity,
        );
        painter.text(
            response.rect.left_bottom() + egui::vec2(8.0, -8.0),
            egui::Align2::LEFT_BOTTOM,
            format!("Slice {slice} / {SLICE_COUNT}"),
            egui::FontId::monospace(11.0),
            egui::Color32::WHITE,
        );

        ui.horizontal(|ui| {
            ui.weak(session.condition.short_label());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(format!("{:.1}%", session.probability * 100.0))
                        .monospace()
                        .size(18.0),
                );
            });
        });
        ui.weak(&session.source_name);
    });
}

fn change_summary(ui: &mut egui::Ui, first: &AnalysisSession, second: &AnalysisSession) {
    let delta = second.probability - first.probability;
    let relative = if first.probability != 0.0 {
        delta / first.probability * 100.0
    } else {
        0.0
    };
    let days_apart = (second.recorded_at - first.recorded_at).num_days();

    let neutral = ui.visuals().weak_text_color();
    let delta_color = if delta > 0.01 {
        DANGER
    } else if delta < -0.01 {
        OK
    } else {
        neutral
    };

    card(ui, |ui| {
        ui.strong("🧠 Change Summary");
        ui.add_space(4.0);

        ui.columns(3, |columns| {
            summary_tile(
                &mut columns[0],
                format!("{}{:.1}%", if delta > 0.0 { "+" } else { "" }, delta * 100.0),
                "Probability Change",
                delta_color,
            );
            summary_tile(&mut columns[1], days_apart.to_string(), "Days Apart", neutral);
            summary_tile(
                &mut columns[2],
                format!("{}{relative:.1}%", if relative > 0.0 { "+" } else { "" }),
                "Relative Change",
                delta_color,
            );
        });

        ui.add_space(4.0);
        ui.vertical_centered(|ui| {
            ui.weak(if delta > 0.05 {
                "⚠ Significant increase detected. Consider clinical follow-up."
            } else if delta < -0.05 {
                "✔ Improvement observed. Continue monitoring."
            } else {
                "Relatively stable. Regular monitoring recommended."
            });
        });
    });
}

fn summary_tile(ui: &mut egui::Ui, value: String, label: &str, color: egui::Color32) {
    card(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(value)
                    .monospace()
                    .size(20.0)
                    .color(color),
            );
            ui.weak(label);
        });
    });
}
