use eframe::egui;

use crate::analysis::{AnalysisOutcome, SLICE_COUNT};
use crate::app::NeuroScanApp;
use crate::geometry::Point;
use crate::measurement::MeasurementMode;

use super::{badge, card, ACCENT, PENDING};

/// Side length of the logical image space measurements are recorded in.
/// Screen positions are mapped into this space before they reach the
/// geometry engine, so measurements stay put when the window resizes.
const IMAGE_SIZE: f32 = 512.0;

/// The slice viewer card: mock slice rendering, heatmap overlay and the
/// measurement tools operating on the displayed image.
pub(super) fn viewer_card(app: &mut NeuroScanApp, ui: &mut egui::Ui, outcome: &AnalysisOutcome) {
    card(ui, |ui| {
        ui.horizontal(|ui| {
            ui.strong("MRI Slice Viewer");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.checkbox(&mut app.viewer.show_overlay, "Grad-CAM");
            });
        });

        tool_strip(app, ui);
        ui.add_space(4.0);

        let side = ui.available_width().min(420.0);
        let (response, painter) =
            ui.allocate_painter(egui::vec2(side, side), egui::Sense::click());
        let rect = response.rect;

        // Clicks land in image space, not screen space.
        if response.clicked() && app.measurements.mode() != MeasurementMode::None {
            if let Some(pos) = response.interact_pointer_pos() {
                let scale = IMAGE_SIZE / rect.width();
                let point = Point::new((pos.x - rect.min.x) * scale, (pos.y - rect.min.y) * scale);
                if let Some(m) = app.measurements.add_point(point) {
                    log::info!("measured {:.1} {}", m.value, m.unit);
                }
            }
        }

        let heat = if app.viewer.show_overlay {
            app.viewer.heatmap_opacity
        } else {
            0.0
        };
        paint_slice(&painter, rect, app.viewer.slice, heat, outcome.regions[0].severity);
        paint_measurements(app, &painter, rect);

        painter.text(
            rect.left_bottom() + egui::vec2(8.0, -8.0),
            egui::Align2::LEFT_BOTTOM,
            format!("Slice {} / {}", app.viewer.slice, SLICE_COUNT),
            egui::FontId::monospace(11.0),
            egui::Color32::WHITE,
        );

        ui.add_space(4.0);
        ui.label(egui::RichText::new("Navigate Slices").weak());
        ui.add(egui::Slider::new(&mut app.viewer.slice, 1..=SLICE_COUNT));

        thumbnail_strip(app, ui);

        if app.viewer.show_overlay {
            ui.label(egui::RichText::new("Heatmap Intensity").weak());
            ui.add(egui::Slider::new(&mut app.viewer.heatmap_opacity, 0.0..=1.0));
        }
    });
}

/// Measurement mode buttons plus the list of completed measurements.
fn tool_strip(app: &mut NeuroScanApp, ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Tools:").weak());

        let mode = app.measurements.mode();
        for (target, label, hover) in [
            (MeasurementMode::None, "Select", "Ignore clicks on the image"),
            (MeasurementMode::Distance, "📏 Distance", "Click two points to measure distance"),
            (MeasurementMode::Angle, "∠ Angle", "Click three points to measure angle"),
        ] {
            let response = ui.selectable_label(mode == target, label).on_hover_text(hover);
            if response.clicked() && mode != target {
                app.measurements.set_mode(target);
            }
        }

        if !app.measurements.is_empty() {
            ui.separator();
            if ui
                .button("🗑")
                .on_hover_text("Clear All Measurements")
                .clicked()
            {
                app.measurements.clear();
            }
        }
    });

    match app.measurements.mode() {
        MeasurementMode::None => {}
        MeasurementMode::Distance => {
            ui.label(egui::RichText::new("Click two points to measure distance").weak());
        }
        MeasurementMode::Angle => {
            ui.label(egui::RichText::new("Click three points to measure angle").weak());
        }
    }

    if !app.measurements.is_empty() {
        let rows: Vec<_> = app
            .measurements
            .measurements()
            .iter()
            .map(|m| (m.id, m.kind, m.value, m.unit))
            .collect();
        let mut delete = None;

        ui.label(
            egui::RichText::new(format!("Measurements ({})", rows.len()))
                .small()
                .weak(),
        );
        egui::ScrollArea::vertical()
            .id_salt("measurement_list_scroll")
            .max_height(96.0)
            .show(ui, |ui| {
                egui::Grid::new("measurement_list")
                    .num_columns(3)
                    .striped(true)
                    .show(ui, |ui| {
                        for (id, kind, value, unit) in &rows {
                            badge(ui, kind.label(), ACCENT);
                            ui.monospace(format!("{value:.1} {unit}"));
                            if ui.small_button("✕").clicked() {
                                delete = Some(*id);
                            }
                            ui.end_row();
                        }
                    });
            });

        if let Some(id) = delete {
            app.measurements.remove(id);
        }
    }
}

/// Paint one mock slice: a dark field, a brain-ish disc of concentric
/// rings, and (optionally) a two-cluster attention heatmap.
///
/// Shared with the compare page, which renders two of these side by side.
pub(crate) fn paint_slice(
    painter: &egui::Painter,
    rect: egui::Rect,
    slice: u32,
    heat_opacity: f32,
    severity: f64,
) {
    painter.rect_filled(rect, 6.0, egui::Color32::from_rgb(15, 23, 42));

    let center = rect.center();
    let brain_radius = rect.width() * 0.375;

    // Slices toward the middle of the stack show the largest cross-section.
    let depth = 1.0 - ((slice as f32 - SLICE_COUNT as f32 / 2.0).abs() / (SLICE_COUNT as f32 / 2.0));
    let disc_radius = brain_radius * (0.7 + 0.3 * depth);

    painter.circle_filled(center, disc_radius, egui::Color32::from_rgb(30, 41, 59));
    for i in 0..8 {
        let fraction = 0.3 + i as f32 * 0.1;
        let alpha = (40.0 * (1.0 - i as f32 / 10.0)) as u8;
        painter.circle_stroke(
            center,
            disc_radius * fraction,
            egui::Stroke::new(1.0, egui::Color32::from_rgba_unmultiplied(125, 211, 252, alpha)),
        );
    }

    if heat_opacity > 0.0 {
        let intensity = heat_opacity * severity as f32;
        // Layered translucent discs stand in for a blurred gradient.
        let primary = center + egui::vec2(-rect.width() * 0.12, -rect.width() * 0.12);
        for (fraction, color) in [
            (1.0, egui::Color32::from_rgb(250, 204, 21)),
            (0.7, egui::Color32::from_rgb(249, 115, 22)),
            (0.4, egui::Color32::from_rgb(239, 68, 68)),
        ] {
            painter.circle_filled(
                primary,
                rect.width() * 0.16 * fraction,
                color.gamma_multiply(intensity * 0.45),
            );
        }

        let secondary = center + egui::vec2(rect.width() * 0.14, rect.width() * 0.06);
        for (fraction, color) in [
            (1.0, egui::Color32::from_rgb(250, 204, 21)),
            (0.55, egui::Color32::from_rgb(249, 115, 22)),
        ] {
            painter.circle_filled(
                secondary,
                rect.width() * 0.09 * fraction,
                color.gamma_multiply(intensity * 0.35),
            );
        }
    }
}

/// Completed measurements in accent blue, the in-progress buffer in yellow.
fn paint_measurements(app: &NeuroScanApp, painter: &egui::Painter, rect: egui::Rect) {
    let scale = rect.width() / IMAGE_SIZE;
    let to_screen =
        |p: &Point| -> egui::Pos2 { rect.min + egui::vec2(p.x * scale, p.y * scale) };

    for measurement in app.measurements.measurements() {
        let points: Vec<egui::Pos2> = measurement.points.iter().map(&to_screen).collect();
        for pair in points.windows(2) {
            painter.line_segment([pair[0], pair[1]], egui::Stroke::new(1.5, ACCENT));
        }
        for pos in &points {
            painter.circle_filled(*pos, 3.0, ACCENT);
        }
        if let Some(anchor) = points.first() {
            painter.text(
                *anchor + egui::vec2(6.0, -6.0),
                egui::Align2::LEFT_BOTTOM,
                format!("{:.1} {}", measurement.value, measurement.unit),
                egui::FontId::monospace(11.0),
                egui::Color32::WHITE,
            );
        }
    }

    let pending: Vec<egui::Pos2> = app.measurements.pending().iter().map(&to_screen).collect();
    for pair in pending.windows(2) {
        painter.line_segment([pair[0], pair[1]], egui::Stroke::new(1.0, PENDING));
    }
    for pos in &pending {
        painter.circle_filled(*pos, 3.0, PENDING);
    }
}

/// One small clickable square per slice, mirroring the thumbnail rail.
fn thumbnail_strip(app: &mut NeuroScanApp, ui: &mut egui::Ui) {
    egui::ScrollArea::horizontal().show(ui, |ui| {
        ui.horizontal(|ui| {
            for i in 1..=SLICE_COUNT {
                let selected = app.viewer.slice == i;
                let fill = if selected {
                    ACCENT.gamma_multiply(0.35)
                } else {
                    egui::Color32::from_rgb(30, 41, 59)
                };
                let button = egui::Button::new(
                    egui::RichText::new(i.to_string()).monospace().small(),
                )
                .min_size(egui::vec2(28.0, 28.0))
                .fill(fill);
                if ui.add(button).clicked() {
                    app.viewer.slice = i;
                }
            }
        });
    });
}
