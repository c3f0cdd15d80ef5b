use eframe::egui;

mod analyze_panel;
mod compare_panel;
mod history_panel;
mod results_panel;
mod viewer_panel;

pub use analyze_panel::analyze_panel;
pub use compare_panel::compare_panel;
pub use history_panel::history_panel;

/// Shared palette, loosely matching the web mock this demo is styled after.
pub(crate) const ACCENT: egui::Color32 = egui::Color32::from_rgb(14, 165, 233);
pub(crate) const DANGER: egui::Color32 = egui::Color32::from_rgb(239, 68, 68);
pub(crate) const OK: egui::Color32 = egui::Color32::from_rgb(34, 197, 94);
pub(crate) const PENDING: egui::Color32 = egui::Color32::from_rgb(250, 204, 21);

/// Small outlined pill, used for condition and risk labels.
pub(crate) fn badge(ui: &mut egui::Ui, text: &str, color: egui::Color32) {
    egui::Frame::none()
        .stroke(egui::Stroke::new(1.0, color.gamma_multiply(0.6)))
        .rounding(egui::Rounding::same(8.0))
        .inner_margin(egui::Margin::symmetric(6.0, 2.0))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).small().color(color));
        });
}

/// Card-style frame shared by all views.
pub(crate) fn card(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::group(ui.style())
        .rounding(egui::Rounding::same(8.0))
        .inner_margin(egui::Margin::same(12.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui);
        });
}
