use eframe::egui;

use crate::analysis;
use crate::ledger::{CompareSelection, ConditionFilter, HistoryStore, SessionLedger, HISTORY_KEY};
use crate::measurement::MeasurementSet;
use crate::panels;
use crate::progress::AnalysisProgress;
use crate::session::{AnalysisSession, Condition};
use crate::upload::{ScanIntake, UploadedScan};

/// Which page of the app is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum View {
    #[default]
    Analyze,
    History,
    Compare,
}

/// Where the analyze workflow currently stands.
#[derive(Debug, Clone, Copy, Default)]
pub enum RunState {
    #[default]
    Idle,
    Running(AnalysisProgress),
    Complete {
        condition: Condition,
    },
}

/// Slice-viewer settings persisted across restarts.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ViewerPrefs {
    pub slice: u32,
    pub show_overlay: bool,
    pub heatmap_opacity: f32,
}

impl Default for ViewerPrefs {
    fn default() -> Self {
        Self {
            slice: 10,
            show_overlay: true,
            heatmap_opacity: 0.6,
        }
    }
}

/// We derive Deserialize/Serialize so we can persist app state on shutdown.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct NeuroScanApp {
    pub view: View,
    pub viewer: ViewerPrefs,
    /// Shared slice position of the compare page.
    pub compare_slice: u32,

    // Everything below is per-run or loaded separately, not part of the
    // serialized prefs blob.
    #[serde(skip)]
    pub scan: Option<UploadedScan>,
    #[serde(skip)]
    pub condition: Option<Condition>,
    #[serde(skip)]
    pub run: RunState,
    #[serde(skip)]
    pub measurements: MeasurementSet,
    #[serde(skip)]
    pub ledger: SessionLedger,
    #[serde(skip)]
    pub compare: CompareSelection,
    #[serde(skip)]
    pub history_filter: ConditionFilter,
    #[serde(skip)]
    pub intake: ScanIntake,
    #[serde(skip)]
    pub status: Option<String>,
}

impl Default for NeuroScanApp {
    fn default() -> Self {
        Self {
            view: View::default(),
            viewer: ViewerPrefs::default(),
            compare_slice: 10,
            scan: None,
            condition: None,
            run: RunState::default(),
            measurements: MeasurementSet::new(),
            ledger: SessionLedger::new(),
            compare: CompareSelection::new(),
            history_filter: ConditionFilter::default(),
            intake: ScanIntake::new(),
            status: None,
        }
    }
}

/// Adapts `eframe::Storage` to the ledger's store abstraction.
struct StorageAdapter<'a>(&'a mut dyn eframe::Storage);

impl HistoryStore for StorageAdapter<'_> {
    fn read(&self, key: &str) -> Option<String> {
        self.0.get_string(key)
    }

    fn write(&mut self, key: &str, value: String) {
        self.0.set_string(key, value);
    }
}

impl NeuroScanApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app: NeuroScanApp = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        app.ledger = SessionLedger::from_stored(
            cc.storage
                .and_then(|storage| storage.get_string(HISTORY_KEY))
                .as_deref(),
        );
        log::info!("loaded {} stored analysis sessions", app.ledger.len());

        app
    }

    /// Whether the start button should be live.
    pub fn can_start_analysis(&self) -> bool {
        self.scan.is_some() && self.condition.is_some() && matches!(self.run, RunState::Idle)
    }

    pub fn start_analysis(&mut self) {
        if !self.can_start_analysis() {
            return;
        }
        log::info!("analysis started");
        self.measurements.clear();
        self.status = None;
        self.run = RunState::Running(AnalysisProgress::start());
    }

    /// Clear the workflow back to the upload step.
    pub fn reset_analysis(&mut self) {
        self.scan = None;
        self.condition = None;
        self.run = RunState::Idle;
        self.measurements.clear();
        self.intake.clear_rejected();
        self.status = None;
    }

    fn finish_analysis(&mut self) {
        let RunState::Running(_) = self.run else {
            return;
        };
        let (Some(condition), Some(scan)) = (self.condition, self.scan.as_ref()) else {
            self.run = RunState::Idle;
            return;
        };

        let outcome = analysis::outcome_for(condition);
        self.ledger.append(AnalysisSession::new(
            condition,
            scan.name.clone(),
            outcome.probability,
            outcome.prediction,
        ));
        self.run = RunState::Complete { condition };
    }

    /// Export the completed analysis as a plain-text report.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn export_report(&mut self) {
        let RunState::Complete { condition } = self.run else {
            return;
        };
        let Some(scan) = self.scan.as_ref() else {
            return;
        };

        let Some(path) = rfd::FileDialog::new()
            .set_file_name("neuroscan_report.txt")
            .save_file()
        else {
            return;
        };

        let outcome = analysis::outcome_for(condition);
        let contents =
            crate::report::render_report(&scan.name, condition, outcome, chrono::Utc::now());
        self.status = match crate::report::export_report(&path, &contents) {
            Ok(()) => Some(format!("Report saved to {}", path.display())),
            Err(err) => {
                log::error!("report export failed: {err}");
                Some(format!("Export failed: {err}"))
            }
        };
    }
}

impl eframe::App for NeuroScanApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
        if self.ledger.is_dirty() {
            let mut store = StorageAdapter(storage);
            self.ledger.save_to(&mut store);
        }
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        // Advance a running analysis before drawing anything.
        if let RunState::Running(progress) = self.run {
            if progress.is_complete() {
                self.finish_analysis();
            } else {
                ctx.request_repaint_after(std::time::Duration::from_millis(50));
            }
        }

        egui::TopBottomPanel::top("top_nav").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("NeuroScan");
                ui.separator();
                ui.selectable_value(&mut self.view, View::Analyze, "Analyze");
                ui.selectable_value(&mut self.view, View::History, "History");
                ui.selectable_value(&mut self.view, View::Compare, "Compare");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak("Research demo — not for clinical use");
                });
            });
        });

        match self.view {
            View::Analyze => panels::analyze_panel(self, ctx),
            View::History => panels::history_panel(self, ctx),
            View::Compare => panels::compare_panel(self, ctx),
        }

        // Ledger mutations persist in the same pass that made them.
        if self.ledger.is_dirty() {
            if let Some(storage) = frame.storage_mut() {
                let mut store = StorageAdapter(storage);
                self.ledger.save_to(&mut store);
            }
        }
    }
}
