use eframe::egui;

/// File name extensions accepted as scan uploads. Validation is by name
/// only; the file content is never opened.
const SCAN_EXTENSIONS: [&str; 4] = [".dcm", ".nii", ".nii.gz", ".nifti"];

/// The scan the user picked for analysis. Only display metadata is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedScan {
    pub name: String,
    pub size_bytes: Option<u64>,
}

impl UploadedScan {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_path(path: &std::path::Path) -> Option<Self> {
        let name = path.file_name()?.to_string_lossy().into_owned();
        if !is_supported_scan(&name) {
            log::warn!("rejecting unsupported scan file: {name}");
            return None;
        }
        let size_bytes = std::fs::metadata(path).ok().map(|m| m.len());
        Some(Self { name, size_bytes })
    }

    pub fn size_label(&self) -> Option<String> {
        self.size_bytes
            .map(|bytes| format!("{:.2} MB", bytes as f64 / 1024.0 / 1024.0))
    }
}

/// Whether a file name looks like a DICOM or NIfTI scan.
pub fn is_supported_scan(name: &str) -> bool {
    let lowered = name.to_lowercase();
    SCAN_EXTENSIONS.iter().any(|ext| lowered.ends_with(ext)) || lowered.contains("dicom")
}

/// Collects scan files dragged onto the window.
#[derive(Debug, Default)]
pub struct ScanIntake {
    rejected: Option<String>,
}

impl ScanIntake {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the most recently rejected drop, for the upload card to show.
    pub fn last_rejected(&self) -> Option<&str> {
        self.rejected.as_deref()
    }

    pub fn clear_rejected(&mut self) {
        self.rejected = None;
    }

    /// Check this frame's dropped files for a usable scan.
    pub fn poll_dropped(&mut self, ctx: &egui::Context) -> Option<UploadedScan> {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if dropped.is_empty() {
            return None;
        }

        for file in &dropped {
            let name = if let Some(path) = &file.path {
                path.file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string())
            } else if !file.name.is_empty() {
                file.name.clone()
            } else {
                "unknown".to_owned()
            };

            if !is_supported_scan(&name) {
                log::warn!("dropped file is not a supported scan type: {name}");
                self.rejected = Some(name);
                continue;
            }

            let size_bytes = file
                .bytes
                .as_ref()
                .map(|bytes| bytes.len() as u64)
                .or_else(|| {
                    file.path
                        .as_ref()
                        .and_then(|p| std::fs::metadata(p).ok())
                        .map(|m| m.len())
                });

            log::info!("accepted dropped scan: {name}");
            self.rejected = None;
            return Some(UploadedScan { name, size_bytes });
        }

        None
    }

    /// Dim the window and list the hovered files while a drag is in flight.
    pub fn preview_hovered(&self, ctx: &egui::Context) {
        use egui::{Align2, Color32, Id, LayerId, Order, TextStyle};

        if ctx.input(|i| i.raw.hovered_files.is_empty()) {
            return;
        }

        let text = ctx.input(|i| {
            let mut text = "Drop scan to upload:".to_owned();
            for file in &i.raw.hovered_files {
                if let Some(path) = &file.path {
                    text += &format!("\n{}", path.display());
                } else {
                    text += "\n(path not available)";
                }
            }
            text
        });

        let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("scan_drop_target")));
        let screen_rect = ctx.screen_rect();
        painter.rect_filled(screen_rect, 0.0, Color32::from_black_alpha(192));
        painter.text(
            screen_rect.center(),
            Align2::CENTER_CENTER,
            text,
            TextStyle::Heading.resolve(&ctx.style()),
            Color32::WHITE,
        );
    }

    /// Open a native file picker for scan files.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn browse(&mut self) -> Option<UploadedScan> {
        let path = rfd::FileDialog::new()
            .add_filter("MRI scans", &["dcm", "nii", "gz", "nifti"])
            .pick_file()?;
        let scan = UploadedScan::from_path(&path);
        if scan.is_none() {
            self.rejected = Some(path.display().to_string());
        }
        scan
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_dicom_and_nifti_names() {
        assert!(is_supported_scan("brain_scan_001.nii"));
        assert!(is_supported_scan("mri_scan_002.dcm"));
        assert!(is_supported_scan("patient.NII.GZ"));
        assert!(is_supported_scan("followup.nifti"));
        assert!(is_supported_scan("dicom_export_01"));
    }

    #[test]
    fn rejects_other_names() {
        assert!(!is_supported_scan("notes.txt"));
        assert!(!is_supported_scan("scan.png"));
        assert!(!is_supported_scan("nii"));
        assert!(!is_supported_scan(""));
    }
}
