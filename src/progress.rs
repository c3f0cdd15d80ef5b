use crate::util::time;

/// One step of the staged progress animation.
#[derive(Debug, Clone, Copy)]
pub struct Stage {
    pub label: &'static str,
    pub duration_secs: f64,
}

/// The fixed pipeline the progress card walks through. Durations are
/// cosmetic; no work happens during any of them.
pub const STAGES: [Stage; 4] = [
    Stage {
        label: "Preprocessing scan data",
        duration_secs: 1.5,
    },
    Stage {
        label: "Analyzing brain structures",
        duration_secs: 2.0,
    },
    Stage {
        label: "Generating Grad-CAM heatmap",
        duration_secs: 1.5,
    },
    Stage {
        label: "Compiling results",
        duration_secs: 1.0,
    },
];

pub fn total_duration_secs() -> f64 {
    STAGES.iter().map(|s| s.duration_secs).sum()
}

/// Tracks a running mock analysis against wall-clock time.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisProgress {
    started_at: f64,
}

impl AnalysisProgress {
    pub fn start() -> Self {
        Self {
            started_at: time::current_time_secs(),
        }
    }

    fn elapsed(&self) -> f64 {
        (time::current_time_secs() - self.started_at).max(0.0)
    }

    /// Overall completion in [0, 1].
    pub fn fraction(&self) -> f32 {
        (self.elapsed() / total_duration_secs()).min(1.0) as f32
    }

    /// Index into `STAGES` for the step currently animating.
    pub fn current_stage(&self) -> usize {
        let elapsed = self.elapsed();
        let mut accumulated = 0.0;
        for (i, stage) in STAGES.iter().enumerate() {
            accumulated += stage.duration_secs;
            if elapsed < accumulated {
                return i;
            }
        }
        STAGES.len() - 1
    }

    pub fn is_complete(&self) -> bool {
        self.elapsed() >= total_duration_secs()
    }
}
