use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geometry::{self, Point};

/// What a completed measurement represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeasurementKind {
    Distance,
    Angle,
}

impl MeasurementKind {
    /// Number of points required to complete a measurement of this kind.
    pub fn arity(self) -> usize {
        match self {
            Self::Distance => 2,
            Self::Angle => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Distance => "Distance",
            Self::Angle => "Angle",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Self::Distance => "mm",
            Self::Angle => "°",
        }
    }
}

/// The active measurement tool. `None` means clicks on the viewer are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeasurementMode {
    #[default]
    None,
    Distance,
    Angle,
}

impl MeasurementMode {
    pub fn kind(self) -> Option<MeasurementKind> {
        match self {
            Self::None => None,
            Self::Distance => Some(MeasurementKind::Distance),
            Self::Angle => Some(MeasurementKind::Angle),
        }
    }
}

/// A completed geometric measurement on the slice viewer.
///
/// `points` always holds exactly `kind.arity()` entries; the record is
/// created in one step once the last point lands and is never edited after.
/// Measurements live with the run that produced them and are not persisted.
#[derive(Debug, Clone)]
pub struct Measurement {
    pub id: Uuid,
    pub kind: MeasurementKind,
    pub points: Vec<Point>,
    pub value: f64,
    pub unit: &'static str,
}

impl Measurement {
    fn from_points(kind: MeasurementKind, points: Vec<Point>) -> Self {
        debug_assert_eq!(points.len(), kind.arity());
        let value = match kind {
            MeasurementKind::Distance => geometry::distance(points[0], points[1]),
            MeasurementKind::Angle => geometry::angle(points[0], points[1], points[2]),
        };
        Self {
            id: Uuid::new_v4(),
            kind,
            points,
            value,
            unit: kind.unit(),
        }
    }
}

/// Collects clicked points under the active mode and turns them into
/// `Measurement`s once enough have been gathered.
#[derive(Debug, Default)]
pub struct MeasurementSet {
    mode: MeasurementMode,
    pending: Vec<Point>,
    completed: Vec<Measurement>,
}

impl MeasurementSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> MeasurementMode {
        self.mode
    }

    /// Switch tools. Any in-progress point sequence is discarded; selecting
    /// a new tool always starts from a clean buffer.
    pub fn set_mode(&mut self, mode: MeasurementMode) {
        self.mode = mode;
        self.pending.clear();
    }

    pub fn pending(&self) -> &[Point] {
        &self.pending
    }

    pub fn measurements(&self) -> &[Measurement] {
        &self.completed
    }

    pub fn is_empty(&self) -> bool {
        self.completed.is_empty()
    }

    /// Feed one clicked point to the active tool.
    ///
    /// Returns the measurement that this point completed, if any. In `None`
    /// mode the point is ignored entirely.
    pub fn add_point(&mut self, point: Point) -> Option<&Measurement> {
        let kind = self.mode.kind()?;

        self.pending.push(point);
        if self.pending.len() < kind.arity() {
            return None;
        }

        let points = std::mem::take(&mut self.pending);
        let measurement = Measurement::from_points(kind, points);
        log::debug!(
            "completed {} measurement: {:.1} {}",
            measurement.kind.label(),
            measurement.value,
            measurement.unit
        );
        self.completed.push(measurement);
        self.completed.last()
    }

    /// Delete one measurement. Unknown ids are ignored.
    pub fn remove(&mut self, id: Uuid) {
        self.completed.retain(|m| m.id != id);
    }

    /// Drop every measurement along with any pending points.
    pub fn clear(&mut self) {
        self.completed.clear();
        self.pending.clear();
    }
}
