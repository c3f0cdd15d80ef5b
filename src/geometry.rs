use serde::{Deserialize, Serialize};

/// Pixel-to-millimeter conversion applied to on-screen distances.
/// In a real workstation this would come from the scan metadata.
pub const PIXEL_TO_MM: f64 = 0.5;

/// A location on the displayed slice, in image-pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<egui::Pos2> for Point {
    fn from(pos: egui::Pos2) -> Self {
        Self { x: pos.x, y: pos.y }
    }
}

impl From<Point> for egui::Pos2 {
    fn from(point: Point) -> Self {
        egui::pos2(point.x, point.y)
    }
}

/// Euclidean distance between two points, scaled to millimeters.
pub fn distance(p1: Point, p2: Point) -> f64 {
    let dx = (p2.x - p1.x) as f64;
    let dy = (p2.y - p1.y) as f64;
    (dx * dx + dy * dy).sqrt() * PIXEL_TO_MM
}

/// Angle at the vertex `p2`, in degrees, formed by the rays toward `p1` and `p3`.
///
/// Uses the dot-product formula with the cosine clamped to [-1, 1] so that
/// floating-point drift never produces a NaN from `acos`. If either ray has
/// zero length (a point coincides with the vertex) the result is 0.0.
pub fn angle(p1: Point, p2: Point, p3: Point) -> f64 {
    let v1 = ((p1.x - p2.x) as f64, (p1.y - p2.y) as f64);
    let v2 = ((p3.x - p2.x) as f64, (p3.y - p2.y) as f64);

    let mag1 = (v1.0 * v1.0 + v1.1 * v1.1).sqrt();
    let mag2 = (v2.0 * v2.0 + v2.1 * v2.1).sqrt();
    if mag1 == 0.0 || mag2 == 0.0 {
        return 0.0;
    }

    let dot = v1.0 * v2.0 + v1.1 * v2.1;
    let cos = (dot / (mag1 * mag2)).clamp(-1.0, 1.0);
    cos.acos().to_degrees()
}
