use neuroscan::geometry::{self, Point};
use neuroscan::measurement::{MeasurementKind, MeasurementMode, MeasurementSet};

fn p(x: f32, y: f32) -> Point {
    Point::new(x, y)
}

#[test]
fn distance_is_symmetric() {
    let pairs = [
        (p(0.0, 0.0), p(10.0, 0.0)),
        (p(3.0, 4.0), p(-7.0, 2.5)),
        (p(120.5, 33.0), p(120.5, 90.0)),
    ];
    for (a, b) in pairs {
        assert_eq!(geometry::distance(a, b), geometry::distance(b, a));
    }
}

#[test]
fn distance_of_coincident_points_is_zero() {
    for point in [p(0.0, 0.0), p(17.25, -4.0), p(512.0, 512.0)] {
        assert_eq!(geometry::distance(point, point), 0.0);
    }
}

#[test]
fn distance_applies_pixel_to_mm_conversion() {
    // 10 px apart at 0.5 mm/px.
    let value = geometry::distance(p(0.0, 0.0), p(10.0, 0.0));
    assert!((value - 5.0).abs() < 1e-9);
}

#[test]
fn right_angle_measures_ninety_degrees() {
    let value = geometry::angle(p(1.0, 0.0), p(0.0, 0.0), p(0.0, 1.0));
    assert!((value - 90.0).abs() < 1e-9);
}

#[test]
fn angle_stays_within_zero_and_one_eighty() {
    let triples = [
        (p(1.0, 0.0), p(0.0, 0.0), p(-1.0, 0.0)),
        (p(5.0, 1.0), p(2.0, 2.0), p(9.0, -3.0)),
        (p(0.0, 10.0), p(0.0, 0.0), p(0.001, 10.0)),
        (p(-4.0, -4.0), p(1.0, 1.0), p(6.0, 6.0)),
    ];
    for (a, vertex, b) in triples {
        let value = geometry::angle(a, vertex, b);
        assert!((0.0..=180.0).contains(&value), "got {value}");
    }
}

#[test]
fn angle_is_symmetric_about_the_vertex() {
    let (a, vertex, b) = (p(5.0, 1.0), p(2.0, 2.0), p(9.0, -3.0));
    assert_eq!(geometry::angle(a, vertex, b), geometry::angle(b, vertex, a));
}

#[test]
fn coincident_vertex_yields_zero_not_nan() {
    let vertex = p(2.0, 2.0);
    assert_eq!(geometry::angle(vertex, vertex, p(9.0, -3.0)), 0.0);
    assert_eq!(geometry::angle(p(5.0, 1.0), vertex, vertex), 0.0);
    assert_eq!(geometry::angle(vertex, vertex, vertex), 0.0);
}

#[test]
fn two_points_complete_a_distance_measurement() {
    let mut set = MeasurementSet::new();
    set.set_mode(MeasurementMode::Distance);

    assert!(set.add_point(p(0.0, 0.0)).is_none());
    assert_eq!(set.pending().len(), 1);

    let completed = set.add_point(p(10.0, 0.0)).expect("second point completes");
    assert_eq!(completed.kind, MeasurementKind::Distance);
    assert_eq!(completed.unit, "mm");
    assert!((completed.value - 5.0).abs() < 1e-9);

    assert!(set.pending().is_empty());
    assert_eq!(set.measurements().len(), 1);
}

#[test]
fn three_points_complete_an_angle_measurement() {
    let mut set = MeasurementSet::new();
    set.set_mode(MeasurementMode::Angle);

    assert!(set.add_point(p(1.0, 0.0)).is_none());
    assert!(set.add_point(p(0.0, 0.0)).is_none());
    let completed = set.add_point(p(0.0, 1.0)).expect("third point completes");

    assert_eq!(completed.kind, MeasurementKind::Angle);
    assert_eq!(completed.unit, "°");
    assert!((completed.value - 90.0).abs() < 1e-9);
    assert_eq!(completed.points.len(), 3);
    assert!(set.pending().is_empty());
}

#[test]
fn points_are_ignored_without_an_active_tool() {
    let mut set = MeasurementSet::new();
    assert_eq!(set.mode(), MeasurementMode::None);

    assert!(set.add_point(p(1.0, 1.0)).is_none());
    assert!(set.add_point(p(2.0, 2.0)).is_none());
    assert!(set.pending().is_empty());
    assert!(set.measurements().is_empty());
}

#[test]
fn switching_tools_discards_pending_points() {
    let mut set = MeasurementSet::new();
    set.set_mode(MeasurementMode::Angle);
    set.add_point(p(100.0, 100.0));
    assert_eq!(set.pending().len(), 1);

    // The stale angle point must not leak into the new distance measurement.
    set.set_mode(MeasurementMode::Distance);
    assert!(set.pending().is_empty());

    set.add_point(p(0.0, 0.0));
    let completed = set.add_point(p(10.0, 0.0)).expect("distance completes");
    assert_eq!(completed.kind, MeasurementKind::Distance);
    assert_eq!(completed.points.len(), 2);
    assert_eq!(set.measurements().len(), 1);
}

#[test]
fn measurements_can_be_deleted_individually_or_cleared() {
    let mut set = MeasurementSet::new();
    set.set_mode(MeasurementMode::Distance);
    set.add_point(p(0.0, 0.0));
    set.add_point(p(10.0, 0.0));
    set.add_point(p(0.0, 0.0));
    set.add_point(p(0.0, 8.0));
    assert_eq!(set.measurements().len(), 2);

    let id = set.measurements()[0].id;
    set.remove(id);
    assert_eq!(set.measurements().len(), 1);
    assert!(set.measurements().iter().all(|m| m.id != id));

    // Removing the same id again is a no-op.
    set.remove(id);
    assert_eq!(set.measurements().len(), 1);

    set.clear();
    assert!(set.measurements().is_empty());
    assert!(set.pending().is_empty());
}
