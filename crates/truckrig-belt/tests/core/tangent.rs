use glam::DVec2;
use truckrig_belt::circle::Circle;
use truckrig_belt::tangent::{
    external_tangent_direction, TangentConstruction, TangentLine, TangentOrientation,
};
use truckrig_core::GeometryError;

fn reflect(v: DVec2, axis: DVec2) -> DVec2 {
    let axis = axis.normalize();
    2.0 * v.dot(axis) * axis - v
}

#[test]
fn test_orientation_follows_larger_circle() {
    let big = Circle::new(DVec2::new(0.0, 0.0), 20.0).unwrap();
    let small = Circle::new(DVec2::new(80.0, 10.0), 5.0).unwrap();

    let forward = TangentConstruction::solve(&big, &small).unwrap();
    assert_eq!(forward.orientation, TangentOrientation::Forward);
    assert_eq!(forward.main_center, big.center);

    let reversed = TangentConstruction::solve(&small, &big).unwrap();
    assert_eq!(reversed.orientation, TangentOrientation::Reversed);
    assert_eq!(reversed.main_center, big.center);

    // same construction circles, opposite solutions
    assert_eq!(forward.pos, reversed.pos);
    assert_eq!(forward.neg, reversed.neg);
    let pos_dir = (forward.pos - big.center).normalize();
    let neg_dir = (forward.neg - big.center).normalize();
    assert!((forward.direction().unwrap() - pos_dir).length() < 1e-12);
    assert!((reversed.direction().unwrap() - neg_dir).length() < 1e-12);
}

#[test]
fn test_role_swap_reflects_across_center_line() {
    let a = Circle::new(DVec2::new(-10.0, 5.0), 12.0).unwrap();
    let b = Circle::new(DVec2::new(70.0, 40.0), 6.0).unwrap();

    let ab = external_tangent_direction(&a, &b).unwrap();
    let ba = external_tangent_direction(&b, &a).unwrap();
    let axis = b.center - a.center;

    assert!((reflect(ab, axis) - ba).length() < 1e-9);
}

#[test]
fn test_reverse_tangent_is_the_other_side() {
    let a = Circle::new(DVec2::new(0.0, 0.0), 10.0).unwrap();
    let b = Circle::new(DVec2::new(50.0, 0.0), 15.0).unwrap();

    let there = TangentLine::between(&a, &b).unwrap();
    let back = TangentLine::between(&b, &a).unwrap();

    assert!(there.start.y > 0.0 && there.end.y > 0.0);
    assert!(back.start.y < 0.0 && back.end.y < 0.0);
    assert!((there.length - back.length).abs() < 1e-9);
}

#[test]
fn test_normal_is_left_of_travel() {
    let a = Circle::new(DVec2::new(0.0, 0.0), 8.0).unwrap();
    let b = Circle::new(DVec2::new(30.0, 60.0), 14.0).unwrap();
    let t = TangentLine::between(&a, &b).unwrap();

    assert!((t.normal - t.direction.perp()).length() < 1e-9);
}

#[test]
fn test_indices_are_recorded() {
    let a = Circle::new(DVec2::new(0.0, 0.0), 8.0).unwrap();
    let b = Circle::new(DVec2::new(30.0, 0.0), 8.0).unwrap();
    let t = TangentLine::between_indexed(&a, &b, 4, 9).unwrap();
    assert_eq!((t.from, t.to), (4, 9));
}

#[test]
fn test_concentric_circles_are_degenerate() {
    let a = Circle::new(DVec2::new(3.0, 3.0), 8.0).unwrap();
    let b = Circle::new(DVec2::new(3.0, 3.0), 2.0).unwrap();
    let err = external_tangent_direction(&a, &b).unwrap_err();
    assert!(matches!(err, GeometryError::DegenerateGeometry { .. }));
}

#[test]
fn test_equal_pulleys_below_the_difference_floor() {
    // centers closer than the floor radius cannot be solved
    let a = Circle::new(DVec2::new(0.0, 0.0), 1e-8).unwrap();
    let b = Circle::new(DVec2::new(1e-6, 0.0), 1e-8).unwrap();
    let err = external_tangent_direction(&a, &b).unwrap_err();
    assert!(matches!(err, GeometryError::DegenerateGeometry { .. }));

    // at unit scale the floor only tilts the normal by about 1e-4 rad
    let a = Circle::new(DVec2::new(0.0, 0.0), 0.1).unwrap();
    let b = Circle::new(DVec2::new(1.0, 0.0), 0.1).unwrap();
    let normal = external_tangent_direction(&a, &b).unwrap();
    assert!(normal.angle_to(DVec2::Y).abs() < 2e-4);
}
