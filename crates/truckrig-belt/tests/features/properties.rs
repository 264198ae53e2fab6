use glam::DVec2;
use proptest::prelude::*;
use std::f64::consts::TAU;
use truckrig_belt::circle::Circle;
use truckrig_belt::path::build_belt_path;
use truckrig_belt::tangent::{external_tangent_direction, TangentLine};

/// Two circles that neither touch nor contain each other.
fn separated_pair() -> impl Strategy<Value = (Circle, Circle)> {
    (
        1.0..30.0f64,
        1.0..30.0f64,
        1.0..200.0f64,
        0.0..TAU,
        prop::array::uniform2(-500.0..500.0f64),
    )
        .prop_map(|(ra, rb, gap, theta, [x, y])| {
            let origin = DVec2::new(x, y);
            let b_center = origin + DVec2::from_angle(theta) * (ra + rb + gap);
            (
                Circle::new(origin, ra).unwrap(),
                Circle::new(b_center, rb).unwrap(),
            )
        })
}

/// Pulleys spread around a ring, far enough apart to never overlap.
fn ring_of_circles() -> impl Strategy<Value = Vec<Circle>> {
    (3usize..=8, 200.0..400.0f64, 0.0..TAU).prop_flat_map(|(n, ring, phase)| {
        prop::collection::vec(5.0..20.0f64, n).prop_map(move |radii| {
            radii
                .iter()
                .enumerate()
                .map(|(i, &r)| {
                    let angle = phase + i as f64 * TAU / radii.len() as f64;
                    Circle::new(DVec2::from_angle(angle) * ring, r).unwrap()
                })
                .collect()
        })
    })
}

proptest! {
    #[test]
    fn tangent_direction_is_unit((a, b) in separated_pair()) {
        let direction = external_tangent_direction(&a, &b).unwrap();
        prop_assert!((direction.length() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn tangent_touches_both_circles((a, b) in separated_pair()) {
        let line = TangentLine::between(&a, &b).unwrap();
        prop_assert!((line.start.distance(a.center) - a.radius).abs() < 1e-6);
        prop_assert!((line.end.distance(b.center) - b.radius).abs() < 1e-6);
        prop_assert!(line.length > 0.0);
    }

    #[test]
    fn role_swap_reflects_direction((a, b) in separated_pair()) {
        prop_assume!((a.radius - b.radius).abs() > 0.5);

        let ab = external_tangent_direction(&a, &b).unwrap();
        let ba = external_tangent_direction(&b, &a).unwrap();
        let axis = (b.center - a.center).normalize();
        let reflected = 2.0 * ab.dot(axis) * axis - ab;

        prop_assert!((reflected - ba).length() < 1e-6);
    }

    #[test]
    fn ring_visits_every_circle_once(circles in ring_of_circles()) {
        let path = build_belt_path(&circles).unwrap();
        let n = circles.len();
        prop_assert_eq!(path.len(), n);

        let order = path.order();
        let start_x = circles[order[0]].center.x;
        prop_assert!(circles.iter().all(|c| c.center.x >= start_x));

        let mut sorted = order.clone();
        sorted.sort_unstable();
        prop_assert_eq!(sorted, (0..n).collect::<Vec<_>>());

        let parts = path.parts();
        for k in 0..n {
            let next = &parts[(k + 1) % n];
            prop_assert_eq!(parts[k].tangent.to, next.circle);
        }
        prop_assert!(path.total_length() > 0.0);
    }
}
