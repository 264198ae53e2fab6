use glam::DVec2;
use std::f64::consts::PI;
use truckrig_belt::circle::Circle;
use truckrig_belt::path::{build_belt_path, BeltPathBuilder};
use truckrig_core::GeometryError;

fn circle(x: f64, y: f64, r: f64) -> Circle {
    Circle::new(DVec2::new(x, y), r).unwrap()
}

fn wheels() -> Vec<Circle> {
    vec![
        circle(0.0, 0.0, 10.0),
        circle(50.0, 0.0, 15.0),
        circle(100.0, 0.0, 10.0),
    ]
}

#[test]
fn test_wheel_scenario_order() {
    let path = build_belt_path(&wheels()).unwrap();

    assert_eq!(path.len(), 3);
    assert_eq!(path.order(), vec![0, 1, 2]);

    let hops: Vec<_> = path.tangents().map(|t| (t.from, t.to)).collect();
    assert_eq!(hops, vec![(0, 1), (1, 2), (2, 0)]);
}

#[test]
fn test_wheel_scenario_lengths() {
    let path = build_belt_path(&wheels()).unwrap();

    for tangent in path.tangents() {
        assert!(tangent.length > 0.0);
        assert!(tangent.length.is_finite());
    }
    // the return run is the straight lower tangent between the outer wheels
    let back = path.parts()[2].tangent;
    assert!((back.length - 100.0).abs() < 1e-6);
    assert!((back.start.y + 10.0).abs() < 1e-3);
}

#[test]
fn test_wheel_scenario_middle_arc_is_short() {
    let path = build_belt_path(&wheels()).unwrap();
    let part = path.part_for_circle(1).unwrap();

    assert!(!part.arc.is_degenerate());
    assert!(part.arc.sweep() < PI);
    assert!(part.arc.sweep() > 0.0);
    // both contact points on the top of the big wheel
    assert!(part.arc.start.y > 14.0);
    assert!(part.arc.end.y > 14.0);
    assert!(part.arc.start.x < part.arc.end.x);
}

#[test]
fn test_wheel_scenario_outer_arcs_wrap_the_ends() {
    let path = build_belt_path(&wheels()).unwrap();

    let left = path.part_for_circle(0).unwrap().arc;
    let right = path.part_for_circle(2).unwrap().arc;
    assert!(left.sweep() > PI * 0.9);
    assert!(right.sweep() > PI * 0.9);
}

#[test]
fn test_collinear_equal_circles_visit_each_once() {
    for n in 2..=7 {
        let circles: Vec<_> = (0..n).map(|i| circle(i as f64 * 40.0, 0.0, 10.0)).collect();
        let path = build_belt_path(&circles).unwrap();

        assert_eq!(path.len(), n);
        let mut order = path.order();
        assert_eq!(order[0], 0);
        order.sort_unstable();
        assert_eq!(order, (0..n).collect::<Vec<_>>());

        let last = path.parts().last().unwrap().tangent;
        assert_eq!(last.to, 0);
    }
}

#[test]
fn test_start_is_leftmost_regardless_of_input_order() {
    let circles = vec![
        circle(100.0, 0.0, 10.0),
        circle(50.0, 0.0, 15.0),
        circle(0.0, 0.0, 10.0),
    ];
    let path = build_belt_path(&circles).unwrap();
    assert_eq!(path.order(), vec![2, 1, 0]);
}

#[test]
fn test_equilateral_is_symmetric() {
    let side = 100.0;
    let circles = vec![
        circle(0.0, 0.0, 12.0),
        circle(side, 0.0, 12.0),
        circle(side * 0.5, side * 3f64.sqrt() * 0.5, 12.0),
    ];
    let path = build_belt_path(&circles).unwrap();

    assert_eq!(path.len(), 3);
    let lengths: Vec<f64> = path.tangents().map(|t| t.length).collect();
    for length in &lengths {
        assert!((length - lengths[0]).abs() < 1e-6);
        assert!((length - side).abs() < 1e-6);
    }

    let sweeps: Vec<f64> = path.arcs().map(|a| a.sweep()).collect();
    for sweep in &sweeps {
        assert!((sweep - 2.0 * PI / 3.0).abs() < 1e-4);
    }
}

#[test]
fn test_identical_circles_are_degenerate() {
    let circles = vec![circle(10.0, 10.0, 5.0), circle(10.0, 10.0, 5.0)];
    let err = build_belt_path(&circles).unwrap_err();
    assert!(matches!(err, GeometryError::DegenerateGeometry { .. }));
}

#[test]
fn test_contained_circle_is_degenerate() {
    let circles = vec![circle(0.0, 0.0, 50.0), circle(10.0, 0.0, 5.0)];
    assert!(matches!(
        build_belt_path(&circles),
        Err(GeometryError::DegenerateGeometry { .. })
    ));
}

#[test]
fn test_custom_guide_changes_start_tangent() {
    let circles = vec![
        circle(0.0, 0.0, 10.0),
        circle(60.0, 40.0, 10.0),
        circle(60.0, -40.0, 10.0),
    ];
    let up = BeltPathBuilder::default().build(&circles).unwrap();
    assert_eq!(up.order(), vec![0, 1, 2]);

    let down = BeltPathBuilder::with_guide(-DVec2::Y).build(&circles).unwrap();
    assert_eq!(down.order(), vec![0, 2, 1]);
}

#[test]
fn test_zero_guide_is_rejected() {
    let err = BeltPathBuilder::with_guide(DVec2::ZERO)
        .build(&wheels())
        .unwrap_err();
    assert!(matches!(err, GeometryError::DegenerateGeometry { .. }));
}

#[test]
fn test_no_crossings_for_convex_layout() {
    let circles: Vec<_> = (0..6)
        .map(|i| {
            let angle = i as f64 * PI / 3.0;
            circle(200.0 * angle.cos(), 200.0 * angle.sin(), 10.0 + i as f64)
        })
        .collect();
    let path = build_belt_path(&circles).unwrap();

    assert_eq!(path.len(), 6);
    assert!(path.crossing_tangents().is_empty());
}

#[test]
fn test_convex_layouts_wind_once() {
    assert_eq!(build_belt_path(&wheels()).unwrap().winding(), 1);

    let circles: Vec<_> = (0..6)
        .map(|i| {
            let angle = i as f64 * PI / 3.0;
            circle(200.0 * angle.cos(), 200.0 * angle.sin(), 10.0 + i as f64)
        })
        .collect();
    assert_eq!(build_belt_path(&circles).unwrap().winding(), 1);
}

#[test]
fn test_crossing_tangents_are_reported() {
    let circles = vec![
        circle(20.0, -50.0, 10.0),
        circle(60.0, -50.0, 5.0),
        circle(10.0, 0.0, 10.0),
        circle(20.0, 90.0, 25.0),
    ];
    let path = build_belt_path(&circles).unwrap();

    assert_eq!(path.order(), vec![2, 3, 0, 1]);
    assert_eq!(path.crossing_tangents(), vec![(1, 3)]);

    let tangents: Vec<_> = path.tangents().collect();
    assert_eq!((tangents[1].from, tangents[1].to), (3, 0));
    assert_eq!((tangents[3].from, tangents[3].to), (1, 2));
    assert!(tangents[1].crosses(tangents[3]));
    assert_eq!(path.winding(), 2);
}

#[test]
fn test_inner_pulley_is_wrapped_from_outside() {
    // small pulley below the line between two large ones
    let circles = vec![
        circle(0.0, 0.0, 30.0),
        circle(50.0, -10.0, 3.0),
        circle(100.0, 0.0, 30.0),
    ];
    let path = build_belt_path(&circles).unwrap();

    assert_eq!(path.order(), vec![0, 2, 1]);
    assert!(path.crossing_tangents().is_empty());

    let inner = path.part_for_circle(1).unwrap();
    assert!(inner.arc.sweep() > 300f64.to_radians());
    assert_eq!(path.winding(), 2);
}
