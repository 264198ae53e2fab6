use glam::DVec2;
use truckrig_belt::circle::Circle;
use truckrig_belt::export::{from_json, svg_document, svg_path_data, to_json, SvgOptions};
use truckrig_belt::path::build_belt_path;

fn wheels() -> Vec<Circle> {
    vec![
        Circle::new(DVec2::new(0.0, 0.0), 10.0).unwrap(),
        Circle::new(DVec2::new(50.0, 0.0), 15.0).unwrap(),
        Circle::new(DVec2::new(100.0, 0.0), 10.0).unwrap(),
    ]
}

#[test]
fn test_large_arc_flag_follows_sweep() {
    let path = build_belt_path(&wheels()).unwrap();
    let d = svg_path_data(&path);

    let arcs: Vec<&str> = d.split("A ").skip(1).collect();
    assert_eq!(arcs.len(), 3);

    // fields after "A": rx ry rotation large-arc sweep x y
    let flags: Vec<(&str, &str)> = arcs
        .iter()
        .map(|a| {
            let fields: Vec<&str> = a.split_whitespace().collect();
            (fields[3], fields[4])
        })
        .collect();
    // the outer wheels wrap almost half a turn, the middle one barely
    assert_eq!(flags, vec![("0", "0"), ("0", "0"), ("0", "0")]);
}

#[test]
fn test_path_starts_on_first_arc() {
    let path = build_belt_path(&wheels()).unwrap();
    let d = svg_path_data(&path);
    let start = path.parts()[0].arc.start;

    let expected = format!("M {:.4} {:.4} ", start.x, start.y);
    assert!(d.starts_with(&expected));
}

#[test]
fn test_document_view_box_covers_pulleys() {
    let circles = wheels();
    let path = build_belt_path(&circles).unwrap();
    let options = SvgOptions {
        margin: 5.0,
        ..SvgOptions::default()
    };
    let svg = svg_document(&path, &circles, &options);

    // x from -10 - 5, flipped y from -(15 + 5), width 120 + 10, height 30 + 10
    assert!(svg.contains(r#"viewBox="-15.0000 -20.0000 130.0000 40.0000""#));
    assert!(svg.contains(r#"transform="scale(1,-1)""#));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn test_json_keeps_geometry() {
    let path = build_belt_path(&wheels()).unwrap();
    let json = to_json(&path).unwrap();
    assert!(json.contains("\"parts\""));

    let restored = from_json(&json).unwrap();
    assert_eq!(restored.order(), vec![0, 1, 2]);
    assert!((restored.total_length() - path.total_length()).abs() < 1e-9);
}

#[test]
fn test_malformed_json_is_rejected() {
    assert!(from_json("{\"parts\": 3}").is_err());
}

#[test]
fn test_open_or_relinked_paths_are_rejected() {
    let err = from_json("{\"parts\": []}").unwrap_err();
    assert!(err.to_string().contains("At least 2 circles"));

    let path = build_belt_path(&wheels()).unwrap();
    let mut value = serde_json::to_value(&path).unwrap();
    value["parts"][0]["tangent"]["to"] = serde_json::json!(0);
    let err = from_json(&value.to_string()).unwrap_err();
    assert!(err.to_string().contains("Degenerate geometry"));
}
