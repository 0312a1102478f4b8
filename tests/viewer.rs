use model_viewer::app::run_cli;
use model_viewer::channel::command::MethodCall;
use model_viewer::core::geometry::BoundingBox;
use model_viewer::io::config::Config;
use model_viewer::io::script::parse_script;
use model_viewer::scene::fit::{Axis, apply_incremental_rotation, apply_zoom, compute_fit};
use model_viewer::ViewerError;
use nalgebra::{Point3, Vector3};
use serde_json::json;
use std::f32::consts::PI;

fn bbox(min: [f32; 3], max: [f32; 3]) -> BoundingBox {
    BoundingBox::from_corners(Point3::from(min), Point3::from(max))
}

#[test]
fn symmetric_cube_needs_no_correction() {
    let fit = compute_fit(&bbox([-1.0; 3], [1.0; 3]), 2.0).unwrap();
    assert_eq!(fit.scale_factor, 1.0);
    assert!(fit.translation.norm() < 1e-6);
}

#[test]
fn offset_box_fit() {
    let fit = compute_fit(&bbox([0.0; 3], [4.0, 2.0, 1.0]), 2.0).unwrap();
    assert_eq!(fit.scale_factor, 0.5);
    assert!((fit.translation - Vector3::new(-1.0, -0.5, -0.25)).norm() < 1e-6);
    assert!(fit.camera_extent > 0.0);
}

#[test]
fn point_box_is_degenerate() {
    assert!(matches!(
        compute_fit(&bbox([0.0; 3], [0.0; 3]), 2.0),
        Err(ViewerError::DegenerateGeometry)
    ));
}

#[test]
fn rotation_and_zoom_helpers() {
    let r = apply_incremental_rotation(Vector3::zeros(), Axis::X, PI / 12.0);
    assert!((r - Vector3::new(PI / 12.0, 0.0, 0.0)).norm() < 1e-6);

    assert!((apply_zoom(10.0, 0.9) - 9.0).abs() < 1e-5);
    let back = apply_zoom(9.0, 1.1);
    assert!((back - 9.9).abs() < 1e-5);
    assert!(back < 10.0);
}

#[test]
fn headless_run_replays_script() {
    let config = Config::parse(
        r#"
        [model]
        min = [0.0, 0.0, 0.0]
        max = [4.0, 2.0, 1.0]
        "#,
    )
    .unwrap();
    let calls = parse_script(
        r#"
{"method": "setScale", "arguments": {"scale": 2.0}}
{"method": "setScale", "arguments": {}}
{"method": "rotateZ"}
{"method": "zoomOut"}
{"method": "wobble"}
"#,
    )
    .unwrap();

    let summary = run_cli(&config, None, &calls).unwrap();
    assert_eq!(summary.applied, 3);
    assert_eq!(summary.failed, 2);

    let node = summary.viewer.model().unwrap();
    assert_eq!(node.scale, 2.0);
    // -90 degrees corrective orientation plus one 15 degree step.
    assert!((node.euler_angles.z - (-PI / 2.0 + PI / 12.0)).abs() < 1e-6);
    assert!((summary.viewer.camera().extent - 1.2 * 1.1).abs() < 1e-5);
}

#[test]
fn headless_run_without_model_rejects_everything() {
    let calls = vec![
        MethodCall::new("rotateX", None),
        MethodCall::new("setRotation", Some(json!({"x": 0, "y": 0, "z": 0}))),
    ];
    let summary = run_cli(&Config::default(), None, &calls).unwrap();
    assert!(summary.fit.is_none());
    assert_eq!(summary.failed, 2);
    assert!(summary.viewer.model().is_none());
}

#[test]
fn command_line_bounds_override_config() {
    let config = Config::parse("[model]\nmin = [0, 0, 0]\nmax = [1, 1, 1]\n").unwrap();
    let summary = run_cli(&config, Some(bbox([0.0; 3], [8.0, 1.0, 1.0])), &[]).unwrap();
    assert_eq!(summary.fit.unwrap().scale_factor, 0.25);
}

#[test]
fn invalid_fit_config_fails_the_run() {
    let config = Config::parse("[fit]\ntarget_size = 0.0\n").unwrap();
    let result = run_cli(&config, Some(bbox([0.0; 3], [4.0, 2.0, 1.0])), &[]);
    assert!(matches!(result, Err(ViewerError::InvalidArgument { .. })));
}

#[test]
fn headless_run_frames_a_symmetric_model() {
    let summary = run_cli(&Config::default(), Some(bbox([-3.0; 3], [3.0; 3])), &[]).unwrap();
    let corners = summary.viewer.projected_bounds().unwrap();
    assert!(corners.iter().all(|c| c.x.abs() <= 1.0 && c.y.abs() <= 1.0));
}
