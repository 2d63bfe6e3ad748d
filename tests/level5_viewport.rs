//! Level 5: Viewport Tests
//!
//! Wheel zoom on nodes and grid, clamping, exact restoration and the
//! grid's response to panning.

mod common;

use common::harness::EditorHarness;
use slint::Model;
use slint_node_canvas::AnchorDirection;

#[test]
fn test_scroll_up_zooms_in() {
    let harness = EditorHarness::new();
    harness.scroll(300.0, 300.0, 1.0);
    assert_eq!(harness.ctrl.zoom(), 1.25);
    assert_eq!(harness.ctrl.grid_zoom(), 2.125);

    let a = harness.node_row(harness.a).unwrap();
    assert_eq!((a.x, a.y, a.width, a.height), (100.0, 100.0, 200.0, 100.0));
}

#[test]
fn test_scroll_magnitude_ignored() {
    let harness = EditorHarness::new();
    harness.scroll(0.0, 0.0, 120.0);
    assert_eq!(harness.ctrl.zoom(), 1.25);
}

#[test]
fn test_zero_scroll_is_noop() {
    let harness = EditorHarness::new();
    harness.tracker.clear();
    harness.scroll(0.0, 0.0, 0.0);
    assert_eq!(harness.ctrl.zoom(), 1.0);
    assert_eq!(*harness.tracker.redraws.borrow(), 0);
}

#[test]
fn test_zoom_clamped_at_max() {
    let harness = EditorHarness::new();
    for _ in 0..20 {
        harness.scroll(0.0, 0.0, 1.0);
    }
    assert_eq!(harness.ctrl.zoom(), 3.0);
    assert_eq!(harness.ctrl.grid_zoom(), 9.125);

    let a = harness.node_row(harness.a).unwrap();
    assert_eq!((a.width, a.height), (480.0, 240.0));
}

#[test]
fn test_zoom_clamped_at_min() {
    let harness = EditorHarness::new();
    harness.scroll(0.0, 0.0, -1.0);
    assert_eq!(harness.ctrl.zoom(), 1.0);
    assert_eq!(harness.ctrl.grid_zoom(), 0.125);
}

#[test]
fn test_zoom_round_trip_restores_exact_geometry() {
    let harness = EditorHarness::new();
    let nodes_before: Vec<_> = harness.nodes.iter().collect();
    let anchors_before: Vec<_> = harness.anchors.iter().collect();

    for _ in 0..5 {
        harness.scroll(0.0, 0.0, 1.0);
    }
    for _ in 0..3 {
        harness.scroll(0.0, 0.0, -1.0);
    }
    harness.scroll(0.0, 0.0, 1.0);
    for _ in 0..3 {
        harness.scroll(0.0, 0.0, -1.0);
    }

    assert_eq!(harness.ctrl.zoom(), 1.0);
    assert_eq!(harness.nodes.iter().collect::<Vec<_>>(), nodes_before);
    assert_eq!(harness.anchors.iter().collect::<Vec<_>>(), anchors_before);
}

#[test]
fn test_anchors_scale_with_zoom() {
    let harness = EditorHarness::new();
    for _ in 0..4 {
        harness.scroll(0.0, 0.0, 1.0);
    }
    let input = harness.anchor_row(harness.a, AnchorDirection::In).unwrap();
    assert_eq!((input.width, input.height), (16.0, 96.0));
    // Overhangs the left edge by three quarters of its width
    assert_eq!(input.x, 88.0);
    assert_eq!(input.y, 132.0);
}

#[test]
fn test_set_zoom_direct() {
    let harness = EditorHarness::new();
    assert!(harness.ctrl.set_zoom(2.0));
    assert_eq!(harness.node_row(harness.a).unwrap().width, 320.0);
    assert!(!harness.ctrl.set_zoom(2.0));

    // Out of range values clamp
    harness.ctrl.set_zoom(10.0);
    assert_eq!(harness.ctrl.zoom(), 3.0);
}

#[test]
fn test_nodes_added_while_zoomed_use_current_zoom() {
    let harness = EditorHarness::new();
    harness.ctrl.set_zoom(1.5);
    let c = harness.ctrl.add_node("Node C", 0.0, 400.0);
    let row = harness.node_row(c).unwrap();
    assert_eq!((row.width, row.height), (240.0, 120.0));

    harness.ctrl.set_zoom(1.0);
    let row = harness.node_row(c).unwrap();
    assert_eq!((row.width, row.height), (160.0, 80.0));
}

#[test]
fn test_grid_spacing_follows_grid_zoom() {
    let harness = EditorHarness::new();
    harness.scroll(0.0, 0.0, 1.0);
    let spacings: Vec<f32> = harness.grid.iter().map(|g| g.spacing).collect();
    assert_eq!(spacings, vec![42.5, 212.5]);

    let style = harness.ctrl.style();
    let coarse = harness.grid.iter().nth(1).unwrap();
    assert_eq!(coarse.color, style.grid_line_color(0.4));
}

#[test]
fn test_dense_grid_layer_hidden() {
    let harness = EditorHarness::new();
    harness.scroll(0.0, 0.0, -1.0);
    // 20 * 0.125 = 2.5px is too dense to draw; 100 * 0.125 = 12.5px stays
    let spacings: Vec<f32> = harness.grid.iter().map(|g| g.spacing).collect();
    assert_eq!(spacings, vec![12.5]);
}

#[test]
fn test_pan_shifts_grid_phase() {
    let harness = EditorHarness::new();
    let before = harness.grid.iter().next().unwrap().commands;

    harness.drag(700.0, 500.0, 705.0, 500.0);
    let after = harness.grid.iter().next().unwrap().commands;
    assert_ne!(before, after);
    assert!(after.as_str().starts_with("M 5 0 L 5 600"));

    // A full spacing brings the lines back to where they started
    harness.drag(700.0, 500.0, 715.0, 500.0);
    assert_eq!(harness.ctrl.pan_offset(), (20.0, 0.0));
    assert_eq!(harness.grid.iter().next().unwrap().commands, before);
}

#[test]
fn test_canvas_resize_regenerates_grid() {
    let harness = EditorHarness::new();
    harness.ctrl.set_canvas_size(400.0, 300.0);
    let fine = harness.grid.iter().next().unwrap();
    assert!(fine.commands.as_str().starts_with("M 0 0 L 0 300"));

    harness.ctrl.set_canvas_size(0.0, 0.0);
    assert_eq!(harness.grid.iter().count(), 0);
}

#[test]
fn test_non_finite_zoom_ignored() {
    let harness = EditorHarness::new();
    harness.ctrl.set_zoom(1.5);

    assert!(!harness.ctrl.set_zoom(f32::NAN));
    assert!(!harness.ctrl.set_zoom(f32::NEG_INFINITY));
    assert_eq!(harness.ctrl.zoom(), 1.5);

    // Nodes keep real sizes and still respond to clicks
    let a = harness.node_row(harness.a).unwrap();
    assert_eq!((a.width, a.height), (240.0, 120.0));
    harness.click(180.0, 140.0);
    assert_eq!(harness.selected_ids(), vec![harness.a.0]);
}

#[test]
fn test_non_finite_canvas_size_ignored() {
    let harness = EditorHarness::new();
    let before: Vec<_> = harness.grid.iter().collect();

    assert!(!harness.ctrl.set_canvas_size(f32::INFINITY, 600.0));
    assert!(!harness.ctrl.set_canvas_size(800.0, f32::NAN));
    assert_eq!(harness.ctrl.state().borrow().canvas_size(), (800.0, 600.0));
    assert_eq!(harness.grid.iter().collect::<Vec<_>>(), before);
}
