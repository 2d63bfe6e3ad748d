//! Test harness driving a [`NodeEditorController`] the way a Slint window would.
//!
//! Events go in as raw `WindowEvent`s, render data comes out through bound
//! `VecModel`s, so every test exercises the same path a real host uses.

#![allow(dead_code)]

use super::CallbackTracker;
use slint::{
    platform::{PointerEventButton, WindowEvent},
    Color, LogicalPosition, Model, SharedString, VecModel,
};
use slint_node_canvas::{
    AnchorDirection, AnchorId, AnchorStyleState, EditorConfig, NodeEditorController, NodeId,
    NodeStyleState,
};
use std::rc::Rc;

/// Node row as a host would push it into its UI model.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeRow {
    pub id: i32,
    pub title: SharedString,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub selected: bool,
    pub fill: Color,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnchorRow {
    pub pin_id: i32,
    pub node_id: i32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub pending: bool,
    pub fill: Color,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConnectionRow {
    pub id: i32,
    /// Output anchor pin (node_id * 2 + 1)
    pub start_pin_id: i32,
    /// Input anchor pin (node_id * 2)
    pub end_pin_id: i32,
    pub path: SharedString,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GridRow {
    pub spacing: f32,
    pub opacity: f32,
    pub color: Color,
    pub commands: SharedString,
}

/// Test harness with two nodes on an 800x600 canvas.
///
/// Node A sits at (100, 100) and node B at (400, 200), both using the
/// default 160x80 template.
pub struct EditorHarness {
    pub ctrl: NodeEditorController,
    pub nodes: Rc<VecModel<NodeRow>>,
    pub anchors: Rc<VecModel<AnchorRow>>,
    pub connections: Rc<VecModel<ConnectionRow>>,
    pub grid: Rc<VecModel<GridRow>>,
    pub tracker: CallbackTracker,
    pub a: NodeId,
    pub b: NodeId,
}

impl EditorHarness {
    /// Create a new test harness with the default nodes.
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    pub fn with_config(config: EditorConfig) -> Self {
        let ctrl = NodeEditorController::with_config(config).unwrap();
        let tracker = CallbackTracker::new();
        let style = ctrl.style();

        let nodes = Rc::new(VecModel::<NodeRow>::default());
        ctrl.bind_nodes(nodes.clone(), {
            let style = style.clone();
            move |n| NodeRow {
                id: n.id.0,
                title: n.title.clone(),
                x: n.rect.x,
                y: n.rect.y,
                width: n.rect.width,
                height: n.rect.height,
                selected: n.style_state == NodeStyleState::Selected,
                fill: style.node_fill(n.style_state),
            }
        });

        let anchors = Rc::new(VecModel::<AnchorRow>::default());
        ctrl.bind_anchors(anchors.clone(), {
            let style = style.clone();
            move |a| AnchorRow {
                pin_id: a.id.pin_id(),
                node_id: a.parent.0,
                x: a.rect.x,
                y: a.rect.y,
                width: a.rect.width,
                height: a.rect.height,
                pending: a.style_state == AnchorStyleState::Pending,
                fill: style.anchor_fill(a.direction, a.style_state),
            }
        });

        let connections = Rc::new(VecModel::<ConnectionRow>::default());
        ctrl.bind_connections(connections.clone(), |c| ConnectionRow {
            id: c.id.0,
            start_pin_id: c.output.pin_id(),
            end_pin_id: c.input.pin_id(),
            path: c.curve.to_svg_path().into(),
        });

        let grid = Rc::new(VecModel::<GridRow>::default());
        ctrl.bind_grid(grid.clone(), move |g| GridRow {
            spacing: g.spacing,
            opacity: g.opacity,
            color: style.grid_line_color(g.opacity),
            commands: g.commands.as_str().into(),
        });

        // Context menu requests are recorded, never acted on
        ctrl.on_context_request({
            let tracker = tracker.clone();
            move |request| tracker.context_requests.borrow_mut().push(request)
        });

        ctrl.set_canvas_size(800.0, 600.0);
        let a = ctrl.add_node("Node A", 100.0, 100.0);
        let b = ctrl.add_node("Node B", 400.0, 200.0);

        Self {
            ctrl,
            nodes,
            anchors,
            connections,
            grid,
            tracker,
            a,
            b,
        }
    }

    fn dispatch(&self, event: WindowEvent) {
        if self.ctrl.handle_window_event(&event) {
            *self.tracker.redraws.borrow_mut() += 1;
        }
    }

    // === Model lookups ===

    /// Get node row by ID.
    pub fn node_row(&self, id: NodeId) -> Option<NodeRow> {
        self.nodes.iter().find(|n| n.id == id.0)
    }

    /// Get the center of a node's body.
    pub fn node_center(&self, id: NodeId) -> Option<(f32, f32)> {
        let row = self.node_row(id)?;
        Some((row.x + row.width / 2.0, row.y + row.height / 2.0))
    }

    pub fn anchor_row(&self, node: NodeId, direction: AnchorDirection) -> Option<AnchorRow> {
        let pin_id = AnchorId::new(node, direction).pin_id();
        self.anchors.iter().find(|a| a.pin_id == pin_id)
    }

    /// Get the center of an anchor as last pushed to the model.
    pub fn anchor_center(&self, node: NodeId, direction: AnchorDirection) -> Option<(f32, f32)> {
        let row = self.anchor_row(node, direction)?;
        Some((row.x + row.width / 2.0, row.y + row.height / 2.0))
    }

    pub fn selected_ids(&self) -> Vec<i32> {
        self.nodes.iter().filter(|n| n.selected).map(|n| n.id).collect()
    }

    pub fn connection_rows(&self) -> Vec<ConnectionRow> {
        self.connections.iter().collect()
    }

    // === Mouse event helpers ===

    /// Simulate mouse down at the given position.
    pub fn mouse_down(&self, x: f32, y: f32) {
        self.mouse_down_button(x, y, PointerEventButton::Left);
    }

    /// Simulate mouse down with a specific button.
    pub fn mouse_down_button(&self, x: f32, y: f32, button: PointerEventButton) {
        self.dispatch(WindowEvent::PointerPressed {
            position: LogicalPosition::new(x, y),
            button,
        });
    }

    /// Simulate mouse move to the given position.
    pub fn mouse_move(&self, x: f32, y: f32) {
        self.dispatch(WindowEvent::PointerMoved {
            position: LogicalPosition::new(x, y),
        });
    }

    /// Simulate mouse up at the given position.
    pub fn mouse_up(&self, x: f32, y: f32) {
        self.mouse_up_button(x, y, PointerEventButton::Left);
    }

    /// Simulate mouse up with a specific button.
    pub fn mouse_up_button(&self, x: f32, y: f32, button: PointerEventButton) {
        self.dispatch(WindowEvent::PointerReleased {
            position: LogicalPosition::new(x, y),
            button,
        });
    }

    /// Simulate a complete click (down + up) at the given position.
    pub fn click(&self, x: f32, y: f32) {
        self.mouse_down(x, y);
        self.mouse_up(x, y);
    }

    /// Click the center of a node's anchor.
    pub fn click_anchor(&self, node: NodeId, direction: AnchorDirection) {
        let (x, y) = self.anchor_center(node, direction).unwrap();
        self.click(x, y);
    }

    /// Simulate a complete drag from start to end.
    pub fn drag(&self, start_x: f32, start_y: f32, end_x: f32, end_y: f32) {
        self.mouse_down(start_x, start_y);
        self.mouse_move(end_x, end_y);
        self.mouse_up(end_x, end_y);
    }

    /// Simulate a drag with a specific button.
    pub fn drag_button(&self, start: (f32, f32), end: (f32, f32), button: PointerEventButton) {
        self.mouse_down_button(start.0, start.1, button);
        self.mouse_move(end.0, end.1);
        self.mouse_up_button(end.0, end.1, button);
    }

    /// Simulate one wheel notch. Positive `delta_y` is wheel-up (zoom in).
    pub fn scroll(&self, x: f32, y: f32, delta_y: f32) {
        self.dispatch(WindowEvent::PointerScrolled {
            position: LogicalPosition::new(x, y),
            delta_x: 0.0,
            delta_y,
        });
    }

    /// Simulate a secondary click.
    pub fn right_click(&self, x: f32, y: f32) {
        self.mouse_down_button(x, y, PointerEventButton::Right);
        self.mouse_up_button(x, y, PointerEventButton::Right);
    }

    pub fn pointer_exit(&self) {
        self.dispatch(WindowEvent::PointerExited);
    }
}

impl Default for EditorHarness {
    fn default() -> Self {
        Self::new()
    }
}
