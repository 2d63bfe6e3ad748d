//! Nodes and the templates they are built from.

use crate::anchor::{AnchorDirection, ConnectorAnchor};
use crate::geometry::Rect;
use crate::style::NodeStyleState;
use slint::SharedString;

/// Identity of a node. Allocated by the graph and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub i32);

impl NodeId {
    /// Largest id whose anchors still get distinct pin ids.
    pub const MAX_PIN_NODE: i32 = i32::MAX / 2;
}

/// Plain description of a node to create.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeTemplate {
    pub title: SharedString,
    /// Body size at zoom 1.0.
    pub size: (f32, f32),
    /// Anchor width as a fraction of the body width.
    pub anchor_width_ratio: f32,
    /// Anchor height as a fraction of the body height.
    pub anchor_height_ratio: f32,
}

impl Default for NodeTemplate {
    fn default() -> Self {
        Self {
            title: SharedString::from("Node"),
            size: (160.0, 80.0),
            anchor_width_ratio: 0.05,
            anchor_height_ratio: 0.6,
        }
    }
}

impl NodeTemplate {
    pub fn new(title: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<SharedString>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.size = (width, height);
        self
    }

    pub fn with_anchor_ratios(mut self, width_ratio: f32, height_ratio: f32) -> Self {
        self.anchor_width_ratio = width_ratio;
        self.anchor_height_ratio = height_ratio;
        self
    }

    pub fn anchor_size(&self) -> (f32, f32) {
        (
            self.size.0 * self.anchor_width_ratio,
            self.size.1 * self.anchor_height_ratio,
        )
    }
}

/// Render data for one node body.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeVisual {
    pub id: NodeId,
    pub rect: Rect,
    pub title: SharedString,
    pub style_state: NodeStyleState,
}

/// A node on the canvas with its two anchors.
///
/// `base_rect` holds the zoom-1.0 size and is the only basis for scaling:
/// `current_rect.size == base_rect.size * zoom` after every
/// [`set_zoom`](Self::set_zoom). Positions are not scaled and move together
/// on [`translate`](Self::translate).
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: NodeId,
    title: SharedString,
    base_rect: Rect,
    current_rect: Rect,
    selected: bool,
    input: ConnectorAnchor,
    output: ConnectorAnchor,
}

impl Node {
    /// Build a node from a template with its top-left corner at `position`,
    /// already scaled to `zoom`.
    pub fn from_template(
        id: NodeId,
        template: &NodeTemplate,
        position: (f32, f32),
        zoom: f32,
    ) -> Self {
        let base_rect = Rect::new(position.0, position.1, template.size.0, template.size.1);
        let anchor_size = template.anchor_size();
        let mut node = Self {
            id,
            title: template.title.clone(),
            base_rect,
            current_rect: base_rect,
            selected: false,
            input: ConnectorAnchor::new(id, AnchorDirection::In, anchor_size),
            output: ConnectorAnchor::new(id, AnchorDirection::Out, anchor_size),
        };
        node.set_zoom(zoom);
        node
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn title(&self) -> &SharedString {
        &self.title
    }

    pub fn base_rect(&self) -> Rect {
        self.base_rect
    }

    pub fn rect(&self) -> Rect {
        self.current_rect
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    /// Recompute body and anchor sizes from their base sizes. Idempotent.
    pub fn set_zoom(&mut self, factor: f32) {
        self.current_rect = Rect::scaled_from(&self.base_rect, factor);
        self.input.set_zoom(factor);
        self.output.set_zoom(factor);
    }

    /// Move the node. Base and current position move together.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.base_rect = self.base_rect.translated(dx, dy);
        self.current_rect = self.current_rect.translated(dx, dy);
    }

    /// Inclusive containment against the current body rect.
    pub fn hit_test(&self, point: (f32, f32)) -> bool {
        self.current_rect.contains_inclusive(point)
    }

    pub fn anchor(&self, direction: AnchorDirection) -> &ConnectorAnchor {
        match direction {
            AnchorDirection::In => &self.input,
            AnchorDirection::Out => &self.output,
        }
    }

    pub fn anchors(&self) -> [&ConnectorAnchor; 2] {
        [&self.input, &self.output]
    }

    /// Current rect of one of this node's anchors, derived from the body rect.
    pub fn anchor_rect(&self, direction: AnchorDirection) -> Rect {
        self.anchor(direction).geometry(&self.current_rect)
    }

    pub fn anchor_center(&self, direction: AnchorDirection) -> (f32, f32) {
        self.anchor_rect(direction).center()
    }

    pub fn render(&self) -> NodeVisual {
        NodeVisual {
            id: self.id,
            rect: self.current_rect,
            title: self.title.clone(),
            style_state: NodeStyleState::from_selected(self.selected),
        }
    }
}
