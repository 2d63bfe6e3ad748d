//! Connector anchors: the directional attachment points on a node.
//!
//! An anchor never stores its position. Every query recomputes the rect from
//! the parent node's current rect, so a node that was dragged or zoomed can
//! never leave a stale anchor behind.

use crate::geometry::Rect;
use crate::node::NodeId;

/// Fraction of an input anchor's width that sticks out past the node's left edge.
const IN_OVERHANG: f32 = 0.75;
/// Fraction of an output anchor's width that sits inside the node's right edge.
const OUT_INSET: f32 = 0.25;

/// Which side of a connection an anchor can serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AnchorDirection {
    In,
    Out,
}

impl AnchorDirection {
    pub fn opposite(self) -> Self {
        match self {
            Self::In => Self::Out,
            Self::Out => Self::In,
        }
    }
}

/// Identity of an anchor.
///
/// Each node owns exactly one anchor per direction, so the parent node plus
/// the direction identifies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnchorId {
    pub node: NodeId,
    pub direction: AnchorDirection,
}

impl AnchorId {
    pub fn new(node: NodeId, direction: AnchorDirection) -> Self {
        Self { node, direction }
    }

    /// Opaque integer pin ID for UI models: `node * 2` for inputs,
    /// `node * 2 + 1` for outputs.
    ///
    /// Unique for node ids up to [`NodeId::MAX_PIN_NODE`]; larger ids wrap
    /// instead of panicking.
    pub fn pin_id(&self) -> i32 {
        let base = self.node.0.wrapping_mul(2);
        match self.direction {
            AnchorDirection::In => base,
            AnchorDirection::Out => base.wrapping_add(1),
        }
    }

    /// Inverse of [`pin_id`](Self::pin_id).
    pub fn from_pin_id(pin_id: i32) -> Self {
        let direction = if pin_id.rem_euclid(2) == 0 {
            AnchorDirection::In
        } else {
            AnchorDirection::Out
        };
        Self::new(NodeId(pin_id.div_euclid(2)), direction)
    }
}

/// One directional attachment point on a node.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectorAnchor {
    id: AnchorId,
    base_size: (f32, f32),
    current_size: (f32, f32),
}

impl ConnectorAnchor {
    pub fn new(parent: NodeId, direction: AnchorDirection, base_size: (f32, f32)) -> Self {
        Self {
            id: AnchorId::new(parent, direction),
            base_size,
            current_size: base_size,
        }
    }

    pub fn id(&self) -> AnchorId {
        self.id
    }

    pub fn parent(&self) -> NodeId {
        self.id.node
    }

    pub fn direction(&self) -> AnchorDirection {
        self.id.direction
    }

    pub fn base_size(&self) -> (f32, f32) {
        self.base_size
    }

    pub fn size(&self) -> (f32, f32) {
        self.current_size
    }

    /// Rescale from the base size.
    pub fn set_zoom(&mut self, factor: f32) {
        self.current_size = (self.base_size.0 * factor, self.base_size.1 * factor);
    }

    /// The anchor's rect for the given parent rect.
    ///
    /// Vertically centered on the parent; inputs overhang the left edge,
    /// outputs sit on the right edge.
    pub fn geometry(&self, parent: &Rect) -> Rect {
        let (w, h) = self.current_size;
        let y = parent.y + parent.height * 0.5 - h * 0.5;
        let x = match self.id.direction {
            AnchorDirection::In => parent.x - w * IN_OVERHANG,
            AnchorDirection::Out => parent.x + parent.width - w * OUT_INSET,
        };
        Rect::new(x, y, w, h)
    }

    pub fn center(&self, parent: &Rect) -> (f32, f32) {
        self.geometry(parent).center()
    }

    /// Exact (half-open) containment against the current geometry.
    pub fn hit_test(&self, parent: &Rect, point: (f32, f32)) -> bool {
        self.geometry(parent).contains_exact(point)
    }
}
