//! Input events and the drag/connect state machine states.

use crate::anchor::{AnchorDirection, AnchorId};
use crate::node::NodeId;
use slint::platform::PointerEventButton;
use slint::LogicalPosition;

/// One discrete input event, delivered in temporal order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditorEvent {
    PointerDown {
        button: PointerEventButton,
        position: LogicalPosition,
    },
    PointerUp {
        button: PointerEventButton,
    },
    /// Pointer motion with no button held.
    PointerMove {
        position: LogicalPosition,
    },
    /// Pointer motion with `button` held; `delta` is the motion since the
    /// previous pointer event.
    PointerDrag {
        button: PointerEventButton,
        position: LogicalPosition,
        delta: (f32, f32),
    },
    /// Wheel motion. Negative `y` means scrolling up/away from the user.
    Scroll {
        delta: (f32, f32),
    },
    ContextRequest {
        position: LogicalPosition,
    },
}

/// Where the drag/connect state machine currently is.
///
/// A pending connection holds at most one anchor. The moment both slots
/// would be filled the pair is resolved (connected or rejected) and the
/// machine returns to `Idle`, so "both filled" is never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    NodeDragging(NodeId),
    PendingConnection(AnchorId),
}

impl InteractionState {
    /// The anchor waiting in the given direction's slot, if any.
    pub fn pending(&self, direction: AnchorDirection) -> Option<AnchorId> {
        match self {
            Self::PendingConnection(anchor) if anchor.direction == direction => Some(*anchor),
            _ => None,
        }
    }

    pub fn pending_anchor(&self) -> Option<AnchorId> {
        match self {
            Self::PendingConnection(anchor) => Some(*anchor),
            _ => None,
        }
    }

    pub fn dragged_node(&self) -> Option<NodeId> {
        match self {
            Self::NodeDragging(node) => Some(*node),
            _ => None,
        }
    }
}

/// A secondary-button request for the host's context menu.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContextMenuRequest {
    pub position: LogicalPosition,
    /// Topmost node under the pointer; `None` over empty canvas.
    pub node: Option<NodeId>,
}

/// Result of handling one event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EventOutcome {
    /// Observable state changed; the host should render a fresh snapshot.
    pub redraw: bool,
    /// Set when the event asked for a context menu.
    pub context_request: Option<ContextMenuRequest>,
}

impl EventOutcome {
    pub fn redraw(redraw: bool) -> Self {
        Self {
            redraw,
            context_request: None,
        }
    }

    pub fn context(request: ContextMenuRequest) -> Self {
        Self {
            redraw: false,
            context_request: Some(request),
        }
    }
}
