//! Read-only render data and its synchronization into Slint models.
//!
//! A [`Snapshot`] is rebuilt from the current node rects every time it is
//! requested. Hosts must not keep anchor positions from an older snapshot.
//!
//! # Example
//!
//! ```ignore
//! use slint_node_canvas::{NodeEditorController, SnapshotSyncer};
//!
//! let ctrl = NodeEditorController::new();
//!
//! // Bind once - every redraw pushes fresh rows into the model
//! let nodes = Rc::new(VecModel::<NodeData>::default());
//! ctrl.bind_nodes(nodes.clone(), |n| NodeData {
//!     id: n.id.0,
//!     title: n.title.clone(),
//!     x: n.rect.x,
//!     y: n.rect.y,
//!     width: n.rect.width,
//!     height: n.rect.height,
//!     selected: n.style_state == NodeStyleState::Selected,
//! });
//! window.set_nodes(ModelRc::from(nodes));
//! ```

use crate::anchor::{AnchorDirection, AnchorId};
use crate::geometry::Rect;
use crate::graph::ConnectionId;
use crate::grid::{grid_layers, GridLayerVisual};
use crate::node::{NodeId, NodeVisual};
use crate::path::ConnectionCurve;
use crate::state::EditorState;
use crate::style::AnchorStyleState;
use slint::{Model, VecModel};
use std::rc::Rc;

/// Render data for one anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorVisual {
    pub id: AnchorId,
    pub rect: Rect,
    pub direction: AnchorDirection,
    pub parent: NodeId,
    pub style_state: AnchorStyleState,
}

/// Render data for one connection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectionVisual {
    pub id: ConnectionId,
    pub input: AnchorId,
    pub output: AnchorId,
    pub curve: ConnectionCurve,
    /// Drawn delete handle; the click target may be larger.
    pub delete_handle: Rect,
}

/// Everything the host needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snapshot {
    /// Bottom to top.
    pub nodes: Vec<NodeVisual>,
    /// Input then output for each node, in node order.
    pub anchors: Vec<AnchorVisual>,
    pub connections: Vec<ConnectionVisual>,
    /// Curve from a pending anchor to the pointer.
    pub preview: Option<ConnectionCurve>,
    pub grid: Vec<GridLayerVisual>,
    pub zoom: f32,
    pub grid_zoom: f32,
}

impl Snapshot {
    pub fn capture(state: &EditorState) -> Self {
        let graph = state.graph();
        let config = state.config();
        let pending = state.interaction().pending_anchor();

        let nodes = graph.nodes().iter().map(|n| n.render()).collect();

        let anchors = graph
            .nodes()
            .iter()
            .flat_map(|node| {
                node.anchors().map(|anchor| AnchorVisual {
                    id: anchor.id(),
                    rect: anchor.geometry(&node.rect()),
                    direction: anchor.direction(),
                    parent: node.id(),
                    style_state: if pending == Some(anchor.id()) {
                        AnchorStyleState::Pending
                    } else {
                        AnchorStyleState::Normal
                    },
                })
            })
            .collect();

        let connections = graph
            .connections()
            .iter()
            .filter_map(|c| {
                Some(ConnectionVisual {
                    id: c.id(),
                    input: c.input(),
                    output: c.output(),
                    curve: graph.connection_curve(c, config.curve_offset)?,
                    delete_handle: graph.delete_handle(c, config.delete_handle_size)?,
                })
            })
            .collect();

        let preview = pending.zip(state.pointer()).and_then(|(anchor, pointer)| {
            let center = graph.anchor_center(anchor)?;
            let offset = config.curve_offset;
            Some(match anchor.direction {
                AnchorDirection::In => ConnectionCurve::between(center, pointer, offset),
                AnchorDirection::Out => ConnectionCurve::between(pointer, center, offset),
            })
        });

        let (width, height) = state.canvas_size();
        let grid = if width > 0.0 && height > 0.0 {
            grid_layers(state.viewport(), &config.grid_layers, width, height)
        } else {
            Vec::new()
        };

        Self {
            nodes,
            anchors,
            connections,
            preview,
            grid,
            zoom: state.viewport().zoom(),
            grid_zoom: state.viewport().grid_zoom(),
        }
    }
}

/// Overwrite `model` with one row per item, reusing existing rows.
pub fn sync_model<T, P, F>(model: &VecModel<P>, items: &[T], constructor: F)
where
    P: Clone + 'static,
    F: Fn(&T) -> P,
{
    // Update existing rows or add new ones
    for (i, item) in items.iter().enumerate() {
        let row = constructor(item);
        if i < model.row_count() {
            model.set_row_data(i, row);
        } else {
            model.push(row);
        }
    }
    // Remove excess rows
    while model.row_count() > items.len() {
        model.remove(model.row_count() - 1);
    }
}

/// Keeps bound Slint models in step with each new snapshot.
#[derive(Default)]
pub struct SnapshotSyncer {
    syncers: Vec<Box<dyn Fn(&Snapshot)>>,
}

impl SnapshotSyncer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.syncers.is_empty()
    }

    pub fn bind_nodes<P, F>(&mut self, model: Rc<VecModel<P>>, constructor: F)
    where
        P: Clone + 'static,
        F: Fn(&NodeVisual) -> P + 'static,
    {
        self.syncers
            .push(Box::new(move |s: &Snapshot| sync_model(&model, &s.nodes, &constructor)));
    }

    pub fn bind_anchors<P, F>(&mut self, model: Rc<VecModel<P>>, constructor: F)
    where
        P: Clone + 'static,
        F: Fn(&AnchorVisual) -> P + 'static,
    {
        self.syncers
            .push(Box::new(move |s: &Snapshot| sync_model(&model, &s.anchors, &constructor)));
    }

    pub fn bind_connections<P, F>(&mut self, model: Rc<VecModel<P>>, constructor: F)
    where
        P: Clone + 'static,
        F: Fn(&ConnectionVisual) -> P + 'static,
    {
        self.syncers
            .push(Box::new(move |s: &Snapshot| sync_model(&model, &s.connections, &constructor)));
    }

    pub fn bind_grid<P, F>(&mut self, model: Rc<VecModel<P>>, constructor: F)
    where
        P: Clone + 'static,
        F: Fn(&GridLayerVisual) -> P + 'static,
    {
        self.syncers
            .push(Box::new(move |s: &Snapshot| sync_model(&model, &s.grid, &constructor)));
    }

    /// Push `snapshot` into every bound model.
    pub fn sync(&self, snapshot: &Snapshot) {
        for syncer in &self.syncers {
            syncer(snapshot);
        }
    }
}
