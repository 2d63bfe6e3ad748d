//! High-level controller for node editor applications.
//!
//! The [`NodeEditorController`] wraps an [`EditorState`] in shared ownership
//! so it can be cloned into Slint callbacks. Every mutation goes through it:
//! input events, adding and removing nodes, and deleting connections.
//!
//! # Example
//!
//! ```ignore
//! use slint_node_canvas::NodeEditorController;
//!
//! slint::include_modules!();
//!
//! fn main() {
//!     let window = MainWindow::new().unwrap();
//!     let ctrl = NodeEditorController::new();
//!     let w = window.as_weak();
//!
//!     // Push snapshot rows into the UI on every redraw
//!     let nodes = Rc::new(VecModel::<NodeData>::default());
//!     ctrl.bind_nodes(nodes.clone(), |n| NodeData::from(n));
//!     window.set_nodes(ModelRc::from(nodes));
//!
//!     // Host owns the menu; the controller only reports where it was asked for
//!     ctrl.on_context_request({
//!         let w = w.clone();
//!         move |request| {
//!             if let Some(w) = w.upgrade() {
//!                 w.invoke_show_menu(request.position.x, request.position.y,
//!                     request.node.map_or(0, |n| n.0));
//!             }
//!         }
//!     });
//!     window.on_add_node(ctrl.add_node_callback());
//!     window.on_remove_node(ctrl.remove_node_callback());
//!
//!     window.on_pointer_event({
//!         let ctrl = ctrl.clone();
//!         move |event| ctrl.handle_window_event(&event)
//!     });
//!
//!     window.run().unwrap();
//! }
//! ```

use crate::config::{ConfigError, EditorConfig};
use crate::graph::ConnectionId;
use crate::grid::GridLayerVisual;
use crate::input::PointerTracker;
use crate::interaction::{ContextMenuRequest, EditorEvent, InteractionState};
use crate::node::{NodeId, NodeVisual};
use crate::snapshot::{AnchorVisual, ConnectionVisual, Snapshot, SnapshotSyncer};
use crate::state::EditorState;
use crate::style::StyleDescriptor;
use log::debug;
use slint::platform::WindowEvent;
use slint::{SharedString, VecModel};
use std::cell::RefCell;
use std::rc::Rc;

type ContextHandler = Rc<dyn Fn(ContextMenuRequest)>;

/// Controller that owns the editor state and provides callback implementations.
///
/// Clone this controller to share it across callbacks. All clones refer to
/// the same editor.
#[derive(Clone)]
pub struct NodeEditorController {
    state: Rc<RefCell<EditorState>>,
    tracker: Rc<RefCell<PointerTracker>>,
    context_handler: Rc<RefCell<Option<ContextHandler>>>,
    syncer: Rc<RefCell<SnapshotSyncer>>,
}

impl Default for NodeEditorController {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeEditorController {
    /// Create a new controller with default settings.
    pub fn new() -> Self {
        Self::from_state(EditorState::new())
    }

    /// Create a controller from a configuration, validating it first.
    pub fn with_config(config: EditorConfig) -> Result<Self, ConfigError> {
        Ok(Self::from_state(EditorState::with_config(config)?))
    }

    fn from_state(state: EditorState) -> Self {
        Self {
            state: Rc::new(RefCell::new(state)),
            tracker: Rc::new(RefCell::new(PointerTracker::new())),
            context_handler: Rc::new(RefCell::new(None)),
            syncer: Rc::new(RefCell::new(SnapshotSyncer::new())),
        }
    }

    /// Get access to the editor state.
    ///
    /// Borrow it only for reads or for graph setup; do not hold the borrow
    /// across a call back into the controller.
    pub fn state(&self) -> Rc<RefCell<EditorState>> {
        self.state.clone()
    }

    /// Get the current node zoom.
    pub fn zoom(&self) -> f32 {
        self.state.borrow().viewport().zoom()
    }

    /// Get the current grid zoom.
    pub fn grid_zoom(&self) -> f32 {
        self.state.borrow().viewport().grid_zoom()
    }

    pub fn pan_offset(&self) -> (f32, f32) {
        self.state.borrow().viewport().pan_offset()
    }

    pub fn interaction(&self) -> InteractionState {
        self.state.borrow().interaction()
    }

    /// The configured skin, for mapping style states to colors in row
    /// constructors.
    pub fn style(&self) -> StyleDescriptor {
        self.state.borrow().config().style.clone()
    }

    /// Register the host's context menu handler, replacing any previous one.
    ///
    /// The handler runs after the event is fully processed, so it may call
    /// back into the controller (e.g. [`add_node_centered`](Self::add_node_centered)).
    pub fn on_context_request(&self, handler: impl Fn(ContextMenuRequest) + 'static) {
        *self.context_handler.borrow_mut() = Some(Rc::new(handler));
    }

    // === Event handling ===

    /// Process one event. Returns `true` if the host should redraw.
    pub fn handle_event(&self, event: EditorEvent) -> bool {
        let outcome = self.state.borrow_mut().handle_event(event);

        if let Some(request) = outcome.context_request {
            let handler = self.context_handler.borrow().clone();
            match handler {
                Some(handler) => handler(request),
                None => debug!("context request at {:?} with no handler", request.position),
            }
        }

        if outcome.redraw {
            self.sync_models();
        }
        outcome.redraw
    }

    /// Process a raw Slint window event. Returns `true` if the host should redraw.
    pub fn handle_window_event(&self, event: &WindowEvent) -> bool {
        let translated = self.tracker.borrow_mut().translate(event);
        match translated {
            Some(event) => self.handle_event(event),
            None => false,
        }
    }

    // === Host-driven operations ===

    /// Add a node with its top-left corner at (`x`, `y`).
    pub fn add_node(&self, title: impl Into<SharedString>, x: f32, y: f32) -> NodeId {
        let id = self.state.borrow_mut().add_node(title, (x, y));
        self.sync_models();
        id
    }

    /// Add a node centered on (`x`, `y`), e.g. the point a context menu was
    /// opened at.
    pub fn add_node_centered(&self, title: impl Into<SharedString>, x: f32, y: f32) -> NodeId {
        let id = self.state.borrow_mut().add_node_centered(title, (x, y));
        self.sync_models();
        id
    }

    /// Remove a node and its connections. Returns `false` if absent.
    pub fn remove_node(&self, id: NodeId) -> bool {
        let removed = self.state.borrow_mut().remove_node(id);
        if removed {
            self.sync_models();
        }
        removed
    }

    /// Remove a connection. Returns `false` if absent.
    pub fn remove_connection(&self, id: ConnectionId) -> bool {
        let removed = self.state.borrow_mut().remove_connection(id);
        if removed {
            self.sync_models();
        }
        removed
    }

    /// Set the node zoom directly, clamped to the configured range.
    pub fn set_zoom(&self, zoom: f32) -> bool {
        let changed = self.state.borrow_mut().set_zoom(zoom);
        if changed {
            self.sync_models();
        }
        changed
    }

    /// Set the canvas size used for the background grid.
    pub fn set_canvas_size(&self, width: f32, height: f32) -> bool {
        let changed = self.state.borrow_mut().set_canvas_size(width, height);
        if changed {
            self.sync_models();
        }
        changed
    }

    /// Fresh render data for the current state.
    pub fn snapshot(&self) -> Snapshot {
        self.state.borrow().snapshot()
    }

    // === Callback factories ===

    /// Returns a callback for an `add-node(title, x, y) -> int` Slint callback.
    ///
    /// The new node is centered on (`x`, `y`), so a node added from a menu
    /// lands under the point the menu was opened at.
    pub fn add_node_callback(&self) -> impl Fn(SharedString, f32, f32) -> i32 {
        let ctrl = self.clone();
        move |title, x, y| ctrl.add_node_centered(title, x, y).0
    }

    /// Returns a callback for a `remove-node(id)` Slint callback.
    pub fn remove_node_callback(&self) -> impl Fn(i32) {
        let ctrl = self.clone();
        move |id| {
            ctrl.remove_node(NodeId(id));
        }
    }

    /// Returns a callback for a `canvas-resized(width, height)` Slint callback.
    pub fn canvas_resized_callback(&self) -> impl Fn(f32, f32) {
        let ctrl = self.clone();
        move |width, height| {
            ctrl.set_canvas_size(width, height);
        }
    }

    // === Model binding ===

    pub fn bind_nodes<P, F>(&self, model: Rc<VecModel<P>>, constructor: F)
    where
        P: Clone + 'static,
        F: Fn(&NodeVisual) -> P + 'static,
    {
        self.syncer.borrow_mut().bind_nodes(model, constructor);
        self.sync_models();
    }

    pub fn bind_anchors<P, F>(&self, model: Rc<VecModel<P>>, constructor: F)
    where
        P: Clone + 'static,
        F: Fn(&AnchorVisual) -> P + 'static,
    {
        self.syncer.borrow_mut().bind_anchors(model, constructor);
        self.sync_models();
    }

    pub fn bind_connections<P, F>(&self, model: Rc<VecModel<P>>, constructor: F)
    where
        P: Clone + 'static,
        F: Fn(&ConnectionVisual) -> P + 'static,
    {
        self.syncer.borrow_mut().bind_connections(model, constructor);
        self.sync_models();
    }

    pub fn bind_grid<P, F>(&self, model: Rc<VecModel<P>>, constructor: F)
    where
        P: Clone + 'static,
        F: Fn(&GridLayerVisual) -> P + 'static,
    {
        self.syncer.borrow_mut().bind_grid(model, constructor);
        self.sync_models();
    }

    fn sync_models(&self) {
        let syncer = self.syncer.borrow();
        if syncer.is_empty() {
            return;
        }
        let snapshot = self.state.borrow().snapshot();
        syncer.sync(&snapshot);
    }
}
