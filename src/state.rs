use crate::anchor::AnchorId;
use crate::config::{ConfigError, EditorConfig};
use crate::geometry::point;
use crate::graph::{ConnectionId, GraphModel};
use crate::hit_test::{find_node_at, pick, Hit};
use crate::interaction::{ContextMenuRequest, EditorEvent, EventOutcome, InteractionState};
use crate::node::NodeId;
use crate::snapshot::Snapshot;
use crate::viewport::Viewport;
use log::{debug, trace};
use slint::platform::PointerEventButton;
use slint::{LogicalPosition, SharedString};

/// The whole editor: graph, viewport and the drag/connect state machine.
///
/// Single-threaded and synchronous. Each call to
/// [`handle_event`](Self::handle_event) completes every mutation before it
/// returns, and reports whether the host should redraw.
#[derive(Debug)]
pub struct EditorState {
    config: EditorConfig,
    graph: GraphModel,
    viewport: Viewport,
    interaction: InteractionState,
    /// Last known pointer position, for the pending-connection preview.
    pointer: Option<(f32, f32)>,
    canvas_size: (f32, f32),
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            config: EditorConfig::default(),
            graph: GraphModel::new(),
            viewport: Viewport::default(),
            interaction: InteractionState::Idle,
            pointer: None,
            canvas_size: (0.0, 0.0),
        }
    }
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a validated configuration.
    pub fn with_config(config: EditorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let viewport = Viewport::new(config.zoom, config.grid_zoom)?;
        Ok(Self {
            config,
            viewport,
            ..Self::default()
        })
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn graph(&self) -> &GraphModel {
        &self.graph
    }

    /// Mutable graph access for hosts that register validators or seed
    /// connections directly. The graph still validates every insertion.
    pub fn graph_mut(&mut self) -> &mut GraphModel {
        &mut self.graph
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn interaction(&self) -> InteractionState {
        self.interaction
    }

    pub fn pointer(&self) -> Option<(f32, f32)> {
        self.pointer
    }

    pub fn canvas_size(&self) -> (f32, f32) {
        self.canvas_size
    }

    /// Canvas size used for grid generation. Returns `true` if it changed.
    ///
    /// Negative sizes count as zero; non-finite sizes are ignored.
    pub fn set_canvas_size(&mut self, width: f32, height: f32) -> bool {
        if !(width.is_finite() && height.is_finite()) {
            return false;
        }
        let size = (width.max(0.0), height.max(0.0));
        let changed = size != self.canvas_size;
        self.canvas_size = size;
        changed
    }

    // === Host-driven operations ===

    /// Add a node built from the configured template, with its top-left
    /// corner at `position`, scaled to the current zoom.
    pub fn add_node(&mut self, title: impl Into<SharedString>, position: (f32, f32)) -> NodeId {
        let template = self.config.node_template.clone().with_title(title);
        self.graph.add_node(&template, position, self.viewport.zoom())
    }

    /// Add a node whose current rect is centered on `center`, the way a
    /// node dropped from a context menu lands under the pointer.
    pub fn add_node_centered(
        &mut self,
        title: impl Into<SharedString>,
        center: (f32, f32),
    ) -> NodeId {
        let zoom = self.viewport.zoom();
        let (width, height) = self.config.node_template.size;
        let top_left = (center.0 - width * zoom / 2.0, center.1 - height * zoom / 2.0);
        self.add_node(title, top_left)
    }

    /// Remove a node, its connections, and any interaction state that
    /// refers to it. Returns `false` if the node was not present.
    pub fn remove_node(&mut self, id: NodeId) -> bool {
        if !self.graph.remove_node(id) {
            return false;
        }
        let stale = match self.interaction {
            InteractionState::NodeDragging(node) => node == id,
            InteractionState::PendingConnection(anchor) => anchor.node == id,
            InteractionState::Idle => false,
        };
        if stale {
            debug!("interaction {:?} reset: node {:?} removed", self.interaction, id);
            self.interaction = InteractionState::Idle;
        }
        true
    }

    pub fn remove_connection(&mut self, id: ConnectionId) -> bool {
        self.graph.remove_connection(id)
    }

    /// Set the node zoom directly (clamped) and rescale every node.
    pub fn set_zoom(&mut self, zoom: f32) -> bool {
        if !self.viewport.set_zoom(zoom) {
            return false;
        }
        self.graph.set_zoom(self.viewport.zoom());
        true
    }

    // === Event dispatch ===

    /// Advance the state machine by one event.
    pub fn handle_event(&mut self, event: EditorEvent) -> EventOutcome {
        trace!("{:?} in {:?}", event, self.interaction);
        match event {
            EditorEvent::PointerDown { button, position } => match button {
                PointerEventButton::Left => EventOutcome::redraw(self.primary_down(position)),
                PointerEventButton::Right => self.context_request(position),
                _ => {
                    self.pointer = Some(point(position));
                    EventOutcome::default()
                }
            },
            EditorEvent::PointerUp { button } => EventOutcome::redraw(self.pointer_up(button)),
            EditorEvent::PointerMove { position } => {
                self.pointer = Some(point(position));
                EventOutcome::redraw(self.interaction.pending_anchor().is_some())
            }
            EditorEvent::PointerDrag {
                button,
                position,
                delta,
            } => EventOutcome::redraw(self.drag(button, position, delta)),
            EditorEvent::Scroll { delta } => EventOutcome::redraw(self.zoom(delta.1)),
            EditorEvent::ContextRequest { position } => self.context_request(position),
        }
    }

    fn primary_down(&mut self, position: LogicalPosition) -> bool {
        let p = point(position);
        self.pointer = Some(p);

        match pick(&self.graph, p, self.config.delete_handle_pick) {
            Hit::Anchor(anchor) => self.click_anchor(anchor),
            Hit::DeleteHandle(connection) => {
                self.interaction = InteractionState::Idle;
                self.graph.remove_connection(connection)
            }
            Hit::Node(node) => {
                // A body click also drops any half-made connection.
                self.graph.select_only(node);
                self.interaction = InteractionState::NodeDragging(node);
                debug!("dragging node {:?}", node);
                true
            }
            Hit::Canvas => {
                let deselected = self.graph.clear_selection();
                let cancelled = self.interaction.pending_anchor().is_some();
                if cancelled {
                    debug!("pending connection cancelled");
                }
                self.interaction = InteractionState::Idle;
                deselected || cancelled
            }
        }
    }

    /// Put `anchor` into its direction's slot, resolving the pair when the
    /// opposite slot is already filled.
    fn click_anchor(&mut self, anchor: AnchorId) -> bool {
        let waiting = match self.interaction {
            InteractionState::PendingConnection(waiting) => Some(waiting),
            _ => None,
        };

        match waiting {
            // Clicking the waiting anchor again toggles it off.
            Some(waiting) if waiting == anchor => {
                debug!("pending anchor {:?} released", anchor);
                self.interaction = InteractionState::Idle;
            }
            Some(waiting) if waiting.direction != anchor.direction => {
                if waiting.node == anchor.node {
                    debug!("connection rejected: {:?} and {:?} share a node", waiting, anchor);
                } else {
                    match self.graph.try_connect(waiting, anchor) {
                        Ok(id) => debug!("connection {:?} created", id),
                        Err(err) => debug!("connection rejected: {}", err),
                    }
                }
                self.interaction = InteractionState::Idle;
            }
            // Empty slot, or same slot holding a different anchor: most
            // recent click wins.
            _ => {
                debug!("pending anchor {:?}", anchor);
                self.interaction = InteractionState::PendingConnection(anchor);
            }
        }
        true
    }

    fn pointer_up(&mut self, button: PointerEventButton) -> bool {
        if button == PointerEventButton::Left {
            if let InteractionState::NodeDragging(node) = self.interaction {
                debug!("drag of node {:?} ended", node);
                self.interaction = InteractionState::Idle;
            }
        }
        false
    }

    fn drag(
        &mut self,
        button: PointerEventButton,
        position: LogicalPosition,
        delta: (f32, f32),
    ) -> bool {
        self.pointer = Some(point(position));
        match (button, self.interaction) {
            (PointerEventButton::Left, InteractionState::NodeDragging(id)) => {
                if !(delta.0.is_finite() && delta.1.is_finite()) {
                    return false;
                }
                match self.graph.node_mut(id) {
                    Some(node) => {
                        node.translate(delta.0, delta.1);
                        true
                    }
                    None => false,
                }
            }
            (PointerEventButton::Left | PointerEventButton::Middle, _) => {
                let panned = self.viewport.apply_pan_delta(delta);
                panned || self.interaction.pending_anchor().is_some()
            }
            _ => false,
        }
    }

    fn zoom(&mut self, scroll_delta: f32) -> bool {
        if !self.viewport.apply_zoom_delta(scroll_delta) {
            return false;
        }
        self.graph.set_zoom(self.viewport.zoom());
        debug!(
            "zoom {} grid zoom {}",
            self.viewport.zoom(),
            self.viewport.grid_zoom()
        );
        true
    }

    fn context_request(&mut self, position: LogicalPosition) -> EventOutcome {
        let p = point(position);
        self.pointer = Some(p);
        EventOutcome::context(ContextMenuRequest {
            position,
            node: find_node_at(&self.graph, p),
        })
    }

    /// Read-only render data computed from the current geometry.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }
}
