use crate::anchor::{AnchorDirection, AnchorId};
use crate::geometry::Rect;
use crate::node::{Node, NodeId, NodeTemplate};
use crate::path::ConnectionCurve;
use log::{debug, warn};
use std::fmt;
use thiserror::Error;

/// Identity of a connection. Allocated by the graph and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionId(pub i32);

/// An edge from one node's output anchor to a different node's input anchor.
///
/// Only [`GraphModel`] creates connections, and only after validation, so a
/// `Connection` in hand always joins two distinct nodes with complementary
/// anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    id: ConnectionId,
    input: AnchorId,
    output: AnchorId,
}

impl Connection {
    pub fn id(&self) -> ConnectionId {
        self.id
    }

    pub fn input(&self) -> AnchorId {
        self.input
    }

    pub fn output(&self) -> AnchorId {
        self.output
    }

    /// Whether either endpoint belongs to `node`.
    pub fn touches(&self, node: NodeId) -> bool {
        self.input.node == node || self.output.node == node
    }

    pub fn joins(&self, input: AnchorId, output: AnchorId) -> bool {
        self.input == input && self.output == output
    }
}

/// Reasons a connection is refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectError {
    #[error("cannot connect node {0:?} to itself")]
    SameNode(NodeId),
    #[error("must connect an input to an output")]
    IncompatibleDirection,
    #[error("node {0:?} is not in the graph")]
    UnknownNode(NodeId),
    #[error("connection {0:?} already joins these anchors")]
    Duplicate(ConnectionId),
    #[error("{0}")]
    Rejected(String),
}

/// Extra rule consulted before a connection is inserted.
///
/// The graph always enforces its own invariants (both nodes present, distinct
/// nodes, one input and one output, no duplicates) first. Validators only see
/// pairs that already pass those checks, already ordered as (input, output).
///
/// Closures with the matching signature implement this trait.
///
/// # Example
///
/// ```
/// use slint_node_canvas::{AnchorId, ConnectError, GraphModel};
///
/// let mut graph = GraphModel::new();
/// graph.add_validator(|_input: AnchorId, output: AnchorId, graph: &GraphModel| {
///     if graph.connections_from(output.node).count() >= 1 {
///         Err(ConnectError::Rejected("single fan-out only".into()))
///     } else {
///         Ok(())
///     }
/// });
/// ```
pub trait LinkValidator {
    fn validate(
        &self,
        input: AnchorId,
        output: AnchorId,
        graph: &GraphModel,
    ) -> Result<(), ConnectError>;
}

impl<F> LinkValidator for F
where
    F: Fn(AnchorId, AnchorId, &GraphModel) -> Result<(), ConnectError>,
{
    fn validate(
        &self,
        input: AnchorId,
        output: AnchorId,
        graph: &GraphModel,
    ) -> Result<(), ConnectError> {
        self(input, output, graph)
    }
}

/// Owner of the node and connection collections.
///
/// Invariants held after every public call:
/// - every connection's anchors belong to nodes in `nodes`;
/// - no connection joins two anchors of the same node;
/// - no two connections join the same (input, output) pair.
///
/// Node order is draw order: later nodes are drawn on top.
pub struct GraphModel {
    nodes: Vec<Node>,
    connections: Vec<Connection>,
    next_node_id: i32,
    next_connection_id: i32,
    validators: Vec<Box<dyn LinkValidator>>,
}

impl Default for GraphModel {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            connections: Vec::new(),
            next_node_id: 1,
            next_connection_id: 1,
            validators: Vec::new(),
        }
    }
}

impl fmt::Debug for GraphModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphModel")
            .field("nodes", &self.nodes)
            .field("connections", &self.connections)
            .field("validators", &self.validators.len())
            .finish()
    }
}

impl GraphModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an extra connection rule.
    pub fn add_validator<V: LinkValidator + 'static>(&mut self, validator: V) {
        self.validators.push(Box::new(validator));
    }

    // === Nodes ===

    /// Create a node from `template` at `position` and append it on top.
    pub fn add_node(&mut self, template: &NodeTemplate, position: (f32, f32), zoom: f32) -> NodeId {
        let id = NodeId(self.next_node_id);
        // Wraps only after 2^31 allocations.
        self.next_node_id = self.next_node_id.wrapping_add(1);
        self.nodes.push(Node::from_template(id, template, position, zoom));
        debug!("added node {:?} '{}' at {:?}", id, template.title, position);
        id
    }

    /// Remove a node and every connection touching it.
    ///
    /// Returns `false` if the node was not present.
    pub fn remove_node(&mut self, id: NodeId) -> bool {
        let Some(index) = self.nodes.iter().position(|n| n.id() == id) else {
            return false;
        };
        self.nodes.remove(index);

        let before = self.connections.len();
        self.connections.retain(|c| !c.touches(id));
        debug!(
            "removed node {:?} and {} connection(s)",
            id,
            before - self.connections.len()
        );
        true
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id() == id)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id() == id)
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    /// Nodes from topmost to bottommost, the order for hit-testing.
    pub fn nodes_topmost_first(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().rev()
    }

    /// Reapply a zoom factor to every node, each from its own base rect.
    pub fn set_zoom(&mut self, factor: f32) {
        for node in &mut self.nodes {
            node.set_zoom(factor);
        }
    }

    // === Selection ===

    /// Select exactly one node. Returns `true` if any selection flag changed.
    pub fn select_only(&mut self, id: NodeId) -> bool {
        let mut changed = false;
        for node in &mut self.nodes {
            let selected = node.id() == id;
            if node.is_selected() != selected {
                node.set_selected(selected);
                changed = true;
            }
        }
        changed
    }

    /// Deselect every node. Returns `true` if any node was selected.
    pub fn clear_selection(&mut self) -> bool {
        let mut changed = false;
        for node in self.nodes.iter_mut().filter(|n| n.is_selected()) {
            node.set_selected(false);
            changed = true;
        }
        changed
    }

    pub fn selected_node(&self) -> Option<NodeId> {
        self.nodes.iter().find(|n| n.is_selected()).map(Node::id)
    }

    // === Connections ===

    /// Connect two anchors given in any order.
    ///
    /// The pair is ordered into (input, output) before insertion. Refused
    /// when the anchors share a node, are not one input and one output,
    /// reference a missing node, duplicate an existing connection, or fail
    /// a registered validator.
    pub fn try_connect(&mut self, a: AnchorId, b: AnchorId) -> Result<ConnectionId, ConnectError> {
        let (input, output) = match (a.direction, b.direction) {
            (AnchorDirection::In, AnchorDirection::Out) => (a, b),
            (AnchorDirection::Out, AnchorDirection::In) => (b, a),
            _ if a.node == b.node => return Err(ConnectError::SameNode(a.node)),
            _ => return Err(ConnectError::IncompatibleDirection),
        };
        self.insert_connection(input, output)
    }

    /// Connect with explicit roles: `input` must be an input anchor and
    /// `output` an output anchor.
    ///
    /// Goes through the same validation as [`try_connect`](Self::try_connect);
    /// a swapped pair is refused rather than reordered.
    pub fn connect(
        &mut self,
        input: AnchorId,
        output: AnchorId,
    ) -> Result<ConnectionId, ConnectError> {
        if input.direction != AnchorDirection::In || output.direction != AnchorDirection::Out {
            let err = if input.node == output.node {
                ConnectError::SameNode(input.node)
            } else {
                ConnectError::IncompatibleDirection
            };
            warn!("refused connection {:?} -> {:?}: {}", output, input, err);
            return Err(err);
        }
        self.insert_connection(input, output).inspect_err(|err| {
            warn!("refused connection {:?} -> {:?}: {}", output, input, err);
        })
    }

    fn validate(&self, input: AnchorId, output: AnchorId) -> Result<(), ConnectError> {
        if input.node == output.node {
            return Err(ConnectError::SameNode(input.node));
        }
        for node in [input.node, output.node] {
            if !self.contains_node(node) {
                return Err(ConnectError::UnknownNode(node));
            }
        }
        if let Some(existing) = self.connection_between(input, output) {
            return Err(ConnectError::Duplicate(existing));
        }
        for validator in &self.validators {
            validator.validate(input, output, self)?;
        }
        Ok(())
    }

    fn insert_connection(
        &mut self,
        input: AnchorId,
        output: AnchorId,
    ) -> Result<ConnectionId, ConnectError> {
        self.validate(input, output)?;
        let id = ConnectionId(self.next_connection_id);
        self.next_connection_id = self.next_connection_id.wrapping_add(1);
        self.connections.push(Connection { id, input, output });
        debug!("connected {:?} -> {:?} as {:?}", output, input, id);
        Ok(id)
    }

    /// Remove a connection. Returns `false` if it was not present.
    pub fn remove_connection(&mut self, id: ConnectionId) -> bool {
        let before = self.connections.len();
        self.connections.retain(|c| c.id != id);
        let removed = self.connections.len() != before;
        if removed {
            debug!("removed connection {:?}", id);
        }
        removed
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn connection(&self, id: ConnectionId) -> Option<&Connection> {
        self.connections.iter().find(|c| c.id == id)
    }

    pub fn connection_between(&self, input: AnchorId, output: AnchorId) -> Option<ConnectionId> {
        self.connections
            .iter()
            .find(|c| c.joins(input, output))
            .map(Connection::id)
    }

    /// Connections leaving `node` through its output anchor.
    pub fn connections_from(&self, node: NodeId) -> impl Iterator<Item = &Connection> {
        self.connections.iter().filter(move |c| c.output.node == node)
    }

    /// Connections touching `node` on either side.
    pub fn connections_of(&self, node: NodeId) -> impl Iterator<Item = &Connection> {
        self.connections.iter().filter(move |c| c.touches(node))
    }

    // === Geometry ===

    /// Current rect of an anchor, or `None` if its node is gone.
    pub fn anchor_rect(&self, anchor: AnchorId) -> Option<Rect> {
        self.node(anchor.node).map(|n| n.anchor_rect(anchor.direction))
    }

    pub fn anchor_center(&self, anchor: AnchorId) -> Option<(f32, f32)> {
        self.anchor_rect(anchor).map(|r| r.center())
    }

    /// Curve between a connection's anchor centers, from the current node rects.
    pub fn connection_curve(
        &self,
        connection: &Connection,
        offset: f32,
    ) -> Option<ConnectionCurve> {
        Some(ConnectionCurve::between(
            self.anchor_center(connection.input)?,
            self.anchor_center(connection.output)?,
            offset,
        ))
    }

    /// Square handle centered between the two anchor centers.
    pub fn delete_handle(&self, connection: &Connection, half_extent: f32) -> Option<Rect> {
        let input = self.anchor_center(connection.input)?;
        let output = self.anchor_center(connection.output)?;
        Some(Rect::centered_square(crate::geometry::midpoint(input, output), half_extent))
    }
}
