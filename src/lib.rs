//! # Slint Node Canvas
//!
//! The interaction core of a node-link graph editor for Slint applications.
//! Nodes are rectangles with one input and one output anchor. Users connect
//! anchors by clicking them in turn, drag nodes around, zoom with the wheel
//! and pan the background grid.
//!
//! The crate owns the graph, the viewport and the drag/connect state machine.
//! It does not draw anything: after each event the host asks for a
//! [`Snapshot`] and renders it however it likes, typically by binding Slint
//! `VecModel`s through [`NodeEditorController`].
//!
//! ## Features
//!
//! - **Drift-free zoom** - Every size is recomputed from its base size, so any
//!   sequence of zoom steps that returns to a factor restores the exact rects
//! - **Derived anchors** - Anchor positions are computed from the parent's
//!   current rect on every query and can never go stale
//! - **Click-to-connect** - A single pending anchor resolves into a connection
//!   when an anchor of the opposite direction is clicked
//! - **Validation hooks** - Extra connection rules via [`LinkValidator`]
//! - **Host-owned menus** - Secondary clicks surface as [`ContextMenuRequest`]s
//!
//! ## Quick Start
//!
//! ```ignore
//! use slint_node_canvas::NodeEditorController;
//!
//! let ctrl = NodeEditorController::new();
//! let a = ctrl.add_node("Source", 0.0, 0.0);
//! let b = ctrl.add_node("Sink", 300.0, 0.0);
//!
//! window.on_pointer_event({
//!     let ctrl = ctrl.clone();
//!     move |event| ctrl.handle_window_event(&event)
//! });
//! ```
//!
//! ## Rust Helpers
//!
//! - [`generate_grid_commands`] - Generate SVG path for grid rendering
//! - [`generate_connection_path`] - Generate SVG path for a connection curve
//! - [`pick`] - Resolve what lies under a point, in click priority order
//! - [`PointerTracker`] - Turn raw window events into editor events
//! - [`SnapshotSyncer`] - Keep Slint models in step with each snapshot

pub mod anchor;
pub mod config;
pub mod controller;
pub mod geometry;
pub mod graph;
pub mod grid;
pub mod input;
pub mod interaction;
pub mod node;
pub mod path;
pub mod snapshot;
pub mod state;
pub mod style;
pub mod viewport;

pub use anchor::{AnchorDirection, AnchorId, ConnectorAnchor};
pub use config::{ConfigError, EditorConfig, GridLayer, ZoomRange};
pub use controller::NodeEditorController;
pub use geometry::Rect;
pub use graph::{ConnectError, Connection, ConnectionId, GraphModel, LinkValidator};
pub use grid::{generate_grid_commands, grid_layers, GridLayerVisual};
pub use hit_test::{find_anchor_at, find_delete_handle_at, find_node_at, pick, Hit};
pub use input::PointerTracker;
pub use interaction::{ContextMenuRequest, EditorEvent, EventOutcome, InteractionState};
pub use node::{Node, NodeId, NodeTemplate, NodeVisual};
pub use path::{generate_connection_path, ConnectionCurve};
pub use snapshot::{sync_model, AnchorVisual, ConnectionVisual, Snapshot, SnapshotSyncer};
pub use state::EditorState;
pub use style::{AnchorSkin, AnchorStyleState, NodeStyleState, StyleDescriptor};
pub use viewport::Viewport;
