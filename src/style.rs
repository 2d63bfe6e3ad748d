//! Visual skin handed to the editor by the host.
//!
//! The core never creates rendering resources. It reports a style *state*
//! for every node and anchor in the snapshot, and the host maps those states
//! to colors through the [`StyleDescriptor`] it configured.

use crate::anchor::AnchorDirection;
use slint::Color;

/// How a node body should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeStyleState {
    #[default]
    Default,
    Selected,
}

impl NodeStyleState {
    pub fn from_selected(selected: bool) -> Self {
        if selected {
            Self::Selected
        } else {
            Self::Default
        }
    }
}

/// How an anchor should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnchorStyleState {
    #[default]
    Normal,
    /// Held in a pending-connection slot, waiting for its counterpart.
    Pending,
}

/// Normal/active color pair for one anchor direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorSkin {
    pub normal: Color,
    pub active: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StyleDescriptor {
    pub background: Color,
    pub grid_line: Color,
    pub node_fill: Color,
    pub node_selected_fill: Color,
    pub node_title: Color,
    /// Border inset of the node body skin, in pixels.
    pub node_border: f32,
    pub input_anchor: AnchorSkin,
    pub output_anchor: AnchorSkin,
    pub connection: Color,
    pub connection_width: f32,
    pub delete_handle: Color,
}

impl Default for StyleDescriptor {
    fn default() -> Self {
        Self {
            background: Color::from_rgb_u8(0, 0, 0),
            grid_line: Color::from_rgb_u8(128, 128, 128),
            node_fill: Color::from_rgb_u8(128, 128, 128),
            node_selected_fill: Color::from_rgb_u8(64, 64, 64),
            node_title: Color::from_rgb_u8(255, 255, 255),
            node_border: 12.0,
            input_anchor: AnchorSkin {
                normal: Color::from_rgb_u8(255, 255, 255),
                active: Color::from_rgb_u8(0, 255, 0),
            },
            output_anchor: AnchorSkin {
                normal: Color::from_rgb_u8(255, 0, 0),
                active: Color::from_rgb_u8(0, 0, 255),
            },
            connection: Color::from_rgb_u8(255, 255, 255),
            connection_width: 2.0,
            delete_handle: Color::from_rgb_u8(255, 255, 255),
        }
    }
}

impl StyleDescriptor {
    pub fn node_fill(&self, state: NodeStyleState) -> Color {
        match state {
            NodeStyleState::Default => self.node_fill,
            NodeStyleState::Selected => self.node_selected_fill,
        }
    }

    pub fn anchor_fill(&self, direction: AnchorDirection, state: AnchorStyleState) -> Color {
        let skin = match direction {
            AnchorDirection::In => &self.input_anchor,
            AnchorDirection::Out => &self.output_anchor,
        };
        match state {
            AnchorStyleState::Normal => skin.normal,
            AnchorStyleState::Pending => skin.active,
        }
    }

    /// Grid line color at the given layer opacity.
    pub fn grid_line_color(&self, opacity: f32) -> Color {
        self.grid_line.with_alpha(opacity.clamp(0.0, 1.0))
    }
}
