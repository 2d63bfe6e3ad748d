//! Editor configuration, passed once at construction and held as instance state.

use crate::node::NodeTemplate;
use crate::style::StyleDescriptor;
use thiserror::Error;

/// Step and clamp range for one zoom factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomRange {
    /// Magnitude added or removed per scroll notch.
    pub step: f32,
    pub min: f32,
    pub max: f32,
}

impl ZoomRange {
    pub const fn new(step: f32, min: f32, max: f32) -> Self {
        Self { step, min, max }
    }

    /// Clamp `value` into `[min, max]`. Never panics; NaN lands on `min`.
    pub fn clamp(&self, value: f32) -> f32 {
        value.max(self.min).min(self.max)
    }

    /// Check that the step and both bounds are positive and `min <= max`.
    pub fn validate(&self, name: &'static str) -> Result<(), ConfigError> {
        check_positive(name, self.step)?;
        check_positive(name, self.min)?;
        check_positive(name, self.max)?;
        if self.min > self.max {
            return Err(ConfigError::EmptyRange {
                name,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// One set of background grid lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayer {
    /// Line spacing at grid zoom 1.0.
    pub spacing: f32,
    pub opacity: f32,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} range is empty: min {min} > max {max}")]
    EmptyRange { name: &'static str, min: f32, max: f32 },
    #[error("{name} must be a positive finite number, got {value}")]
    NotPositive { name: &'static str, value: f32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    /// Node/anchor zoom.
    pub zoom: ZoomRange,
    /// Grid spacing zoom, independent of node zoom.
    pub grid_zoom: ZoomRange,
    /// Horizontal control point offset for connection curves.
    pub curve_offset: f32,
    /// Half-extent of the drawn connection delete handle.
    pub delete_handle_size: f32,
    /// Half-extent of the delete handle's click target.
    pub delete_handle_pick: f32,
    pub grid_layers: Vec<GridLayer>,
    /// Template used by `add_node`; only the title varies per call.
    pub node_template: NodeTemplate,
    pub style: StyleDescriptor,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            zoom: ZoomRange::new(0.25, 1.0, 3.0),
            grid_zoom: ZoomRange::new(1.125, 0.125, 9.125),
            curve_offset: 50.0,
            delete_handle_size: 4.0,
            delete_handle_pick: 8.0,
            grid_layers: vec![
                GridLayer { spacing: 20.0, opacity: 0.2 },
                GridLayer { spacing: 100.0, opacity: 0.4 },
            ],
            node_template: NodeTemplate::default(),
            style: StyleDescriptor::default(),
        }
    }
}

impl EditorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_zoom(mut self, zoom: ZoomRange) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn with_grid_zoom(mut self, grid_zoom: ZoomRange) -> Self {
        self.grid_zoom = grid_zoom;
        self
    }

    pub fn with_curve_offset(mut self, offset: f32) -> Self {
        self.curve_offset = offset;
        self
    }

    pub fn with_delete_handle(mut self, size: f32, pick: f32) -> Self {
        self.delete_handle_size = size;
        self.delete_handle_pick = pick;
        self
    }

    pub fn with_grid_layers(mut self, layers: Vec<GridLayer>) -> Self {
        self.grid_layers = layers;
        self
    }

    pub fn with_node_template(mut self, template: NodeTemplate) -> Self {
        self.node_template = template;
        self
    }

    pub fn with_style(mut self, style: StyleDescriptor) -> Self {
        self.style = style;
        self
    }

    /// Check ranges and sizes before the config is put to use.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.zoom.validate("zoom")?;
        self.grid_zoom.validate("grid zoom")?;
        check_positive("curve offset", self.curve_offset)?;
        check_positive("delete handle size", self.delete_handle_size)?;
        check_positive("delete handle pick size", self.delete_handle_pick)?;
        check_positive("node width", self.node_template.size.0)?;
        check_positive("node height", self.node_template.size.1)?;
        check_positive("anchor width ratio", self.node_template.anchor_width_ratio)?;
        check_positive("anchor height ratio", self.node_template.anchor_height_ratio)?;
        for layer in &self.grid_layers {
            check_positive("grid spacing", layer.spacing)?;
        }
        Ok(())
    }
}

fn check_positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { name, value })
    }
}
