//! Pan offset and the two zoom factors.
//!
//! Panning only shifts the background grid phase. Placed nodes keep their
//! positions and move only when dragged individually.

use crate::config::{ConfigError, EditorConfig, ZoomRange};

#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    pan_offset: (f32, f32),
    zoom: f32,
    grid_zoom: f32,
    zoom_range: ZoomRange,
    grid_zoom_range: ZoomRange,
}

impl Default for Viewport {
    fn default() -> Self {
        let config = EditorConfig::default();
        Self::from_ranges(config.zoom, config.grid_zoom)
    }
}

impl Viewport {
    /// Start at zoom 1.0 on both factors (clamped into their ranges) with no pan.
    pub fn new(zoom_range: ZoomRange, grid_zoom_range: ZoomRange) -> Result<Self, ConfigError> {
        zoom_range.validate("zoom")?;
        grid_zoom_range.validate("grid zoom")?;
        Ok(Self::from_ranges(zoom_range, grid_zoom_range))
    }

    fn from_ranges(zoom_range: ZoomRange, grid_zoom_range: ZoomRange) -> Self {
        Self {
            pan_offset: (0.0, 0.0),
            zoom: zoom_range.clamp(1.0),
            grid_zoom: grid_zoom_range.clamp(1.0),
            zoom_range,
            grid_zoom_range,
        }
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn grid_zoom(&self) -> f32 {
        self.grid_zoom
    }

    pub fn pan_offset(&self) -> (f32, f32) {
        self.pan_offset
    }

    /// Step both zoom factors from one scroll notch.
    ///
    /// Only the sign of `scroll_delta` matters. Negative (scrolling up/away)
    /// zooms in, positive zooms out, zero does nothing. Each factor is
    /// clamped to its own range.
    ///
    /// Returns `true` if either factor changed. The caller is responsible
    /// for reapplying [`zoom`](Self::zoom) to every node.
    pub fn apply_zoom_delta(&mut self, scroll_delta: f32) -> bool {
        let direction = if scroll_delta < 0.0 {
            1.0
        } else if scroll_delta > 0.0 {
            -1.0
        } else {
            return false;
        };

        let zoom = self.zoom_range.clamp(self.zoom + direction * self.zoom_range.step);
        let grid_zoom = self
            .grid_zoom_range
            .clamp(self.grid_zoom + direction * self.grid_zoom_range.step);

        let changed = zoom != self.zoom || grid_zoom != self.grid_zoom;
        self.zoom = zoom;
        self.grid_zoom = grid_zoom;
        changed
    }

    /// Set the node zoom factor directly, clamped to its range.
    ///
    /// Returns `true` if the value changed. Non-finite values are ignored.
    pub fn set_zoom(&mut self, zoom: f32) -> bool {
        if !zoom.is_finite() {
            return false;
        }
        let zoom = self.zoom_range.clamp(zoom);
        let changed = zoom != self.zoom;
        self.zoom = zoom;
        changed
    }

    /// Accumulate a drag delta into the pan offset.
    ///
    /// Returns `true` if the offset moved. A delta that would leave the
    /// offset non-finite is dropped.
    pub fn apply_pan_delta(&mut self, delta: (f32, f32)) -> bool {
        if delta == (0.0, 0.0) {
            return false;
        }
        let offset = (self.pan_offset.0 + delta.0, self.pan_offset.1 + delta.1);
        if !(offset.0.is_finite() && offset.1.is_finite()) {
            return false;
        }
        self.pan_offset = offset;
        true
    }

    /// Grid line phase for the given on-screen spacing, in `[0, spacing)`.
    pub fn grid_phase(&self, spacing: f32) -> (f32, f32) {
        (
            self.pan_offset.0.rem_euclid(spacing),
            self.pan_offset.1.rem_euclid(spacing),
        )
    }
}
