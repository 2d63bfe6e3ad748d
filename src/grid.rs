use crate::config::GridLayer;
use crate::viewport::Viewport;

/// Spacings below this many pixels are not drawn.
const MIN_VISIBLE_SPACING: f32 = 4.0;

/// Upper bound on lines per axis, whatever the canvas size.
const MAX_LINES_PER_AXIS: usize = 2048;

/// Render data for one layer of background grid lines.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayerVisual {
    /// On-screen spacing (layer spacing × grid zoom).
    pub spacing: f32,
    pub opacity: f32,
    /// SVG path commands for all lines of the layer.
    pub commands: String,
}

/// Generate SVG path commands for grid lines
///
/// Lines start at the pan phase and repeat every `spacing` pixels until they
/// pass the canvas edge, up to [`MAX_LINES_PER_AXIS`] per axis. A non-finite
/// canvas size draws nothing.
///
/// # Arguments
/// * `width` - Canvas width in pixels
/// * `height` - Canvas height in pixels
/// * `spacing` - On-screen line spacing
/// * `phase` - Offset of the first line on each axis, in `[0, spacing)`
///
/// # Returns
/// SVG path commands string (e.g., "M 24 0 L 24 600 M 48 0 L 48 600...")
pub fn generate_grid_commands(width: f32, height: f32, spacing: f32, phase: (f32, f32)) -> String {
    if spacing.is_nan() || spacing < MIN_VISIBLE_SPACING {
        return String::new();
    }
    if !(width.is_finite() && height.is_finite()) {
        return String::new();
    }

    let mut commands = String::with_capacity(10000);

    // Vertical lines
    let mut x = phase.0;
    let mut lines = 0;
    while x < width + spacing && lines < MAX_LINES_PER_AXIS {
        if !commands.is_empty() {
            commands.push(' ');
        }
        commands.push_str(&format!("M {} 0 L {} {}", x, x, height));
        x += spacing;
        lines += 1;
    }

    // Horizontal lines
    let mut y = phase.1;
    let mut lines = 0;
    while y < height + spacing && lines < MAX_LINES_PER_AXIS {
        commands.push(' ');
        commands.push_str(&format!("M 0 {} L {} {}", y, width, y));
        y += spacing;
        lines += 1;
    }

    commands
}

/// Build every configured grid layer for the current viewport.
///
/// Spacing follows the grid zoom only; the node zoom never touches it.
/// Layers too dense to see are left out.
pub fn grid_layers(
    viewport: &Viewport,
    layers: &[GridLayer],
    width: f32,
    height: f32,
) -> Vec<GridLayerVisual> {
    layers
        .iter()
        .filter_map(|layer| {
            let spacing = layer.spacing * viewport.grid_zoom();
            let phase = viewport.grid_phase(spacing);
            let commands = generate_grid_commands(width, height, spacing, phase);
            if commands.is_empty() {
                return None;
            }
            Some(GridLayerVisual {
                spacing,
                opacity: layer.opacity,
                commands,
            })
        })
        .collect()
}
