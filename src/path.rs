use crate::geometry::midpoint;

/// Cubic bezier describing one drawn connection.
///
/// `p0` is the input anchor's center and `p1` the output anchor's center.
/// The control points extend horizontally by a fixed offset: `c0` to the
/// left of the input, `c1` to the right of the output, so the curve leaves
/// an output rightwards and enters an input from the left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectionCurve {
    pub p0: (f32, f32),
    pub c0: (f32, f32),
    pub c1: (f32, f32),
    pub p1: (f32, f32),
}

impl ConnectionCurve {
    /// Build the curve between an input center and an output center.
    ///
    /// # Arguments
    /// * `input` - Center of the input anchor
    /// * `output` - Center of the output anchor
    /// * `offset` - Horizontal control point offset (not scaled by zoom)
    pub fn between(input: (f32, f32), output: (f32, f32), offset: f32) -> Self {
        Self {
            p0: input,
            c0: (input.0 - offset, input.1),
            c1: (output.0 + offset, output.1),
            p1: output,
        }
    }

    /// Midpoint of the two endpoints, where the delete handle sits.
    pub fn endpoint_midpoint(&self) -> (f32, f32) {
        midpoint(self.p0, self.p1)
    }

    /// Evaluate the curve at parameter t (0.0 to 1.0)
    pub fn eval(&self, t: f32) -> (f32, f32) {
        let t2 = t * t;
        let t3 = t2 * t;
        let mt = 1.0 - t;
        let mt2 = mt * mt;
        let mt3 = mt2 * mt;

        let x = mt3 * self.p0.0
            + 3.0 * mt2 * t * self.c0.0
            + 3.0 * mt * t2 * self.c1.0
            + t3 * self.p1.0;
        let y = mt3 * self.p0.1
            + 3.0 * mt2 * t * self.c0.1
            + 3.0 * mt * t2 * self.c1.1
            + t3 * self.p1.1;

        (x, y)
    }

    /// SVG path command for a Slint `Path` element.
    ///
    /// # Returns
    /// SVG path command string (e.g., "M 10 20 C -40 20 190 80 140 80")
    pub fn to_svg_path(&self) -> String {
        format!(
            "M {} {} C {} {} {} {} {} {}",
            self.p0.0, self.p0.1, self.c0.0, self.c0.1, self.c1.0, self.c1.1, self.p1.0, self.p1.1
        )
    }
}

/// Generate SVG path command for a connection between two anchor centers
///
/// Convenience wrapper around [`ConnectionCurve::between`].
pub fn generate_connection_path(input: (f32, f32), output: (f32, f32), offset: f32) -> String {
    ConnectionCurve::between(input, output, offset).to_svg_path()
}
