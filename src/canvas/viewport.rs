/// Canvas transform.  Pan and zoom are not interactive, so this stays the
/// identity; it is still a value so the renderer has one place to read it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale: 1.0,
        }
    }
}

impl Viewport {
    pub fn css_transform(&self) -> String {
        format!("translate({}px, {}px) scale({})", self.x, self.y, self.scale)
    }

    /// Screen (canvas-relative) to world coordinates.
    pub fn to_world(&self, x: f64, y: f64) -> (f64, f64) {
        ((x - self.x) / self.scale, (y - self.y) / self.scale)
    }
}
