use serde::Serialize;

/// Size of the drawing surface, in the surface's own units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Anything that can report the current size of the chart surface.
pub trait ViewportProvider {
    fn viewport(&self) -> Viewport;
}

impl ViewportProvider for Viewport {
    fn viewport(&self) -> Viewport {
        *self
    }
}
