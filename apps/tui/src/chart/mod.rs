// Radar chart engine: scales, geometry, curve, transitions and the drawn elements

pub mod curve;
pub mod geometry;
pub mod renderer;
pub mod scale;
pub mod state;
pub mod svg;
pub mod transition;

pub use geometry::{point_for, Point};
pub use renderer::{ChartRenderer, LayoutStyle, Redraw, VisualElements};
pub use scale::{Margins, Scales};
pub use state::ChartState;
