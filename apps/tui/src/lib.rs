// Export our modules for use in binaries and tests
pub mod chart;
pub mod config;
pub mod dataset;
pub mod domain;
pub mod error;
pub mod resize;
pub mod selection;
pub mod viewport;

#[cfg(test)]
mod test_support;

pub use chart::ChartState;
pub use dataset::{DataSource, DatasetStore};
pub use domain::{Attribute, Record};
pub use error::{ChartError, LoadError};
pub use viewport::{Viewport, ViewportProvider};
