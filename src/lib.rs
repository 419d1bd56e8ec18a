// Library exports for testing and reuse

pub mod cli;
pub mod codec;
pub mod config;
pub mod error;
pub mod geometry;
pub mod io;
pub mod pipeline;
pub mod resample;

// Re-export commonly used types
pub use config::{RunConfig, Units};
pub use error::{Result, WindGridError};
pub use geometry::{area_extent, compute_target_size, Extent};
pub use pipeline::process;
pub use resample::{resample_nearest, AreaDefinition};
