use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WindGridError {
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Array shape error: {0}")]
    ShapeError(#[from] ndarray::ShapeError),

    #[error("Worker pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("{}: {label} image file not found ({source})", .path.display())]
    InputFile {
        label: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0} is not a valid scale factor (must be within [0, 1])")]
    InvalidScale(f64),

    #[error("--{name} takes exactly two values, got {len}")]
    InvalidPair { name: &'static str, len: usize },

    #[error("{requested} is not a valid number of processors (must be between 1 and {available})")]
    InvalidWorkerCount { requested: usize, available: usize },

    #[error("u/v component shapes differ: u={u:?}, v={v:?} (height, width)")]
    ShapeMismatch {
        u: (usize, usize),
        v: (usize, usize),
    },

    #[error("Grid has invalid dimensions: {0}x{1}")]
    InvalidDimensions(usize, usize),

    #[error("Data shape {data:?} does not match source area {area:?} (height, width)")]
    AreaShapeMismatch {
        data: (usize, usize),
        area: (usize, usize),
    },

    #[error("Source projection '{source_proj}' differs from target projection '{target_proj}'")]
    ProjectionMismatch {
        source_proj: String,
        target_proj: String,
    },
}

pub type Result<T> = std::result::Result<T, WindGridError>;
