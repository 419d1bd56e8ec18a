use crate::error::{Result, WindGridError};
use crate::geometry::Extent;
use log::{debug, info};
use ndarray::Array2;
use rayon::prelude::*;

/// A projected grid: `width` x `height` pixels covering `extent`.
///
/// Row 0 lies along the northern (`ymax`) edge.
#[derive(Debug, Clone, PartialEq)]
pub struct AreaDefinition {
    pub name: String,
    pub projection: String,
    pub width: usize,
    pub height: usize,
    pub extent: Extent,
}

impl AreaDefinition {
    pub fn new(
        name: &str,
        projection: &str,
        width: usize,
        height: usize,
        extent: Extent,
    ) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(WindGridError::InvalidDimensions(width, height));
        }
        Ok(Self {
            name: name.to_string(),
            projection: projection.to_string(),
            width,
            height,
            extent,
        })
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub fn pixel_size_x(&self) -> f64 {
        self.extent.width() / self.width as f64
    }

    pub fn pixel_size_y(&self) -> f64 {
        self.extent.height() / self.height as f64
    }

    /// Projected coordinates of the centre of pixel `(row, col)`
    pub fn pixel_center(&self, row: usize, col: usize) -> (f64, f64) {
        let x = self.extent.xmin + (col as f64 + 0.5) * self.pixel_size_x();
        let y = self.extent.ymax - (row as f64 + 0.5) * self.pixel_size_y();
        (x, y)
    }

    /// Pixel `(row, col)` containing projected point `(x, y)`, if any
    pub fn pixel_index(&self, x: f64, y: f64) -> Option<(usize, usize)> {
        let col = ((x - self.extent.xmin) / self.pixel_size_x()).floor();
        let row = ((self.extent.ymax - y) / self.pixel_size_y()).floor();

        if !(0.0..self.width as f64).contains(&col) || !(0.0..self.height as f64).contains(&row) {
            return None;
        }
        Some((row as usize, col as usize))
    }
}

/// Nearest-neighbour resample of `data` from `source` onto `target`.
///
/// Target pixels whose centre falls outside the source grid get `fill`.
/// Rows are processed on a dedicated pool of `workers` threads.
pub fn resample_nearest(
    data: &Array2<f64>,
    source: &AreaDefinition,
    target: &AreaDefinition,
    fill: f64,
    workers: usize,
) -> Result<Array2<f64>> {
    if data.dim() != source.shape() {
        return Err(WindGridError::AreaShapeMismatch {
            data: data.dim(),
            area: source.shape(),
        });
    }
    if source.projection != target.projection {
        return Err(WindGridError::ProjectionMismatch {
            source_proj: source.projection.clone(),
            target_proj: target.projection.clone(),
        });
    }

    info!(
        "Resampling {} ({}x{}) onto {} ({}x{}) with {} workers",
        source.name, source.width, source.height, target.name, target.width, target.height, workers
    );
    debug!(
        "Source extent {:?}, target extent {:?}, projection '{}'",
        source.extent.to_array(),
        target.extent.to_array(),
        source.projection
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()?;

    let (nrows, ncols) = target.shape();
    let rows: Vec<Vec<f64>> = pool.install(|| {
        (0..nrows)
            .into_par_iter()
            .map(|row| {
                (0..ncols)
                    .map(|col| {
                        let (x, y) = target.pixel_center(row, col);
                        match source.pixel_index(x, y) {
                            Some(index) => data[index],
                            None => fill,
                        }
                    })
                    .collect()
            })
            .collect()
    });

    let flat_data: Vec<f64> = rows.into_iter().flatten().collect();
    Ok(Array2::from_shape_vec((nrows, ncols), flat_data)?)
}
