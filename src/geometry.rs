//! Area extent and target size arithmetic.
//!
//! All lengths are projected meters.

use log::debug;

/// Rectangle in projected coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub xmin: f64,
    pub ymin: f64,
    pub xmax: f64,
    pub ymax: f64,
}

impl Extent {
    pub fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Self {
        Self {
            xmin,
            ymin,
            xmax,
            ymax,
        }
    }

    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    pub fn to_array(&self) -> [f64; 4] {
        [self.xmin, self.ymin, self.xmax, self.ymax]
    }
}

/// Compute an area extent from a user shape `[width, height]` and offset.
///
/// Half-extents are rounded to whole meters first. Without an offset the
/// rectangle is shifted by `(-w, +h)`, which puts its south-east corner
/// at the origin rather than centring it.
pub fn area_extent(shape: [f64; 2], offset: Option<[f64; 2]>) -> Extent {
    let w = (shape[0] / 2.0).round_ties_even();
    let h = (shape[1] / 2.0).round_ties_even();
    let (dx, dy) = match offset {
        Some([dx, dy]) => (dx, dy),
        None => (-w, h),
    };

    let extent = Extent::new(-w + dx, -h + dy, w + dx, h + dy);
    debug!(
        "Area extent for shape {:?}, offset {:?}: {:?}",
        shape,
        offset,
        extent.to_array()
    );
    extent
}

/// Compute the target image size `(height, width)` for a scale factor.
///
/// A factor of exactly 1 passes the size through; otherwise each dimension
/// is scaled and truncated to whole pixels.
pub fn compute_target_size(source_size: (usize, usize), scale_factor: f64) -> (usize, usize) {
    if scale_factor == 1.0 {
        return source_size;
    }
    let (height, width) = source_size;
    (
        (height as f64 * scale_factor) as usize,
        (width as f64 * scale_factor) as usize,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_extent_default_offset() {
        // w=500, h=250, dx=-500, dy=250
        let extent = area_extent([1000.0, 500.0], None);
        assert_eq!(extent.to_array(), [-1000.0, 0.0, 0.0, 500.0]);
        assert_eq!(extent.width(), 1000.0);
        assert_eq!(extent.height(), 500.0);
    }

    #[test]
    fn test_area_extent_explicit_offset() {
        let extent = area_extent([500.0, 500.0], Some([125.0, -125.0]));
        assert_eq!(extent.to_array(), [-125.0, -375.0, 375.0, 125.0]);
    }

    #[test]
    fn test_area_extent_centred() {
        let extent = area_extent([500.0, 500.0], Some([0.0, 0.0]));
        assert_eq!(extent.to_array(), [-250.0, -250.0, 250.0, 250.0]);
    }

    #[test]
    fn test_area_extent_rounds_half_extents() {
        // 250.5 / 2 = 125.25 -> 125, 5.0 / 2 = 2.5 -> 2
        let extent = area_extent([250.5, 5.0], Some([0.0, 0.0]));
        assert_eq!(extent.to_array(), [-125.0, -2.0, 125.0, 2.0]);
    }

    #[test]
    fn test_compute_target_size_identity() {
        assert_eq!(compute_target_size((100, 200), 1.0), (100, 200));
    }

    #[test]
    fn test_compute_target_size_scaled() {
        assert_eq!(compute_target_size((100, 200), 0.25), (25, 50));
        assert_eq!(compute_target_size((101, 203), 0.5), (50, 101));
        assert_eq!(compute_target_size((100, 200), 0.0), (0, 0));
    }
}
