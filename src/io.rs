use crate::error::{Result, WindGridError};
use image::{GrayImage, ImageFormat, ImageReader};
use log::{debug, info};
use ndarray::Array2;
use std::path::Path;

/// Read a component image as 8-bit grayscale, shaped `(height, width)`.
///
/// `label` names the component in the error raised when the file cannot
/// be opened. Colour or 16-bit inputs are coerced to 8-bit luma.
pub fn read_component_image(path: &Path, label: &'static str) -> Result<Array2<u8>> {
    info!("Reading {} image: {}", label, path.display());
    let reader = ImageReader::open(path).map_err(|source| WindGridError::InputFile {
        label,
        path: path.to_path_buf(),
        source,
    })?;

    let image = reader.with_guessed_format()?.decode()?.into_luma8();
    let (width, height) = image.dimensions();
    let (width, height) = (width as usize, height as usize);

    if width == 0 || height == 0 {
        return Err(WindGridError::InvalidDimensions(width, height));
    }

    debug!("{} dimensions: {}x{}", label, width, height);
    Ok(Array2::from_shape_vec((height, width), image.into_raw())?)
}

/// Write a byte grid as an 8-bit grayscale PNG
pub fn write_magnitude_image(path: &Path, grid: &Array2<u8>) -> Result<()> {
    let (height, width) = grid.dim();
    info!("Writing {}x{} output image: {}", width, height, path.display());

    // Row-major iteration regardless of memory layout
    let pixels: Vec<u8> = grid.iter().copied().collect();
    let image = GrayImage::from_raw(width as u32, height as u32, pixels)
        .ok_or(WindGridError::InvalidDimensions(width, height))?;

    image.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr2;

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("grid.png");
        let grid = arr2(&[[0u8, 64, 128], [192, 255, 1]]);

        write_magnitude_image(&path, &grid).unwrap();
        let read = read_component_image(&path, "u-component").unwrap();
        assert_eq!(read, grid);
    }

    #[test]
    fn test_missing_file_is_labelled() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("missing.png");

        let err = read_component_image(&path, "v-component").unwrap_err();
        assert!(matches!(
            err,
            WindGridError::InputFile {
                label: "v-component",
                ..
            }
        ));
        assert!(err.to_string().contains("v-component image file not found"));
    }

    #[test]
    fn test_rgb_input_coerced_to_luma() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("rgb.png");
        let rgb = image::RgbImage::from_pixel(3, 2, image::Rgb([128, 128, 128]));
        rgb.save_with_format(&path, ImageFormat::Png).unwrap();

        let read = read_component_image(&path, "u-component").unwrap();
        assert_eq!(read.dim(), (2, 3));
        assert!(read.iter().all(|&b| b == 128));
    }

    #[test]
    fn test_non_image_file_rejected() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("junk.png");
        std::fs::write(&path, b"not a png").unwrap();

        let err = read_component_image(&path, "u-component").unwrap_err();
        assert!(matches!(err, WindGridError::Image(_)));
    }
}
