use crate::codec::{decode_wind_grid, encode_magnitude_grid, wind_magnitude};
use crate::config::RunConfig;
use crate::error::{Result, WindGridError};
use crate::geometry::{area_extent, compute_target_size};
use crate::io::{read_component_image, write_magnitude_image};
use crate::resample::{resample_nearest, AreaDefinition};
use log::info;
use ndarray::Array2;
use std::path::PathBuf;

/// Value given to target cells outside the source area (m/s)
const FILL_VALUE: f64 = 0.0;

/// Read both component images, compute wind speed, regrid it onto the
/// target area and write it out. Returns the output path.
///
/// Nothing is written unless every preceding step succeeds.
pub fn process(config: &RunConfig) -> Result<PathBuf> {
    let u_data = read_component_image(&config.u_file, "u-component")?;
    let v_data = read_component_image(&config.v_file, "v-component")?;

    if u_data.dim() != v_data.dim() {
        return Err(WindGridError::ShapeMismatch {
            u: u_data.dim(),
            v: v_data.dim(),
        });
    }

    let speed = wind_magnitude(&decode_wind_grid(&u_data), &decode_wind_grid(&v_data));
    let resampled = resample(config, &speed)?;
    let encoded = encode_magnitude_grid(&resampled);

    write_magnitude_image(&config.o_file, &encoded)?;
    info!("Wrote wind speed magnitude to {}", config.o_file.display());
    Ok(config.o_file.clone())
}

/// Fit the wind speed grid to the target area, rescaling its resolution
pub fn resample(config: &RunConfig, speed: &Array2<f64>) -> Result<Array2<f64>> {
    let (height, width) = speed.dim();
    let source = AreaDefinition::new(
        "source",
        &config.projection,
        width,
        height,
        area_extent(config.source_area, Some([0.0, 0.0])),
    )?;

    let (target_height, target_width) = compute_target_size((height, width), config.rescale);
    let target = AreaDefinition::new(
        "target",
        &config.projection,
        target_width,
        target_height,
        area_extent(config.target_area, config.target_offset),
    )?;

    resample_nearest(speed, &source, &target, FILL_VALUE, config.nprocs)
}
