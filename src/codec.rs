//! Scaled-byte encodings for wind data.
//!
//! Wind components are stored as signed quantities mapped onto `1..=255`
//! with 128 as zero; byte 0 is left to upstream producers as "not
//! available". Wind speed magnitudes use the full `0..=255` range.
//! Rounding is ties-to-even throughout.

use ndarray::{Array2, Zip};

/// Max wind speed that we encode (m/s)
pub const MAX_WIND_SPEED: f64 = 25.0;

/// Scale a value in `[-max_value, max_value]` into `1..=255`.
///
/// Values outside the range saturate to 1 or 255. This never emits 0.
pub fn encode_to_scaled_byte(raw: f64, max_value: f64) -> u8 {
    let scaled = 127.0 * (raw / max_value).clamp(-1.0, 1.0) + 128.0;
    scaled.round_ties_even() as u8
}

/// Inverse of [`encode_to_scaled_byte`], up to rounding loss.
///
/// Byte 0 is not special-cased and decodes to `-max_value * 128 / 127`.
pub fn decode_from_scaled_byte(byte: u8, max_value: f64) -> f64 {
    max_value * (f64::from(byte) - 128.0) / 127.0
}

/// Scale a magnitude in `[0, max_value]` into `0..=255`, saturating outside.
pub fn encode_magnitude_to_scaled_byte(magnitude: f64, max_value: f64) -> u8 {
    let scaled = 255.0 * (magnitude / max_value).clamp(0.0, 1.0);
    scaled.round_ties_even() as u8
}

pub fn encode_wind(raw: f64) -> u8 {
    encode_to_scaled_byte(raw, MAX_WIND_SPEED)
}

pub fn decode_wind(byte: u8) -> f64 {
    decode_from_scaled_byte(byte, MAX_WIND_SPEED)
}

pub fn encode_wind_magnitude(magnitude: f64) -> u8 {
    encode_magnitude_to_scaled_byte(magnitude, MAX_WIND_SPEED)
}

/// Decode a grid of wind component bytes into m/s
pub fn decode_wind_grid(bytes: &Array2<u8>) -> Array2<f64> {
    bytes.mapv(decode_wind)
}

/// Per-cell Euclidean norm of two component grids of identical shape
pub fn wind_magnitude(u: &Array2<f64>, v: &Array2<f64>) -> Array2<f64> {
    Zip::from(u)
        .and(v)
        .map_collect(|&u, &v| (u * u + v * v).sqrt())
}

/// Encode a grid of wind speeds (m/s) into magnitude bytes
pub fn encode_magnitude_grid(magnitude: &Array2<f64>) -> Array2<u8> {
    magnitude.mapv(encode_wind_magnitude)
}
