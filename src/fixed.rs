// this_file: src/fixed.rs

//! Fixed-point position conversion.
//!
//! The shaping engine reports positions in a fixed-point unit with 8
//! fractional bits: the shaping scale is set to `to_fixed(pixel_size)`, so
//! one pixel is 256 units. Conversion back to float pixels is exact for
//! integral fixed values and loses at most 1/256 px otherwise.

/// Fixed-point units per pixel.
pub const UNITS_PER_PIXEL: f32 = 256.0;

/// Convert an engine fixed-point position to float pixels.
#[inline]
pub fn to_float(v: i32) -> f32 {
    v as f32 / UNITS_PER_PIXEL
}

/// Convert float pixels to the engine's fixed-point unit.
#[inline]
pub fn to_fixed(v: f32) -> i32 {
    (v * UNITS_PER_PIXEL) as i32
}
