//! Distance-field rasterizer.
//!
//! Each pixel stores `floor((1 - d / scaling) * color_value_factor)`, where `d` is the signed
//! distance from the pixel to the arc. With the default parameters the distance is measured from
//! the corner `(size, size)`, so the quarter circle of radius `size / 2` around that corner is the
//! arc boundary.

use {
  crate::{
    buffer::IntensityBuffer,
    geometry::{P2, PixelSpace},
    params::Params,
    sdf::SDF
  },
  euclid::Size2D
};

/// Unquantized intensity of a pixel, given its signed distance to the arc.
pub fn intensity(params: &Params, distance: f64) -> f64 {
  (1.0 - distance / params.distance_scaling_factor) * params.color_value_factor
}

/// Raw byte of a single pixel.
pub fn raw_value(params: &Params, pixel: P2<u32>) -> u8 {
  let distance = params.circle().sdf(pixel.to_f64());
  params.truncation.apply(intensity(params, distance))
}

/// Rasterize the default arc described by `params`.
pub fn rasterize(params: &Params) -> IntensityBuffer {
  rasterize_sdf(params, &params.circle())
}

/// Rasterize an arbitrary signed distance function with the scaling of `params`.
pub fn rasterize_sdf<S>(params: &Params, shape: &S) -> IntensityBuffer
  where S: SDF<f64> + Sync
{
  let size: Size2D<u32, PixelSpace> = Size2D::splat(params.size);
  let (buffer, wrapped) = IntensityBuffer::from_fn_counted(size, |pixel| {
    let distance = shape.sdf(pixel.to_f64());
    params.truncation.quantize(intensity(params, distance))
  });
  log::debug!("distance field: {:?}, {} pixels out of byte range ({:?})",
    buffer, wrapped, params.truncation);
  buffer
}
