//! Gaussian remapper.
//!
//! A raw byte `b` is read back as the offset `b / color_value_factor / 2`, which puts the stock
//! field into `0.0..1.0` (below 0.5 outside the arc, above 0.5 inside), and replaced by
//! `floor(g(offset) * color_value_factor * 2)` where `g` is the normal density with mean 0.

use {
  crate::{
    buffer::IntensityBuffer,
    params::Params
  }
};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GaussianCurve {
  /// Peak height, `1 / (σ√(2π))`.
  pub a: f64,
  pub two_sigma_squared: f64
}

impl GaussianCurve {
  pub fn new(params: &Params) -> Self {
    Self {
      a: params.gaussian_normalization(),
      two_sigma_squared: params.two_sigma_squared()
    }
  }

  pub fn evaluate(&self, distance: f64) -> f64 {
    self.a * (-(distance * distance) / self.two_sigma_squared).exp()
  }
}

/// Normalized offset encoded by a raw byte.
pub fn offset(params: &Params, value: u8) -> f64 {
  value as f64 / params.color_value_factor / 2.0
}

fn remapped_intensity(params: &Params, curve: &GaussianCurve, value: u8) -> f64 {
  curve.evaluate(offset(params, value)) * params.color_value_factor * 2.0
}

pub fn remap_value(params: &Params, curve: &GaussianCurve, value: u8) -> u8 {
  params.truncation.apply(remapped_intensity(params, curve, value))
}

/// Offsets of every pixel of `field`, in row-major order.
pub fn offsets<'a>(params: &'a Params, field: &'a IntensityBuffer) -> impl Iterator<Item = f64> + 'a {
  field.as_raw().iter().map(move |&value| offset(params, value))
}

/// Remap every pixel of the raw field.
pub fn remap(params: &Params, field: &IntensityBuffer) -> IntensityBuffer {
  let curve = GaussianCurve::new(params);
  log::debug!("gaussian: {:?}", curve);

  if log::log_enabled!(log::Level::Trace) {
    offsets(params, field).for_each(|distance| log::trace!("{}", distance));
  }

  let (blurred, wrapped) = field.map_counted(|value| params.truncation
    .quantize(remapped_intensity(params, &curve, value)));
  log::debug!("remapped field: {:?}, {} pixels out of byte range ({:?})",
    blurred, wrapped, params.truncation);
  blurred
}
