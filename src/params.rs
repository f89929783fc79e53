//! Generator parameters.
//!
//! [`Params::default`] reproduces the fixed constants of the stock texture: a 512x512 field,
//! measured from the corner `(512, 512)` against a radius of 256, remapped through a Gaussian with
//! `σ = √0.02`.

use {
  crate::{
    error::Result,
    geometry::{Circle, P2}
  },
  anyhow::bail,
  num_traits::Float,
  std::f64::consts::{PI, SQRT_2}
};

/// How a floored pixel value is turned into a byte.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Truncation {
  /// Keep the low 8 bits, so 256 becomes 0 and -1 becomes 255.
  /// Values that do not fit into `i64` (and NaN) become 0.
  Wrap,
  /// Clamp into `0..=255`.
  Saturate
}

impl Truncation {
  pub fn apply<F: Float>(self, value: F) -> u8 {
    let value = value.floor();
    match self {
      Truncation::Wrap => value.to_i64()
        .map(|v| (v & 0xff) as u8)
        .unwrap_or(0),
      Truncation::Saturate => value.to_f64()
        .filter(|v| !v.is_nan())
        .map(|v| v.clamp(0.0, 255.0) as u8)
        .unwrap_or(0),
    }
  }

  /// [`apply`](Self::apply) together with [`overflows`](Self::overflows).
  pub fn quantize<F: Float>(self, value: F) -> (u8, bool) {
    (self.apply(value), Self::overflows(value))
  }

  /// Whether [`Truncation::apply`] would change the floored value.
  pub fn overflows<F: Float>(value: F) -> bool {
    let value = value.floor();
    !(value >= F::zero() && value <= F::from(255.0).unwrap_or_else(F::max_value))
  }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Params {
  /// Width and height of the field, in pixels.
  pub size: u32,
  pub radius: f64,
  pub distance_scaling_factor: f64,
  /// Maps a normalized distance of 1.0 to this byte value.
  pub color_value_factor: f64,
  pub sigma: f64,
  /// Point the distance is measured from. Defaults to the bottom-right corner `(size, size)`
  /// rather than the image center.
  pub arc_center: P2<f64>,
  pub truncation: Truncation
}

impl Default for Params {
  fn default() -> Self {
    Self::with_size(512)
  }
}

impl Params {
  pub fn with_size(size: u32) -> Self {
    let side = size as f64;
    Self {
      size,
      radius: side / 2.0,
      distance_scaling_factor: side * SQRT_2,
      color_value_factor: 128.0,
      sigma: 0.02f64.sqrt(),
      arc_center: P2::splat(side),
      truncation: Truncation::Wrap
    }
  }

  /// Measure from the image center instead of the corner.
  /// Changes the output; not bit-compatible with the stock texture.
  pub fn centered(self) -> Self {
    let half = self.size as f64 / 2.0;
    Self { arc_center: P2::splat(half), ..self }
  }

  pub fn with_truncation(self, truncation: Truncation) -> Self {
    Self { truncation, ..self }
  }

  pub fn circle(&self) -> Circle {
    Circle::new(self.arc_center, self.radius)
  }

  pub fn two_sigma_squared(&self) -> f64 {
    2.0 * self.sigma * self.sigma
  }

  /// `1 / (σ√(2π))`, peak height of the Gaussian.
  pub fn gaussian_normalization(&self) -> f64 {
    1.0 / (self.sigma * (2.0 * PI).sqrt())
  }

  pub fn validate(&self) -> Result<()> {
    if self.size == 0 {
      bail!("field size must be non-zero")
    }
    if self.size > u16::MAX as u32 {
      bail!("field size {} does not fit into a TGA header", self.size)
    }
    if !(self.sigma > 0.0 && self.sigma.is_finite()) {
      bail!("sigma must be positive and finite, got {}", self.sigma)
    }
    if !(self.distance_scaling_factor > 0.0 && self.distance_scaling_factor.is_finite()) {
      bail!("distance scaling factor must be positive and finite, got {}",
        self.distance_scaling_factor)
    }
    if !(self.color_value_factor > 0.0 && self.color_value_factor.is_finite()) {
      bail!("color value factor must be positive and finite, got {}", self.color_value_factor)
    }
    Ok(())
  }
}
