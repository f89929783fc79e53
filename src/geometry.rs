//! .
//!
//! The origin of coordinate system is in top-left corner, one unit per pixel.

use {
  euclid::{Point2D, Size2D},
  crate::sdf::SDF
};

/// Pixel coordinate basis
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PixelSpace;

pub type P2<T> = Point2D<T, PixelSpace>;

/// Circle whose boundary is the arc, measured in pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circle {
  pub center: P2<f64>,
  pub radius: f64
}

impl Circle {
  pub fn new(center: P2<f64>, radius: f64) -> Self {
    Self { center, radius }
  }
}

impl SDF<f64> for Circle {
  /// Negative inside the circle, positive outside.
  fn sdf(&self, pixel: P2<f64>) -> f64 {
    (self.center - pixel).length() - self.radius
  }
}

/// Iterates pixel coordinates in row-major order.
pub fn pixels(size: Size2D<u32, PixelSpace>) -> impl Iterator<Item = P2<u32>> {
  itertools::iproduct!(0..size.height, 0..size.width)
    .map(|(y, x)| P2::new(x, y))
}
