use {
  crate::geometry::P2,
};

/// Signed distance function
pub trait SDF<T> {
  fn sdf(&self, pixel: P2<T>) -> T;
}

impl <F> SDF<f64> for F where F: Fn(P2<f64>) -> f64 {
  fn sdf(&self, pixel: P2<f64>) -> f64 {
    self(pixel)
  }
}

