use {
  crate::{
    error::Result,
    geometry::{self, PixelSpace, P2}
  },
  anyhow::bail,
  euclid::Size2D,
  rayon::prelude::*
};

/// Row-major grid of 8-bit intensities.
#[derive(Clone, PartialEq, Eq)]
pub struct IntensityBuffer {
  size: Size2D<u32, PixelSpace>,
  data: Vec<u8>
}

impl IntensityBuffer {
  pub fn new(size: Size2D<u32, PixelSpace>) -> Self {
    Self {
      size,
      data: vec![0; area(size)]
    }
  }

  pub fn from_raw(size: Size2D<u32, PixelSpace>, data: Vec<u8>) -> Result<Self> {
    if data.len() != area(size) {
      bail!("buffer of {} bytes does not match a {}x{} field", data.len(), size.width, size.height)
    }
    Ok(Self { size, data })
  }

  /// Evaluate `f` once per pixel, rows in parallel.
  pub fn from_fn<F>(size: Size2D<u32, PixelSpace>, f: F) -> Self
    where F: Fn(P2<u32>) -> u8 + Send + Sync
  {
    Self::from_fn_counted(size, |pixel| (f(pixel), false)).0
  }

  /// Like [`from_fn`](Self::from_fn), also counting the pixels for which `f` raised the flag.
  pub fn from_fn_counted<F>(size: Size2D<u32, PixelSpace>, f: F) -> (Self, usize)
    where F: Fn(P2<u32>) -> (u8, bool) + Send + Sync
  {
    let mut buffer = Self::new(size);
    if buffer.data.is_empty() { return (buffer, 0); }
    let flagged: usize = buffer.data
      .par_chunks_mut(size.width as usize)
      .enumerate()
      .map(|(y, row)| row
        .iter_mut()
        .enumerate()
        .map(|(x, value)| {
          let (v, flag) = f(P2::new(x as u32, y as u32));
          *value = v;
          flag
        })
        .filter(|&flag| flag)
        .count())
      .sum();
    (buffer, flagged)
  }

  /// Apply `f` to every value of `self`, producing a buffer of the same size.
  pub fn map<F>(&self, f: F) -> Self
    where F: Fn(u8) -> u8 + Send + Sync
  {
    self.map_counted(|value| (f(value), false)).0
  }

  /// Like [`map`](Self::map), also counting the values for which `f` raised the flag.
  pub fn map_counted<F>(&self, f: F) -> (Self, usize)
    where F: Fn(u8) -> (u8, bool) + Send + Sync
  {
    let (data, flags): (Vec<u8>, Vec<bool>) = self.data.par_iter()
      .map(|&value| f(value))
      .unzip();
    (Self { size: self.size, data }, flags.into_iter().filter(|&flag| flag).count())
  }

  pub fn size(&self) -> Size2D<u32, PixelSpace> { self.size }
  pub fn width(&self) -> u32 { self.size.width }
  pub fn height(&self) -> u32 { self.size.height }

  pub fn get(&self, point: P2<u32>) -> Option<u8> {
    if point.x >= self.size.width || point.y >= self.size.height {
      return None;
    }
    self.data.get(point.y as usize * self.size.width as usize + point.x as usize).copied()
  }

  pub fn row(&self, y: u32) -> Option<&[u8]> {
    if y >= self.size.height { return None; }
    let width = self.size.width as usize;
    let start = y as usize * width;
    Some(&self.data[start .. start + width])
  }

  /// Rows from the bottom of the image to the top.
  pub fn flipped_rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
    (0..self.size.height).rev()
      .filter_map(move |y| self.row(y))
  }

  pub fn pixels(&self) -> impl Iterator<Item = (P2<u32>, u8)> + '_ {
    geometry::pixels(self.size)
      .zip(self.data.iter().copied())
  }

  pub fn as_raw(&self) -> &[u8] { &self.data }
  pub fn into_raw(self) -> Vec<u8> { self.data }
}

impl std::fmt::Debug for IntensityBuffer {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let (min, max) = self.data.iter()
      .fold((u8::MAX, u8::MIN), |(min, max), &v| (min.min(v), max.max(v)));
    f.debug_struct("IntensityBuffer")
      .field("width", &self.size.width)
      .field("height", &self.size.height)
      .field("min", &min)
      .field("max", &max)
      .finish()
  }
}

fn area(size: Size2D<u32, PixelSpace>) -> usize {
  size.width as usize * size.height as usize
}

#[cfg(feature = "drawing")]
#[cfg_attr(docsrs, doc(cfg(feature = "drawing")))]
impl IntensityBuffer {
  pub fn to_image(&self) -> image::GrayImage {
    image::GrayImage::from_fn(self.size.width, self.size.height, |x, y| {
      image::Luma([self.data[y as usize * self.size.width as usize + x as usize]])
    })
  }

  /// Save as PNG (or whatever the extension of `path` selects).
  pub fn save_preview(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
    use anyhow::Context;

    let path = path.as_ref();
    self.to_image()
      .save(path)
      .with_context(|| format!("saving preview to {}", path.display()))
  }
}

#[cfg(test)] mod tests;
