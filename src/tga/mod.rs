//! Minimal Targa codec: uncompressed true-color, 24 bits per pixel, gray values only.
//!
//! Rows are stored bottom-to-top, so the first row of the file is the last row of the field.

use {
  crate::{
    buffer::IntensityBuffer,
    error::Result
  },
  anyhow::{bail, Context},
  euclid::Size2D,
  std::{
    fs::File,
    io::Write,
    path::Path
  }
};

pub const HEADER_LEN: usize = 18;
pub const IMAGE_TYPE_TRUE_COLOR: u8 = 2;
pub const BITS_PER_PIXEL: u8 = 24;
const CHANNELS: usize = 3;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TgaHeader {
  pub image_type: u8,
  pub width: u16,
  pub height: u16,
  pub bits_per_pixel: u8
}

impl TgaHeader {
  pub fn gray(width: u16, height: u16) -> Self {
    Self {
      image_type: IMAGE_TYPE_TRUE_COLOR,
      width,
      height,
      bits_per_pixel: BITS_PER_PIXEL
    }
  }

  /// All fields not represented here (id length, color map, origin, descriptor) are zero.
  pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
    let mut header = [0; HEADER_LEN];
    header[2] = self.image_type;
    header[12..14].copy_from_slice(&self.width.to_le_bytes());
    header[14..16].copy_from_slice(&self.height.to_le_bytes());
    header[16] = self.bits_per_pixel;
    header
  }

  pub fn parse(bytes: &[u8]) -> Result<Self> {
    if bytes.len() < HEADER_LEN {
      bail!("truncated TGA header: {} bytes", bytes.len())
    }
    if bytes[0] != 0 || bytes[1] != 0 {
      bail!("TGA image id and color map are not supported")
    }
    let header = Self {
      image_type: bytes[2],
      width: u16::from_le_bytes([bytes[12], bytes[13]]),
      height: u16::from_le_bytes([bytes[14], bytes[15]]),
      bits_per_pixel: bytes[16]
    };
    if header.image_type != IMAGE_TYPE_TRUE_COLOR {
      bail!("unsupported TGA image type {}", header.image_type)
    }
    if header.bits_per_pixel != BITS_PER_PIXEL {
      bail!("unsupported TGA pixel depth {}", header.bits_per_pixel)
    }
    Ok(header)
  }

  pub fn file_len(&self) -> usize {
    HEADER_LEN + self.width as usize * self.height as usize * CHANNELS
  }
}

fn header_for(buffer: &IntensityBuffer) -> Result<TgaHeader> {
  let width = u16::try_from(buffer.width())
    .with_context(|| format!("width {} does not fit into a TGA header", buffer.width()))?;
  let height = u16::try_from(buffer.height())
    .with_context(|| format!("height {} does not fit into a TGA header", buffer.height()))?;
  Ok(TgaHeader::gray(width, height))
}

/// Length of the file [`encode`] produces for `buffer`.
pub fn encoded_len(buffer: &IntensityBuffer) -> usize {
  HEADER_LEN + buffer.width() as usize * buffer.height() as usize * CHANNELS
}

/// Header followed by bottom-up rows of `[v, v, v]` triples.
pub fn encode(buffer: &IntensityBuffer) -> Result<Vec<u8>> {
  let header = header_for(buffer)?;
  let mut bytes = Vec::with_capacity(encoded_len(buffer));
  bytes.extend_from_slice(&header.to_bytes());
  buffer.flipped_rows()
    .flat_map(|row| row.iter())
    .for_each(|&value| bytes.extend_from_slice(&[value; CHANNELS]));
  Ok(bytes)
}

/// Encode `buffer` and write it to `path`, replacing any existing file.
pub fn write(path: impl AsRef<Path>, buffer: &IntensityBuffer) -> Result<()> {
  let path = path.as_ref();
  let bytes = encode(buffer)?;
  File::create(path)
    .with_context(|| format!("creating {}", path.display()))?
    .write_all(&bytes)
    .with_context(|| format!("writing {}", path.display()))
}

/// Read back a file produced by [`encode`].
pub fn decode(bytes: &[u8]) -> Result<IntensityBuffer> {
  let header = TgaHeader::parse(bytes)?;
  if bytes.len() != header.file_len() {
    bail!("TGA body has {} bytes, expected {}", bytes.len() - HEADER_LEN, header.file_len() - HEADER_LEN)
  }
  let size = Size2D::new(header.width as u32, header.height as u32);
  let width = header.width as usize;
  if width == 0 {
    return IntensityBuffer::from_raw(size, vec![]);
  }
  let rows = bytes[HEADER_LEN..]
    .chunks_exact(width * CHANNELS)
    .rev();

  let mut data = Vec::with_capacity(width * header.height as usize);
  for row in rows {
    for pixel in row.chunks_exact(CHANNELS) {
      if pixel.iter().any(|&c| c != pixel[0]) {
        bail!("pixel {:?} is not gray", pixel)
      }
      data.push(pixel[0]);
    }
  }
  IntensityBuffer::from_raw(size, data)
}

pub fn read(path: impl AsRef<Path>) -> Result<IntensityBuffer> {
  let path = path.as_ref();
  let bytes = std::fs::read(path)
    .with_context(|| format!("reading {}", path.display()))?;
  decode(&bytes)
}

#[cfg(test)] mod tests;
