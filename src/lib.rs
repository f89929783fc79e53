//! Generator for a grayscale arc distance field texture.
//!
//! The texture is produced in three stages:
//! 1. [`field`] rasterizes the distance from every pixel to an arc into an
//!    [`IntensityBuffer`](buffer::IntensityBuffer);
//! 2. [`remap`] passes every value through a Gaussian falloff curve;
//! 3. [`tga`] wraps the result in an uncompressed 24-bit Targa image.
//!
//! # Basic usage
//! ```no_run
//! # use arc_distance_field::{error::Result, params::Params, pipeline::ArcDistanceField};
//! # fn main() -> Result<()> {
//! let field = ArcDistanceField::generate(Params::default())?;
//! field.write("arc-distance-field.tga")?;
//! #   Ok(())
//! # }
//! ```
//!
//! All parameters live in [`Params`](params::Params). The defaults reproduce the stock 512x512
//! texture byte for byte; two of them are worth knowing about:
//! - the distance is measured from the corner `(size, size)`, not from the image center. Use
//!   [`Params::centered`](params::Params::centered) for the centered variant;
//! - values that leave the byte range wrap around modulo 256. The stock texture relies on this
//!   near the corner `(0, 0)`. [`Truncation::Saturate`](params::Truncation::Saturate) clamps
//!   instead.
//!
//! Both stages evaluate rows in parallel, the output does not depend on the number of threads.

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod error;
pub mod util;
pub mod geometry;
pub mod sdf;
pub mod params;
pub mod buffer;
pub mod field;
pub mod remap;
pub mod tga;
pub mod pipeline;
