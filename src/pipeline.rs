use {
  crate::{
    buffer::IntensityBuffer,
    error::Result,
    field,
    params::Params,
    profile,
    remap,
    tga,
    util
  },
  std::path::{Path, PathBuf}
};

/// File name of the stock texture, relative to the working directory.
pub const OUTPUT_PATH: &str = "arc-distance-field.tga";

/// Both stages of a generated field.
#[derive(Debug, Clone)]
pub struct ArcDistanceField {
  pub params: Params,
  /// Output of the rasterizer.
  pub raw: IntensityBuffer,
  /// Output of the Gaussian remapper; this is what gets encoded.
  pub blurred: IntensityBuffer
}

impl ArcDistanceField {
  pub fn generate(params: Params) -> Result<Self> {
    params.validate()?;
    let raw = profile!("rasterize", field::rasterize(&params));
    let blurred = profile!("remap", remap::remap(&params, &raw));
    Ok(Self { params, raw, blurred })
  }

  pub fn to_tga(&self) -> Result<Vec<u8>> {
    tga::encode(&self.blurred)
  }

  pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    profile!("write", tga::write(path, &self.blurred))?;
    log::info!("wrote {} ({})", path.display(), util::file_size(tga::encoded_len(&self.blurred)));
    Ok(())
  }

  /// Dump the field before the Gaussian remap, for inspection.
  pub fn write_raw(&self, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    tga::write(path, &self.raw)?;
    log::info!("wrote {} ({})", path.display(), util::file_size(tga::encoded_len(&self.raw)));
    Ok(())
  }
}

/// Generate the stock texture into `dir`, as [`OUTPUT_PATH`]. Returns the written path.
pub fn generate_into(dir: impl AsRef<Path>) -> Result<PathBuf> {
  let path = dir.as_ref().join(OUTPUT_PATH);
  ArcDistanceField::generate(Params::default())?
    .write(&path)?;
  Ok(path)
}

/// Generate the stock texture into [`OUTPUT_PATH`] in the working directory.
pub fn generate_default() -> Result<()> {
  generate_into("").map(|_| ())
}
