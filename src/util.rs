/// Time an expression, log the elapsed milliseconds at `info` level and return its value.
#[macro_export]
macro_rules! profile(
  ($title: literal, $expr: expr) => {{
    let t0 = std::time::Instant::now();
    let ret = $expr;
    log::info!("{} profile: {}ms", $title, t0.elapsed().as_millis());
    ret
  }}
);

/// Human-readable byte count, e.g. `768 KiB`.
pub fn file_size(bytes: usize) -> String {
  use humansize::{FileSize, file_size_opts as options};

  bytes.file_size(options::BINARY)
    .unwrap_or_else(|e| e)
}
