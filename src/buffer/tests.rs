use {
  super::*,
  crate::error::Result
};

fn gradient(width: u32, height: u32) -> IntensityBuffer {
  IntensityBuffer::from_fn(Size2D::new(width, height), |p| (p.y * width + p.x) as u8)
}

#[test] fn from_fn_is_row_major() {
  let buffer = gradient(4, 3);
  assert_eq!(buffer.as_raw(), &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]);
  assert_eq!(buffer.get(P2::new(1, 2)), Some(9));
  assert_eq!(buffer.get(P2::new(4, 0)), None);
  assert_eq!(buffer.get(P2::new(0, 3)), None);
}

#[test] fn dimensions() {
  let buffer = gradient(4, 3);
  assert_eq!((buffer.width(), buffer.height()), (4, 3));
  assert_eq!(buffer.size(), Size2D::new(4, 3));
}

#[test] fn counted_fill() {
  let (buffer, flagged) = IntensityBuffer::from_fn_counted(Size2D::new(5, 4), |p| {
    let v = p.y * 5 + p.x;
    (v as u8, v % 3 == 0)
  });
  assert_eq!(buffer, gradient(5, 4));
  assert_eq!(flagged, 7);

  let (mapped, flagged) = buffer.map_counted(|v| (v * 2, v > 15));
  assert_eq!(mapped.get(P2::new(4, 3)), Some(38));
  assert_eq!(flagged, 4);
}

#[test] fn rows() {
  let buffer = gradient(4, 3);
  assert_eq!(buffer.row(1), Some(&[4u8, 5, 6, 7][..]));
  assert_eq!(buffer.row(3), None);
  let flipped: Vec<_> = buffer.flipped_rows().collect();
  assert_eq!(flipped, vec![&[8u8, 9, 10, 11][..], &[4, 5, 6, 7][..], &[0, 1, 2, 3][..]]);
}

#[test] fn pixels_match_get() {
  let buffer = gradient(5, 7);
  assert_eq!(buffer.pixels().count(), 35);
  buffer.pixels().for_each(|(p, v)| assert_eq!(buffer.get(p), Some(v)));
}

#[test] fn map_preserves_size() {
  let buffer = gradient(3, 2).map(|v| v.wrapping_mul(100));
  assert_eq!(buffer.size(), Size2D::new(3, 2));
  assert_eq!(buffer.as_raw(), &[0, 100, 200, 44, 144, 244]);
}

#[test] fn from_raw_checks_length() -> Result<()> {
  let buffer = IntensityBuffer::from_raw(Size2D::new(2, 2), vec![1, 2, 3, 4])?;
  assert_eq!(buffer.into_raw(), vec![1, 2, 3, 4]);
  assert!(IntensityBuffer::from_raw(Size2D::new(2, 2), vec![1, 2, 3]).is_err());
  Ok(())
}

#[test] fn empty() {
  let buffer = IntensityBuffer::from_fn(Size2D::new(0, 0), |_| 1);
  assert!(buffer.as_raw().is_empty());
  assert_eq!(buffer.flipped_rows().count(), 0);
}

#[test] fn debug_summary() {
  let buffer = gradient(4, 3);
  assert_eq!(
    format!("{:?}", buffer),
    "IntensityBuffer { width: 4, height: 3, min: 0, max: 11 }"
  );
}

#[cfg(feature = "drawing")]
#[test] fn to_image() {
  let image = gradient(4, 3).to_image();
  assert_eq!(image.dimensions(), (4, 3));
  assert_eq!(image.get_pixel(1, 2).0, [9]);
}
