use {
  super::*,
  crate::{geometry::P2, tests::temp_path}
};

fn gradient(width: u32, height: u32) -> IntensityBuffer {
  IntensityBuffer::from_fn(Size2D::new(width, height), |p| (p.y * 10 + p.x) as u8)
}

#[test] fn header_layout() {
  let header = TgaHeader::gray(512, 512).to_bytes();
  let mut expected = [0u8; 18];
  expected[2] = 2;
  expected[12] = 0x00;
  expected[13] = 0x02;
  expected[14] = 0x00;
  expected[15] = 0x02;
  expected[16] = 24;
  assert_eq!(header, expected);
  assert_eq!(TgaHeader::gray(512, 512).file_len(), 786_450);
}

#[test] fn parse_header() -> Result<()> {
  let header = TgaHeader::gray(300, 7);
  assert_eq!(TgaHeader::parse(&header.to_bytes())?, header);
  assert!(TgaHeader::parse(&header.to_bytes()[..17]).is_err());

  let mut rle = header.to_bytes();
  rle[2] = 10;
  assert!(TgaHeader::parse(&rle).is_err());

  let mut depth = header.to_bytes();
  depth[16] = 32;
  assert!(TgaHeader::parse(&depth).is_err());
  Ok(())
}

#[test] fn rows_are_flipped() -> Result<()> {
  let buffer = gradient(3, 2);
  let bytes = encode(&buffer)?;
  assert_eq!(bytes.len(), 18 + 3 * 2 * 3);
  assert_eq!(&bytes[18..], &[
    10, 10, 10, 11, 11, 11, 12, 12, 12,
    0, 0, 0, 1, 1, 1, 2, 2, 2
  ][..]);
  Ok(())
}

#[test] fn flip_of_every_pixel() -> Result<()> {
  let buffer = gradient(7, 5);
  let bytes = encode(&buffer)?;
  buffer.pixels().for_each(|(p, v)| {
    let row = (5 - 1 - p.y) as usize;
    let offset = HEADER_LEN + (row * 7 + p.x as usize) * 3;
    assert_eq!(&bytes[offset..offset + 3], &[v, v, v]);
  });
  Ok(())
}

#[test] fn decode_inverts_encode() -> Result<()> {
  let buffer = gradient(9, 4);
  assert_eq!(decode(&encode(&buffer)?)?, buffer);
  Ok(())
}

#[test] fn decode_rejects_malformed() -> Result<()> {
  let mut bytes = encode(&gradient(2, 2))?;
  assert!(decode(&bytes[..bytes.len() - 1]).is_err());
  bytes[HEADER_LEN + 1] ^= 1;
  assert!(decode(&bytes).is_err());
  Ok(())
}

#[test] fn oversized_buffer() {
  let buffer = IntensityBuffer::new(Size2D::new(u16::MAX as u32 + 1, 0));
  assert!(encode(&buffer).is_err());
}

#[test] fn write_replaces_existing_file() -> Result<()> {
  let path = temp_path("overwrite.tga");
  std::fs::write(&path, vec![0xAB; 100_000])?;

  let buffer = gradient(4, 4);
  write(&path, &buffer)?;
  let bytes = std::fs::read(&path)?;
  assert_eq!(bytes, encode(&buffer)?);
  assert_eq!(read(&path)?.get(P2::new(3, 2)), Some(23));
  Ok(())
}

#[test] fn write_reports_path() {
  let path = temp_path("missing-dir").join("nested").join("out.tga");
  let err = write(&path, &gradient(1, 1)).err();
  let msg = err.map(|e| e.to_string()).unwrap_or_default();
  assert!(msg.contains("out.tga"), "{}", msg);
}

#[test] fn written_length_matches_encoding() -> Result<()> {
  let path = temp_path("length.tga");
  let buffer = gradient(7, 3);
  write(&path, &buffer)?;
  write(&path, &buffer)?;
  assert_eq!(std::fs::metadata(&path)?.len() as usize, encoded_len(&buffer));
  assert_eq!(encoded_len(&buffer), 18 + 7 * 3 * 3);
  Ok(())
}
