//! Binary portable pixmap (`P6`) serialization.

use std::io::{self, Write};

use super::image::Image;

/// Encode `image` as a binary `P6` portable pixmap.
///
/// The format is an ASCII header `P6 <width> <height> 255\n` followed by
/// raw RGB triples in row-major order starting from the *top* row. Scene
/// coordinates grow upwards while pixmap rows grow downwards, so the image
/// rows are emitted bottom-to-top here.
pub fn encode(image: &Image) -> Vec<u8> {
    let mut bytes = format!("P6 {} {} 255\n", image.width(), image.height()).into_bytes();
    bytes.reserve(3 * image.width() as usize * image.height() as usize);

    for y in (0..image.height()).rev() {
        for x in 0..image.width() {
            let color = image.pixel(x, y);
            bytes.extend_from_slice(&[color.r, color.g, color.b]);
        }
    }

    bytes
}

/// Write `image` to `out` in binary `P6` format.
pub fn write<W: Write>(out: &mut W, image: &Image) -> io::Result<()> {
    out.write_all(&encode(image))
}
