//! Reading and writing of image files
//!
//! Thin wrappers over the `image` crate for loading pictures into a
//! [`PixelBuffer`] and saving buffers back out. The format is picked
//! from the file extension; tests lean on `img_diff` to compare saved
//! frames.

use crate::buffer::PixelBuffer;
use std::path::Path;

/// Load an image file into an RGBA buffer
pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<PixelBuffer, image::ImageError> {
    let img = image::open(filename)?.to_rgba();
    let (w, h) = img.dimensions();
    Ok(PixelBuffer { width: w as usize, height: h as usize, data: img.into_raw() })
}

/// Save a buffer; the extension selects the format
pub fn write_file<P: AsRef<Path>>(buf: &PixelBuffer, filename: P) -> Result<(), std::io::Error> {
    image::save_buffer(
        filename,
        &buf.data,
        buf.width as u32,
        buf.height as u32,
        image::RGBA(8),
    )
}

/// Compare two image files pixel for pixel, reporting differences on
/// stdout
pub fn img_diff<P: AsRef<Path>>(f1: P, f2: P) -> Result<bool, image::ImageError> {
    let img1 = read_file(f1)?;
    let img2 = read_file(f2)?;
    if img1.width != img2.width || img1.height != img2.height {
        return Ok(false);
    }
    if img1.data.len() != img2.data.len() {
        println!("files not equal length");
        return Ok(false);
    }
    let mut flag = true;
    for (i, (v1, v2)) in img1.data.iter().zip(img2.data.iter()).enumerate() {
        if v1 != v2 {
            println!("{} [{},{},{}]: {} {}", i, (i / 4) % img1.width, (i / 4) / img1.width, i % 4, v1, v2);
            flag = false;
        }
    }
    Ok(flag)
}
