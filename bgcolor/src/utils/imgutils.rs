use image::{ImageBuffer, Rgb, RgbImage};

use crate::pixel_grid::PixelGrid;

/// A `width`x`height` grid where every pixel has the same color.
pub fn filled(width: u32, height: u32, red: u8, green: u8, blue: u8) -> PixelGrid {
    let mut buf: RgbImage = ImageBuffer::new(width, height);
    buf.enumerate_pixels_mut()
        .for_each(|(_, _, pixel)| *pixel = Rgb([red, green, blue]));
    PixelGrid::try_from(buf).expect("width and height must be non-zero")
}

/// Builds a grid from rows of `[r, g, b]`, `raw[y][x]`. All rows must be equally long
/// and there must be at least one pixel.
pub fn construct_rgb(raw: &[&[[u8; 3]]]) -> PixelGrid {
    assert!(raw.windows(2).all(|w| w[0].len() == w[1].len()));
    let height = raw.len() as u32;
    let width = raw.iter().next().map(|row| row.len()).unwrap_or(0) as u32;
    let img = RgbImage::from_fn(width, height, |x, y| Rgb(raw[y as usize][x as usize]));
    PixelGrid::try_from(img).expect("raw must contain at least one pixel")
}
