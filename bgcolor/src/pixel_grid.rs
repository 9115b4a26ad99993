use image::{Rgb, RgbImage};

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("image has no pixels ({width}x{height})")]
pub struct EmptyImage {
    pub width: u32,
    pub height: u32,
}

/// Decoded RGB pixels with at least one row and one column.
///
/// The emptiness check happens once, when the grid is created, so every consumer can
/// rely on there being a first pixel.
#[derive(Clone, Debug)]
pub struct PixelGrid(RgbImage);

impl PixelGrid {
    pub fn width(&self) -> u32 {
        self.0.width()
    }

    pub fn height(&self) -> u32 {
        self.0.height()
    }

    /// Total number of pixels, never zero.
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height())
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Rgb<u8>> {
        (x < self.width() && y < self.height()).then(|| *self.0.get_pixel(x, y))
    }

    /// Iterates row by row, left to right within each row.
    pub fn pixels(&self) -> impl Iterator<Item = Rgb<u8>> + '_ {
        self.0.pixels().copied()
    }

    pub fn as_image(&self) -> &RgbImage {
        &self.0
    }

    pub fn into_image(self) -> RgbImage {
        self.0
    }
}

impl TryFrom<RgbImage> for PixelGrid {
    type Error = EmptyImage;

    fn try_from(img: RgbImage) -> Result<Self, Self::Error> {
        if img.width() == 0 || img.height() == 0 {
            return Err(EmptyImage {
                width: img.width(),
                height: img.height(),
            });
        }
        Ok(Self(img))
    }
}
