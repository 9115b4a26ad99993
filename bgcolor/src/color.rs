use std::fmt;

use image::Rgb;

/// One representative color, channel order always red, green, blue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ColorTriple {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl ColorTriple {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

impl From<Rgb<u8>> for ColorTriple {
    fn from(Rgb([red, green, blue]): Rgb<u8>) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<ColorTriple> for Rgb<u8> {
    fn from(color: ColorTriple) -> Self {
        Rgb([color.red, color.green, color.blue])
    }
}

impl From<(u8, u8, u8)> for ColorTriple {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

/// The only output format, e.g. `(120, 45, 200)`.
impl fmt::Display for ColorTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.red, self.green, self.blue)
    }
}
