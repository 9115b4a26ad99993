// NOTE: every test will complain about the functions it doesn't use
#![allow(unused)]

use std::{io::Cursor, path::PathBuf};

use image::{DynamicImage, ImageOutputFormat, Rgb, RgbImage};
use tempfile::{Builder, TempPath};

/// Returns a named temporary file inside cargo's tmpdir, ending with `suffix`
pub fn tmp_file(suffix: &str) -> TempPath {
    Builder::new()
        .suffix(suffix)
        .tempfile_in(cargo_tmpdir())
        .expect("could not create temporary file")
        .into_temp_path()
}

/// Returns cargo's tmpdir
pub fn cargo_tmpdir() -> PathBuf {
    PathBuf::from(option_env!("CARGO_TARGET_TMPDIR").expect("no cargo tmpdir???"))
}

/// Writes `contents` to a fresh temporary file
pub fn tmp_file_with(suffix: &str, contents: impl AsRef<[u8]>) -> TempPath {
    let path = tmp_file(suffix);
    std::fs::write(&path, contents).expect("could not write temporary file");
    path
}

pub fn encode(img: &RgbImage, format: ImageOutputFormat) -> Vec<u8> {
    let mut buf = Vec::new();
    DynamicImage::ImageRgb8(img.clone())
        .write_to(&mut Cursor::new(&mut buf), format)
        .expect("encoding to memory works");
    buf
}

/// A light gray background with a darker square in the middle
pub fn framed(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        let inside = x > width / 4 && x < 3 * width / 4 && y > height / 4 && y < 3 * height / 4;
        if inside {
            Rgb([30, 60, 90])
        } else {
            Rgb([230, 230, 230])
        }
    })
}
