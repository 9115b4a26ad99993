//! Turns a path or URL into a [`PixelGrid`].
//!
//! Loading happens in two stages: [`Source::fetch`] obtains the raw bytes and [`decode`]
//! turns them into canonical RGB. Both stages report failures as [`LoadError`], naming
//! the stage and the source it failed on.

mod source;

pub use source::Source;

use std::{io, path::PathBuf, time::Duration};

use image::GenericImageView;

use crate::pixel_grid::{EmptyImage, PixelGrid};

/// How long a remote fetch may take in total before it is abandoned.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("could not read the local file {path:?}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not decode an image from {origin}")]
    DecodeFailed {
        origin: String,
        #[source]
        source: DecodeError,
    },
    #[error("could not fetch {url}")]
    NetworkFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

#[derive(thiserror::Error, Debug)]
pub enum DecodeError {
    #[error("there are no bytes")]
    NoData,
    #[error(transparent)]
    Codec(#[from] image::ImageError),
    #[error(transparent)]
    Empty(#[from] EmptyImage),
}

#[derive(Clone, Copy, Debug)]
pub struct Loader {
    timeout: Duration,
}

impl Default for Loader {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

impl Loader {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn load(&self, source: &Source) -> Result<PixelGrid, LoadError> {
        let bytes = source.fetch(self.timeout)?;
        decode(&bytes).map_err(|e| LoadError::DecodeFailed {
            origin: source.to_string(),
            source: e,
        })
    }
}

/// Loads from a path or URL with the default timeout.
pub fn load(source: &str) -> Result<PixelGrid, LoadError> {
    Loader::default().load(&Source::parse(source))
}

/// Decodes any format the `image` crate recognizes by its magic bytes, regardless of file
/// extension.
///
/// The codec's native layout is converted to 8-bit RGB. Channels stored in another order
/// (BMP keeps BGR on disk) are put back in place without touching the values, alpha is
/// dropped and gray is copied into all three channels.
pub fn decode(bytes: &[u8]) -> Result<PixelGrid, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::NoData);
    }

    let img = image::load_from_memory(bytes)?;
    log::debug!(
        "decoded a {}x{} image stored as {:?}",
        img.width(),
        img.height(),
        img.color()
    );

    Ok(PixelGrid::try_from(img.into_rgb8())?)
}
