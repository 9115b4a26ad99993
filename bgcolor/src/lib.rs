pub mod bin_common;
pub mod color;
pub mod loader;
pub mod pixel_grid;
pub mod reducer;

/// For stand-alone functionality that fit comfortably within one file.
pub mod utils;

pub use color::ColorTriple;
pub use loader::{load, LoadError, Loader, Source};
pub use pixel_grid::PixelGrid;
pub use reducer::{reduce, ReductionMode};
