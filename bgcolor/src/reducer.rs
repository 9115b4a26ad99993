//! Reduces a whole grid to one representative color.
//!
//! Two strategies exist and the caller picks one explicitly, they are never chosen based
//! on the image content:
//!
//! - [`most_frequent`] counts exact colors. Memory grows with the number of distinct
//!   colors, which for a large noisy photo can approach one entry per pixel.
//! - [`mean`] averages each channel independently and rounds down.
//!
//! Both are deterministic and never modify the grid.

mod frequency;

pub use frequency::ColorFrequencyTable;

use crate::{color::ColorTriple, pixel_grid::PixelGrid};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ReductionMode {
    /// The exact color that occurs the most
    #[default]
    MostFrequent,
    /// The average of each channel, rounded down
    Mean,
}

pub fn reduce(grid: &PixelGrid, mode: ReductionMode) -> ColorTriple {
    let color = match mode {
        ReductionMode::MostFrequent => most_frequent(grid),
        ReductionMode::Mean => mean(grid),
    };
    log::debug!(
        "{mode:?} of a {}x{} grid: {color}",
        grid.width(),
        grid.height()
    );
    color
}

pub fn most_frequent(grid: &PixelGrid) -> ColorTriple {
    let (color, count) = ColorFrequencyTable::build(grid)
        .most_frequent()
        .expect("a pixel grid always has at least one pixel");
    log::trace!("{color} occurs {count} times");
    color
}

pub fn mean(grid: &PixelGrid) -> ColorTriple {
    // u64 can't overflow here, that would take over 2^56 pixels
    let mut sums = [0u64; 3];
    grid.pixels().for_each(|rgb| {
        sums.iter_mut()
            .zip(rgb.0)
            .for_each(|(sum, channel)| *sum += u64::from(channel));
    });

    let pixels = grid.pixel_count();
    // NOTE: each quotient is at most 255
    let [red, green, blue] = sums.map(|sum| (sum / pixels) as u8);
    ColorTriple::new(red, green, blue)
}

#[cfg(test)]
mod test {
    use rand::{rngs::SmallRng, Rng, SeedableRng};

    use super::*;
    use crate::utils::imgutils::{construct_rgb, filled};

    const MODES: [ReductionMode; 2] = [ReductionMode::MostFrequent, ReductionMode::Mean];

    #[test]
    fn most_frequent_beats_singles() {
        let grid = construct_rgb(&[
            &[[10, 10, 10], [10, 10, 10]],
            &[[20, 20, 20], [30, 30, 30]],
        ]);
        assert_eq!(
            ColorTriple::new(10, 10, 10),
            reduce(&grid, ReductionMode::MostFrequent)
        );
    }

    #[test]
    fn mean_of_two() {
        let grid = construct_rgb(&[&[[0, 0, 0], [10, 0, 0]]]);
        assert_eq!(ColorTriple::new(5, 0, 0), reduce(&grid, ReductionMode::Mean));
    }

    #[test]
    fn single_pixel() {
        let grid = construct_rgb(&[&[[7, 7, 7]]]);
        for mode in MODES {
            assert_eq!(ColorTriple::new(7, 7, 7), reduce(&grid, mode));
        }
    }

    #[test]
    fn mean_rounds_down() {
        let grid = construct_rgb(&[&[[0, 255, 3], [1, 254, 4]]]);
        assert_eq!(ColorTriple::new(0, 254, 3), mean(&grid));

        let grid = construct_rgb(&[&[[2, 2, 2], [2, 2, 2], [3, 3, 3]]]);
        assert_eq!(ColorTriple::new(2, 2, 2), mean(&grid));
    }

    #[test]
    fn mean_channels_are_independent() {
        let grid = construct_rgb(&[&[[255, 0, 100]], &[[255, 0, 200]]]);
        assert_eq!(ColorTriple::new(255, 0, 150), mean(&grid));
    }

    #[test]
    fn uniform_images() {
        for (r, g, b) in [(0, 0, 0), (255, 255, 255), (12, 200, 99)] {
            let grid = filled(300, 200, r, g, b);
            for mode in MODES {
                assert_eq!(ColorTriple::new(r, g, b), reduce(&grid, mode));
            }
        }
    }

    #[test]
    fn background_wins_over_foreground() {
        let bg = [240, 240, 240];
        let fg = [20, 30, 40];
        let grid = construct_rgb(&[
            &[bg, bg, bg, bg],
            &[bg, fg, fg, bg],
            &[bg, fg, fg, bg],
            &[bg, bg, bg, bg],
        ]);
        assert_eq!(ColorTriple::new(240, 240, 240), most_frequent(&grid));
        assert_eq!(ColorTriple::new(185, 187, 190), mean(&grid));
    }

    fn random_grid(rng: &mut SmallRng) -> PixelGrid {
        let width = rng.gen_range(1..=12);
        let height = rng.gen_range(1..=12);
        // a small palette so that colors repeat and ties happen
        let palette: Vec<[u8; 3]> = (0..rng.gen_range(1..=6)).map(|_| rng.gen()).collect();
        let img = image::RgbImage::from_fn(width, height, |_, _| {
            image::Rgb(palette[rng.gen_range(0..palette.len())])
        });
        PixelGrid::try_from(img).unwrap()
    }

    /// Straightforward quadratic version to compare against
    fn naive_most_frequent(grid: &PixelGrid) -> ColorTriple {
        let pixels: Vec<ColorTriple> = grid.pixels().map(Into::into).collect();
        let mut best = pixels[0];
        let mut best_count = 0;
        for &candidate in &pixels {
            let count = pixels.iter().filter(|&&p| p == candidate).count();
            if count > best_count {
                best = candidate;
                best_count = count;
            }
        }
        best
    }

    #[test]
    fn most_frequent_is_maximal() {
        let mut rng = SmallRng::seed_from_u64(0xbac6);
        for _ in 0..200 {
            let grid = random_grid(&mut rng);
            let table = ColorFrequencyTable::build(&grid);
            assert_eq!(grid.pixel_count(), table.total());

            let color = most_frequent(&grid);
            let count = table.count(color);
            assert!(table.iter().all(|(_, other)| count >= other));
            assert_eq!(naive_most_frequent(&grid), color);
        }
    }

    #[test]
    fn deterministic() {
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..100 {
            let grid = random_grid(&mut rng);
            for mode in MODES {
                assert_eq!(reduce(&grid, mode), reduce(&grid, mode));
            }
        }
    }

    #[test]
    fn mean_matches_float_average() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..100 {
            let grid = random_grid(&mut rng);
            let n = grid.pixel_count() as f64;
            let expect = |i: usize| {
                (grid.pixels().map(|p| f64::from(p[i])).sum::<f64>() / n).floor() as u8
            };
            assert_eq!(
                ColorTriple::new(expect(0), expect(1), expect(2)),
                mean(&grid)
            );
        }
    }

    #[test]
    fn grid_is_untouched() {
        let grid = construct_rgb(&[&[[1, 2, 3], [4, 5, 6]]]);
        let before = grid.as_image().clone();
        for mode in MODES {
            reduce(&grid, mode);
        }
        assert_eq!(&before, grid.as_image());
    }
}
