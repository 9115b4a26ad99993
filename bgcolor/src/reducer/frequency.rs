use std::collections::HashMap;

use crate::{color::ColorTriple, pixel_grid::PixelGrid};

#[derive(Clone, Copy, Debug)]
struct Occurrences {
    count: u64,
    /// Row-major index of the first pixel with this color.
    first_seen: u64,
}

/// How many times every exact color occurs in a grid.
#[derive(Debug)]
pub struct ColorFrequencyTable {
    counts: HashMap<ColorTriple, Occurrences>,
}

impl ColorFrequencyTable {
    /// Visits every pixel exactly once, row by row.
    pub fn build(grid: &PixelGrid) -> Self {
        let mut counts: HashMap<ColorTriple, Occurrences> = HashMap::new();
        for (i, pixel) in (0u64..).zip(grid.pixels()) {
            counts
                .entry(pixel.into())
                .or_insert(Occurrences {
                    count: 0,
                    first_seen: i,
                })
                .count += 1;
        }
        log::trace!(
            "{} distinct colors among {} pixels",
            counts.len(),
            grid.pixel_count()
        );
        Self { counts }
    }

    pub fn count(&self, color: ColorTriple) -> u64 {
        self.counts.get(&color).map_or(0, |occ| occ.count)
    }

    /// Number of distinct colors
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e., the number of pixels scanned.
    pub fn total(&self) -> u64 {
        self.counts.values().map(|occ| occ.count).sum()
    }

    /// Arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (ColorTriple, u64)> + '_ {
        self.counts.iter().map(|(color, occ)| (*color, occ.count))
    }

    /// The color with the highest count. Ties go to the color that appeared first in the
    /// scan, so the answer never depends on the hash map's iteration order.
    pub fn most_frequent(&self) -> Option<(ColorTriple, u64)> {
        self.counts
            .iter()
            .max_by(|(_, a), (_, b)| {
                a.count
                    .cmp(&b.count)
                    .then_with(|| b.first_seen.cmp(&a.first_seen))
            })
            .map(|(color, occ)| (*color, occ.count))
    }
}
