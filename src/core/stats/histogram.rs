//! Pixel counts per class

use std::collections::BTreeMap;

/// One class of a histogram
#[derive(Debug, Clone, PartialEq)]
pub struct ClassCount {
    /// Class code
    pub class: u64,

    /// Number of pixels with this code
    pub pixels: u64,

    /// Share of valid pixels, in percent
    pub percent: f64,
}

/// Pixel counts per class for one raster, nodata excluded
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassHistogram {
    counts: BTreeMap<u64, u64>,
    total: u64,
}

impl ClassHistogram {
    /// Create an empty histogram
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts every value except `nodata`
    pub fn from_values<I>(values: I, nodata: u64) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        let mut histogram = Self::new();
        for value in values {
            if value != nodata {
                histogram.add(value, 1);
            }
        }
        histogram
    }

    /// Adds `pixels` to `class`
    pub fn add(&mut self, class: u64, pixels: u64) {
        *self.counts.entry(class).or_insert(0) += pixels;
        self.total += pixels;
    }

    /// Total valid pixels
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct classes
    pub fn class_count(&self) -> usize {
        self.counts.len()
    }

    /// Pixels counted for `class`
    pub fn pixels(&self, class: u64) -> u64 {
        self.counts.get(&class).copied().unwrap_or(0)
    }

    /// Classes sorted by pixel count, largest first
    ///
    /// Ties keep ascending class order.
    pub fn rows(&self) -> Vec<ClassCount> {
        if self.total == 0 {
            return Vec::new();
        }

        let mut rows: Vec<ClassCount> = self
            .counts
            .iter()
            .map(|(&class, &pixels)| ClassCount {
                class,
                pixels,
                percent: pixels as f64 / self.total as f64 * 100.0,
            })
            .collect();
        rows.sort_by(|a, b| b.pixels.cmp(&a.pixels));
        rows
    }
}
