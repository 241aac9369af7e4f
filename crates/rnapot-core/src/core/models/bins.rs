use std::ops::RangeInclusive;

/// An inclusive range of unit-width distance bins.
///
/// A distance belongs to bin `ceil(distance)`, so bin `n` covers `(n - 1, n]` and its
/// midpoint sits at `n - 0.5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinRange {
    pub min: u32,
    pub max: u32,
}

impl BinRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn len(&self) -> usize {
        if self.max < self.min {
            0
        } else {
            (self.max - self.min) as usize + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn bins(&self) -> RangeInclusive<u32> {
        self.min..=self.max
    }

    /// Maps a raw distance to its bin, rounding up. Distances outside the range map to `None`.
    pub fn bin_of(&self, distance: f64) -> Option<u32> {
        let rounded = distance.ceil();
        if rounded >= f64::from(self.min) && rounded <= f64::from(self.max) {
            Some(rounded as u32)
        } else {
            None
        }
    }

    /// Position of `bin` in a dense per-bin vector.
    pub fn index_of(&self, bin: u32) -> Option<usize> {
        self.bins()
            .contains(&bin)
            .then(|| (bin - self.min) as usize)
    }

    pub fn midpoints(&self) -> Vec<f64> {
        self.bins().map(|bin| f64::from(bin) - 0.5).collect()
    }
}

impl Default for BinRange {
    fn default() -> Self {
        Self::new(1, 20)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_range_has_twenty_bins() {
        let range = BinRange::default();
        assert_eq!(range.len(), 20);
        assert_eq!(range.bins().next(), Some(1));
        assert_eq!(range.bins().last(), Some(20));
    }

    #[test]
    fn bin_of_rounds_up() {
        let range = BinRange::default();
        assert_eq!(range.bin_of(4.0), Some(4));
        assert_eq!(range.bin_of(4.01), Some(5));
        assert_eq!(range.bin_of(0.2), Some(1));
        assert_eq!(range.bin_of(19.999), Some(20));
    }

    #[test]
    fn bin_of_rejects_out_of_range_distances() {
        let range = BinRange::default();
        assert_eq!(range.bin_of(0.0), None);
        assert_eq!(range.bin_of(20.0001), None);
        assert_eq!(range.bin_of(35.0), None);
        assert_eq!(range.bin_of(f64::NAN), None);
    }

    #[test]
    fn midpoints_are_offset_by_half_a_bin() {
        let midpoints = BinRange::default().midpoints();
        assert_eq!(midpoints.len(), 20);
        assert_eq!(midpoints[0], 0.5);
        assert_eq!(midpoints[9], 9.5);
        assert_eq!(midpoints[19], 19.5);
    }

    #[test]
    fn index_of_is_relative_to_the_first_bin() {
        let range = BinRange::new(3, 6);
        assert_eq!(range.index_of(3), Some(0));
        assert_eq!(range.index_of(6), Some(3));
        assert_eq!(range.index_of(2), None);
        assert_eq!(range.index_of(7), None);
    }

    #[test]
    fn inverted_range_is_empty() {
        assert!(BinRange::new(5, 4).is_empty());
    }
}
