use super::error::PotentialError;
use crate::core::models::bins::BinRange;
use crate::core::models::pair::{PairDistance, same_residue_set};

/// Normalized occurrence frequencies over a fixed range of distance bins.
///
/// Every bin of the range is present, including empty ones.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyTable {
    range: BinRange,
    frequencies: Vec<f64>,
}

impl FrequencyTable {
    pub fn range(&self) -> BinRange {
        self.range
    }

    pub fn values(&self) -> &[f64] {
        &self.frequencies
    }

    pub fn get(&self, bin: u32) -> Option<f64> {
        self.range.index_of(bin).map(|i| self.frequencies[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.range.bins().zip(self.frequencies.iter().copied())
    }

    pub fn sum(&self) -> f64 {
        self.frequencies.iter().sum()
    }
}

#[derive(Debug, Clone)]
struct Histogram {
    range: BinRange,
    counts: Vec<u64>,
    total: u64,
}

impl Histogram {
    fn new(range: BinRange) -> Self {
        Self {
            range,
            counts: vec![0; range.len()],
            total: 0,
        }
    }

    // Out-of-range distances still count towards the total.
    fn add(&mut self, distance: f64) {
        self.total += 1;
        if let Some(i) = self
            .range
            .bin_of(distance)
            .and_then(|bin| self.range.index_of(bin))
        {
            self.counts[i] += 1;
        }
    }

    fn normalize(self) -> Option<FrequencyTable> {
        if self.total == 0 {
            return None;
        }
        let total = self.total as f64;
        Some(FrequencyTable {
            range: self.range,
            frequencies: self.counts.iter().map(|&c| c as f64 / total).collect(),
        })
    }
}

/// Background frequencies over the whole population.
///
/// The denominator is the number of processed distances, including those that fall
/// outside `range`.
pub fn reference_frequencies(
    distances: &[PairDistance],
    range: BinRange,
) -> Result<FrequencyTable, PotentialError> {
    let mut histogram = Histogram::new(range);
    for pair in distances {
        histogram.add(pair.distance);
    }
    histogram.normalize().ok_or(PotentialError::EmptyPopulation)
}

/// Frequencies for the distances whose code has the same residue set as `code`.
///
/// The denominator is the size of that filtered population, again regardless of range.
pub fn observed_frequencies(
    code: &str,
    distances: &[PairDistance],
    range: BinRange,
) -> Result<FrequencyTable, PotentialError> {
    let mut histogram = Histogram::new(range);
    for pair in distances.iter().filter(|p| same_residue_set(&p.code, code)) {
        histogram.add(pair.distance);
    }
    histogram
        .normalize()
        .ok_or_else(|| PotentialError::MissingCode {
            code: code.to_string(),
        })
}
