//! Plain data carried between the pipeline stages.
//!
//! - [`residue`] - a nucleotide reduced to its representative atom
//! - [`pair`] - tagged inter-residue distances and pair-code helpers
//! - [`bins`] - the unit-width distance bins used for histograms and curves
//! - [`curve`] - per-code log-odds score curves

pub mod bins;
pub mod curve;
pub mod pair;
pub mod residue;
