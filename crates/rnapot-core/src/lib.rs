//! # rnapot Core Library
//!
//! Trains and applies a distance-based statistical potential for RNA structures.
//! Each nucleotide is reduced to one representative atom (C3' by default), and every pair
//! of residues far enough apart in sequence contributes one distance to a histogram.
//! Comparing the histogram for a given base-pair code against the pooled histogram of all
//! pairs yields a log-odds score curve per code.
//!
//! ## Architecture
//!
//! The library follows a three-layer layout:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Residue`, `BinRange`, `ScoreCurve`),
//!   the pure statistics behind the potential (`distances`, `frequency`, `log_odds`,
//!   `interpolation`) and the PDB and curve file formats.
//!
//! - **[`engine`]: Configuration and Plumbing.** Validated parameter sets, workflow
//!   configuration builders, the shared error type and progress reporting.
//!
//! - **[`workflows`]: The Public API.** Complete training and scoring procedures built on
//!   the two layers below.

pub mod core;
pub mod engine;
pub mod workflows;
