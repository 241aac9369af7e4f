//! # Statistical Potential Module
//!
//! The numerical heart of the crate: turning residue coordinates into a knowledge-based
//! distance potential and evaluating that potential on new structures.
//!
//! ## Pipeline
//!
//! 1. [`distances`] - pairwise distances between residues far enough apart in sequence
//! 2. [`frequency`] - ceiling-binned, normalized histograms per code and for the population
//! 3. [`log_odds`] - `-ln(observed / reference)` score curves with an upper cap
//! 4. [`interpolation`] - piecewise-linear lookup of raw distances into score curves
//!
//! [`registry`] holds the curves of a trained potential and [`error`] the failures
//! shared by these stages.
//!
//! Training and scoring assign pair codes differently. Training keeps the raw sequence
//! order and groups codes by residue set, so `AU` and `UA` fall into one class. Scoring
//! reorders each pair to match the canonical code list before looking up its curve.

pub mod distances;
pub mod error;
pub mod frequency;
pub mod interpolation;
pub mod log_odds;
pub mod registry;
