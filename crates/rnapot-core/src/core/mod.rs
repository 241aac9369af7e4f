//! # Core Module
//!
//! Stateless building blocks of the RNA distance potential: data models, file codecs
//! and the statistical-potential math.
//!
//! ## Architecture
//!
//! - **Data Models** ([`models`]) - Residues, tagged pair distances, distance bins and score curves
//! - **File I/O** ([`io`]) - PDB structure loading and score-curve persistence
//! - **Potential Math** ([`potential`]) - Distance extraction, frequency estimation,
//!   log-odds scoring and interpolation
//!
//! Nothing in this module keeps state between calls; every stage takes its inputs by
//! reference and returns owned results to the next one.

pub mod io;
pub mod models;
pub mod potential;
