//! # Workflows Module
//!
//! End-to-end entry points that tie [`crate::core`] and [`crate::engine`] together.
//!
//! - **Training** ([`train`]) - Loads reference structures, pools their distances and
//!   writes one log-odds score curve per base-pair code.
//! - **Scoring** ([`score`]) - Loads persisted curves and interpolates the distances of
//!   a query structure into them.
//!
//! Both workflows take a validated configuration and a
//! [`ProgressReporter`](crate::engine::progress::ProgressReporter), log through
//! `tracing`, and return owned result structs.

#[cfg(test)]
pub(crate) mod fixtures;
pub mod score;
pub mod train;
