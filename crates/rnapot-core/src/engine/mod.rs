//! # Engine Module
//!
//! Run-time plumbing shared by the workflows: what a run is configured with, how it
//! fails and how it reports progress.
//!
//! - **Configuration** ([`config`]) - Potential parameters, input sources and the
//!   training/scoring configuration builders
//! - **Error Handling** ([`error`]) - The aggregated [`error::EngineError`]
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress reporting

pub mod config;
pub mod error;
pub mod progress;
