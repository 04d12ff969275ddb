//! Madlens - deterministic synthetic series with MAD-based outlier scoring
//!
//! This library generates a reproducible near-normal series from a seed
//! (Park–Miller generator + Box–Muller), injects a fixed set of extreme
//! values, and classifies every point with robust z-scores built on the
//! median and the Median Absolute Deviation.
//!
//! The two entry points are [`series::generate`] and [`robust::score`]; both
//! are pure functions of their inputs.

pub mod cli;
pub mod config;
pub mod csv_output;
pub mod gaussian;
pub mod html_output;
pub mod json_output;
pub mod lehmer;
pub mod robust;
pub mod series;
pub mod session;
pub mod text_output;
