//! Projected verification costs from measured pairing benchmarks.
//!
//! The benchmark collector times individual BLS12-381 operations (group
//! arithmetic, Miller loops, final exponentiation, equality checks) and
//! writes the averages, in nanoseconds per operation, to a JSON file. This
//! crate loads that file and projects the total wall-clock cost of naive
//! batched verification across a sweep of transaction counts. No
//! cryptography runs here; everything is algebra over measured constants.

pub mod cost;
pub mod db;
pub mod error;
pub mod pow2;
pub mod sweep;
pub mod units;

pub use cost::naive_verification;
pub use db::BenchDb;
pub use error::{Error, Result};
pub use sweep::{sweep_lines, SEPARATOR};
