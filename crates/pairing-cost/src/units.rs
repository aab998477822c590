//! Unit-conversion divisors for measured nanosecond costs.

pub const NS_TO_US: f64 = 1e3;
pub const US_TO_MS: f64 = 1e3;
pub const MS_TO_S: f64 = 1e3;
pub const US_TO_S: f64 = 1e6;
pub const NS_TO_S: f64 = 1e9;
