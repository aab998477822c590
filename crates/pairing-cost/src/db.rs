//! Benchmark database: operation name to average measured nanoseconds.
//!
//! The collector's vocabulary is open ended (`G1Add`, `G2Mul`, `FrMul`,
//! `Pairing`, `MultiPairing32Avg`, ...); the cost model only requires the
//! five operations named below. Extra entries are kept for the diagnostic
//! key listing but otherwise ignored.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

pub const G1_MUL: &str = "G1Mul";
pub const G1_SUB: &str = "G1Sub";
pub const MILLER_LOOP_VEC32_AVG: &str = "MillerLoopVec32Avg";
pub const FINAL_EXP: &str = "FinalExp";
pub const GT_IS_EQUAL: &str = "GTIsEqual";

/// Loaded once at startup, read-only afterwards.
///
/// A `BTreeMap` keeps the key listing deterministic; JSON objects carry no
/// reliable order.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct BenchDb {
    entries: BTreeMap<String, f64>,
}

impl BenchDb {
    /// Reads and parses the collector's JSON output.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_entries<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Average nanoseconds for `key`. Missing entries are an error, never a
    /// default: a report built on a substituted cost would be misleading.
    pub fn get(&self, key: &str) -> Result<f64> {
        self.entries
            .get(key)
            .copied()
            .ok_or_else(|| Error::MissingKey { key: key.to_owned() })
    }

    pub fn g1_mul(&self) -> Result<f64> {
        self.get(G1_MUL)
    }

    pub fn g1_sub(&self) -> Result<f64> {
        self.get(G1_SUB)
    }

    pub fn miller_loop_vec32_avg(&self) -> Result<f64> {
        self.get(MILLER_LOOP_VEC32_AVG)
    }

    pub fn final_exp(&self) -> Result<f64> {
        self.get(FINAL_EXP)
    }

    pub fn gt_is_equal(&self) -> Result<f64> {
        self.get(GT_IS_EQUAL)
    }

    /// All operation names, sorted.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
