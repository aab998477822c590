//! Sweep driver: enumerates (batch size, transaction count) combinations
//! and renders one report line per pair.

use crate::cost::naive_verification;
use crate::db::BenchDb;
use crate::error::Result;
use crate::units::NS_TO_S;

/// Rule printed before the report body.
pub const SEPARATOR: &str = "===============================================================";

pub const NAIVE_VERIFY_LABEL: &str = "NaiveVerify";

/// Default batch-size parameters.
pub const DEFAULT_ELL: [u64; 1] = [30];

/// Default transaction counts: powers of two `2^2 ..= 2^14`.
pub fn default_txn_counts() -> Vec<u64> {
    (2..15).map(|i| 1u64 << i).collect()
}

/// One report line: label, batch size, transaction count and the total cost
/// in seconds to three decimals, tab separated.
pub fn format_line(label: &str, l: u64, txn: u64, total_seconds: f64) -> String {
    format!("{label:<15}\t{l:>2}\t{txn:>10}\t{total_seconds:>12.3}\tseconds")
}

/// Runs the full sweep: batch sizes in the outer loop, transaction counts in
/// the inner, preserving input order. The first missing benchmark entry
/// aborts the whole sweep; a partial report would be misleading.
pub fn sweep_lines(db: &BenchDb, ell: &[u64], txn_counts: &[u64]) -> Result<Vec<String>> {
    let mut lines = Vec::with_capacity(ell.len() * txn_counts.len());
    for &l in ell {
        for &txn in txn_counts {
            let total_ns = naive_verification(db, l, txn)?;
            lines.push(format_line(NAIVE_VERIFY_LABEL, l, txn, total_ns / NS_TO_S));
        }
    }
    Ok(lines)
}
