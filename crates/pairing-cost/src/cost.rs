//! Cost model for naive batched verification.

use crate::db::BenchDb;
use crate::error::Result;

/// Projected total cost, in nanoseconds, of verifying `txn` independent
/// transactions with batch-size parameter `l`.
///
/// Each transaction pays one G1 multiplication, one G1 subtraction, `l + 1`
/// Miller loop evaluations (32-way vectorized average), one final
/// exponentiation and one GT equality check:
///
/// ```text
/// cost_per_txn = G1Mul + G1Sub + (l + 1) * MillerLoopVec32Avg
///              + FinalExp + GTIsEqual
/// total_cost   = txn * cost_per_txn
/// ```
///
/// FinalExp and GTIsEqual are charged per transaction rather than amortized
/// across a batch; the estimate is deliberately conservative.
pub fn naive_verification(db: &BenchDb, l: u64, txn: u64) -> Result<f64> {
    let cost_per_txn = db.g1_mul()?
        + db.g1_sub()?
        + (l as f64 + 1.0) * db.miller_loop_vec32_avg()?
        + db.final_exp()?
        + db.gt_is_equal()?;
    Ok(txn as f64 * cost_per_txn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn sample_db() -> BenchDb {
        BenchDb::from_entries([
            ("G1Mul", 1000.0),
            ("G1Sub", 500.0),
            ("MillerLoopVec32Avg", 2000.0),
            ("FinalExp", 5000.0),
            ("GTIsEqual", 300.0),
        ])
    }

    #[test]
    fn test_concrete_scenario() {
        let db = sample_db();
        // 1000 + 500 + 31*2000 + 5000 + 300 = 68800 per txn
        assert_eq!(naive_verification(&db, 30, 1).unwrap(), 68_800.0);
        assert_eq!(naive_verification(&db, 30, 4).unwrap(), 275_200.0);
    }

    #[test]
    fn test_linear_in_txn() {
        let db = sample_db();
        let base = naive_verification(&db, 30, 128).unwrap();
        let doubled = naive_verification(&db, 30, 256).unwrap();
        assert_eq!(doubled, 2.0 * base);
    }

    #[test]
    fn test_linear_in_batch_size() {
        let db = sample_db();
        let at_l = naive_verification(&db, 30, 1).unwrap();
        let at_l_plus_1 = naive_verification(&db, 31, 1).unwrap();
        assert_eq!(at_l_plus_1 - at_l, db.miller_loop_vec32_avg().unwrap());
    }

    #[test]
    fn test_missing_final_exp_fails() {
        let db = BenchDb::from_entries([
            ("G1Mul", 1000.0),
            ("G1Sub", 500.0),
            ("MillerLoopVec32Avg", 2000.0),
            ("GTIsEqual", 300.0),
        ]);
        let err = naive_verification(&db, 30, 4).unwrap_err();
        assert!(matches!(err, Error::MissingKey { key } if key == "FinalExp"));
    }
}
