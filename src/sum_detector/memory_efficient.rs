// WHY: Brute-force detector, O(n³) time with no auxiliary structures beyond the dedup set
// Serves as the reference enumeration the time-efficient detector is checked against

use anyhow::Result;
use tracing::debug;

use super::{target_sum, CombinationSet};

/// Enumerate every addend pair and scan all other positions for their sum
///
/// Order is fixed (pA ascending, pB ascending, sum index ascending), so the
/// first-seen output order is deterministic for a given input.
pub fn detect_sums_memory_efficient(seq: &[i64]) -> Result<CombinationSet> {
    debug!("Starting memory-efficient detection on {} values", seq.len());

    let n = seq.len();
    let mut results = CombinationSet::new();

    for pa in 0..n {
        for pb in (pa + 1)..n {
            let Some(target) = target_sum(seq, pa, pb) else {
                continue;
            };

            for sum_index in 0..n {
                if sum_index != pa && sum_index != pb && seq[sum_index] == target {
                    results.insert(seq, pa, pb, sum_index);
                }
            }
        }
    }

    debug!("Memory-efficient detection found {} combinations", results.len());
    Ok(results)
}
