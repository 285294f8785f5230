// WHY: Sorted-index detector, O(n² log n) time and O(n) extra space
// Pairs are still visited in original-index order; only the sum lookup is accelerated

use anyhow::Result;
use tracing::debug;

use super::{target_sum, CombinationSet};

/// Value paired with its position in the unsorted input
#[derive(Debug, Clone, Copy)]
struct IndexedValue {
    value: i64,
    index: usize,
}

/// Detect combinations by bisecting a value-sorted copy of the sequence
///
/// On a hit every neighbouring position with the same value is collected,
/// leftward first then rightward, since duplicates mean several candidate sum
/// positions can share one value.
pub fn detect_sums_time_efficient(seq: &[i64]) -> Result<CombinationSet> {
    debug!("Starting time-efficient detection on {} values", seq.len());

    let n = seq.len();
    let mut indexed: Vec<IndexedValue> = seq
        .iter()
        .enumerate()
        .map(|(index, &value)| IndexedValue { value, index })
        .collect();
    // WHY: stable sort keeps equal values in original order, making emission order reproducible
    indexed.sort_by_key(|entry| entry.value);

    let mut results = CombinationSet::new();

    for pa in 0..n {
        for pb in (pa + 1)..n {
            let Some(target) = target_sum(seq, pa, pb) else {
                continue;
            };

            let Some(mid) = bisect(&indexed, target) else {
                continue;
            };

            let left = (0..=mid).rev().take_while(|&k| indexed[k].value == target);
            let right = ((mid + 1)..n).take_while(|&k| indexed[k].value == target);

            for k in left.chain(right) {
                let sum_index = indexed[k].index;
                if sum_index != pa && sum_index != pb {
                    results.insert(seq, pa, pb, sum_index);
                }
            }
        }
    }

    debug!("Time-efficient detection found {} combinations", results.len());
    Ok(results)
}

/// Standard midpoint bisection returning any position holding `target`
fn bisect(sorted: &[IndexedValue], target: i64) -> Option<usize> {
    let mut low = 0usize;
    let mut high = sorted.len();

    while low < high {
        let mid = low + (high - low) / 2;
        let value = sorted[mid].value;
        if value == target {
            return Some(mid);
        } else if value < target {
            low = mid + 1;
        } else {
            high = mid;
        }
    }

    None
}
