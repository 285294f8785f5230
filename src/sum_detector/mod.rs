// WHY: Shared data model for both detection strategies
// Both detectors feed the same CombinationSet so deduplication policy lives in one place

use anyhow::Result;
use serde::Serialize;
use std::collections::HashSet;

pub mod memory_efficient;
pub mod time_efficient;

pub use memory_efficient::detect_sums_memory_efficient;
pub use time_efficient::detect_sums_time_efficient;

/// Signature shared by every detector
pub type DetectorFn = fn(&[i64]) -> Result<CombinationSet>;

/// Index triple where `seq[pa] + seq[pb] == seq[sum]`
/// Invariants: `pa < pb` and `sum` differs from both addends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Combination {
    #[serde(rename = "pA")]
    pub pa: usize,
    #[serde(rename = "pB")]
    pub pb: usize,
    pub sum: usize,
}

/// Deduplication identity: (value, index) of the sum, then of both addends ordered by index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalKey {
    pub sum_value: i64,
    pub sum_index: usize,
    pub addend1_value: i64,
    pub addend1_index: usize,
    pub addend2_value: i64,
    pub addend2_index: usize,
}

impl CanonicalKey {
    pub fn new(seq: &[i64], pa: usize, pb: usize, sum: usize) -> Self {
        let (first, second) = if pa <= pb { (pa, pb) } else { (pb, pa) };
        Self {
            sum_value: seq[sum],
            sum_index: sum,
            addend1_value: seq[first],
            addend1_index: first,
            addend2_value: seq[second],
            addend2_index: second,
        }
    }
}

/// First-seen ordered, key-deduplicated collection of combinations
#[derive(Debug, Clone, Default)]
pub struct CombinationSet {
    combinations: Vec<Combination>,
    seen: HashSet<CanonicalKey>,
}

impl CombinationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the combination unless its canonical key was already recorded
    /// Returns true when the combination was added
    pub fn insert(&mut self, seq: &[i64], pa: usize, pb: usize, sum: usize) -> bool {
        let key = CanonicalKey::new(seq, pa, pb, sum);
        if !self.seen.insert(key) {
            return false;
        }
        self.combinations.push(Combination { pa, pb, sum });
        true
    }

    pub fn len(&self) -> usize {
        self.combinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combinations.is_empty()
    }

    pub fn as_slice(&self) -> &[Combination] {
        &self.combinations
    }

    pub fn keys(&self) -> &HashSet<CanonicalKey> {
        &self.seen
    }

    pub fn into_vec(self) -> Vec<Combination> {
        self.combinations
    }
}

/// Sum of the two addends, or `None` when it leaves the i64 range
/// An out-of-range sum cannot equal any element, so callers skip the pair
pub(crate) fn target_sum(seq: &[i64], pa: usize, pb: usize) -> Option<i64> {
    seq[pa].checked_add(seq[pb])
}

/// Outcome of running both detectors over the same sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectorComparison {
    pub memory_efficient_count: usize,
    pub time_efficient_count: usize,
    pub keys_match: bool,
}

/// Run both detectors and check that their canonical key sets agree
/// Emission order is ignored: the traversals legitimately differ
pub fn compare_detectors(seq: &[i64]) -> Result<DetectorComparison> {
    let memory = detect_sums_memory_efficient(seq)?;
    let time = detect_sums_time_efficient(seq)?;

    Ok(DetectorComparison {
        memory_efficient_count: memory.len(),
        time_efficient_count: time.len(),
        keys_match: memory.keys() == time.keys(),
    })
}
