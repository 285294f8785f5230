// Integration test utilities and common code
// WHY: Centralized utilities avoid duplication across integration tests

#![allow(dead_code)]

use detect_sums::AnalysisResult;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test fixture helper for creating temporary input files
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
}

impl TestFixture {
    /// Create a new test fixture with temporary directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().to_path_buf();

        Self { temp_dir, root_path }
    }

    /// Create an input file with one comma-separated sequence per line
    pub fn create_input_file<P: AsRef<Path>>(&self, relative_path: P, lines: &[&str]) -> PathBuf {
        let file_path = self.root_path.join(relative_path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }

        fs::write(&file_path, lines.join("\n")).expect("Failed to write input file");
        file_path
    }

    /// Path for a stats file inside the fixture
    pub fn stats_path(&self) -> PathBuf {
        self.root_path.join("stats.json")
    }
}

/// Every combination must satisfy the sum relation with pairwise distinct indices
pub fn assert_valid_combinations(analysis: &AnalysisResult) {
    for combination in &analysis.result {
        let (pa, pb, sum) = (combination.pa, combination.pb, combination.sum);
        assert!(pa < pb, "addends out of order in {combination:?}");
        assert!(sum != pa && sum != pb, "sum index reuses an addend in {combination:?}");
        assert_eq!(
            analysis.input[pa] + analysis.input[pb],
            analysis.input[sum],
            "invalid combination {combination:?} for input {:?}",
            analysis.input
        );
    }
}

/// Combinations as sorted index triples, for order-insensitive comparison
pub fn sorted_triples(analysis: &AnalysisResult) -> Vec<(usize, usize, usize)> {
    let mut triples: Vec<_> = analysis.result.iter().map(|c| (c.pa, c.pb, c.sum)).collect();
    triples.sort_unstable();
    triples
}
