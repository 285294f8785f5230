// WHY: Single entry point composing parsing, algorithm selection and profiling
// Every failure is returned as data; callers never see an Err from analyze

use serde::Serialize;
use tracing::info;

use crate::algorithm::Algorithm;
use crate::input_parser::parse_sequence;
use crate::performance::{run_with_metrics, MemoryProbe, NoMemoryProbe, PerformanceReport};
use crate::sum_detector::Combination;

/// Caller-visible outcome of one analysis
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub input: Vec<i64>,
    pub result: Vec<Combination>,
    pub error: Option<String>,
    /// Absent when parsing failed and no detector ran
    pub performance_metrics: Option<PerformanceReport>,
    /// The identifier as requested, even when the fallback detector ran
    pub algorithm_used: String,
}

impl AnalysisResult {
    /// Result for input rejected before any detector ran
    pub fn rejected(message: String, algorithm: &str) -> Self {
        Self {
            input: Vec::new(),
            result: Vec::new(),
            error: Some(message),
            performance_metrics: None,
            algorithm_used: algorithm.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Analyzer holding the memory probe used for profiling
#[derive(Debug, Clone, Default)]
pub struct Analyzer<P = NoMemoryProbe> {
    probe: P,
}

impl Analyzer<NoMemoryProbe> {
    /// Analyzer that reports zero memory usage
    pub fn new() -> Self {
        Self { probe: NoMemoryProbe }
    }
}

impl<P: MemoryProbe> Analyzer<P> {
    pub fn with_probe(probe: P) -> Self {
        Self { probe }
    }

    /// Parse `raw`, run the detector selected by `algorithm` and package the outcome
    pub fn analyze(&self, raw: &str, algorithm: &str) -> AnalysisResult {
        let input = match parse_sequence(raw) {
            Ok(input) => input,
            Err(e) => return AnalysisResult::rejected(e.to_string(), algorithm),
        };

        let selected = Algorithm::resolve(algorithm);
        let report = run_with_metrics(&input, selected.display_name(), selected.detector(), &self.probe);

        info!(
            "Analysis complete: requested={} ran={} values={} results={} time_ms={:.3}",
            algorithm,
            selected.identifier(),
            report.input_size,
            report.result_count,
            report.execution_time
        );

        AnalysisResult {
            input,
            result: report.result.clone(),
            error: report.error.clone(),
            performance_metrics: Some(report),
            algorithm_used: algorithm.to_string(),
        }
    }
}

/// Analyze with the default analyzer (no memory measurement)
///
/// # Example
/// ```
/// use detect_sums::analyze;
/// let analysis = analyze("1,2,3", "time-efficient");
/// assert_eq!(analysis.result.len(), 1);
/// assert_eq!(analysis.algorithm_used, "time-efficient");
/// ```
pub fn analyze(raw: &str, algorithm: &str) -> AnalysisResult {
    Analyzer::new().analyze(raw, algorithm)
}
