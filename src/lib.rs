pub mod algorithm;
pub mod analysis;
pub mod input_parser;
pub mod performance;
pub mod report;
pub mod sum_detector;

// Re-export main types for convenient access
pub use analysis::{analyze, AnalysisResult, Analyzer};
pub use algorithm::{Algorithm, ComplexityDescriptor, DEFAULT_ALGORITHM};
pub use input_parser::{format_input, parse_sequence, ValidationError};

// Re-export detector building blocks for benchmarking and comparison
pub use sum_detector::{
    compare_detectors, detect_sums_memory_efficient, detect_sums_time_efficient,
    CanonicalKey, Combination, CombinationSet, DetectorComparison,
};
pub use performance::{run_with_metrics, CountingAllocator, MemoryProbe, NoMemoryProbe, PerformanceReport};
