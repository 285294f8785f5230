// End-to-end behaviour of the analyze entry point
// WHY: Exercises parsing, selection, profiling and assembly together as a caller sees them

use detect_sums::{analyze, Analyzer, Combination, CountingAllocator};

#[path = "integration/mod.rs"]
mod test_utils;
use test_utils::{assert_valid_combinations, sorted_triples};

const EMPTY_INPUT_MESSAGE: &str = "Please enter a valid input string (comma-separated numbers)";

#[test]
fn test_basic_case() {
    let analysis = analyze("1,2,3", "time-efficient");

    assert_eq!(analysis.input, vec![1, 2, 3]);
    assert!(analysis.error.is_none());
    assert_eq!(analysis.result, vec![Combination { pa: 0, pb: 1, sum: 2 }]);
    assert_eq!(analysis.performance_metrics.unwrap().result_count, 1);
}

#[test]
fn test_multiple_combinations() {
    let analysis = analyze("1,2,3,4", "memory-efficient");

    assert_eq!(analysis.input, vec![1, 2, 3, 4]);
    assert_eq!(sorted_triples(&analysis), vec![(0, 1, 2), (0, 2, 3)]);
    assert_valid_combinations(&analysis);
    assert_eq!(analysis.performance_metrics.unwrap().result_count, 2);
}

#[test]
fn test_no_combinations() {
    for (raw, algorithm) in [
        ("1,2,4", "memory-efficient"),
        ("3,0,2", "time-efficient"),
        ("3,5,7,11,13", "memory-efficient"),
        ("5", "memory-efficient"),
        ("3,7", "time-efficient"),
    ] {
        let analysis = analyze(raw, algorithm);
        assert!(analysis.error.is_none(), "{raw}");
        assert!(analysis.result.is_empty(), "{raw}");
        assert_eq!(analysis.performance_metrics.unwrap().result_count, 0, "{raw}");
    }
}

#[test]
fn test_duplicates_and_edge_values() {
    for raw in ["3,0,3", "1,2,1,3", "-1,2,1", "-3,-1,-4", "0,0,0", "0,5,5", "1000000,2000000,3000000"] {
        for algorithm in ["time-efficient", "memory-efficient"] {
            let analysis = analyze(raw, algorithm);
            assert!(analysis.error.is_none(), "{raw} with {algorithm}");
            assert!(!analysis.result.is_empty(), "{raw} with {algorithm}");
            assert_valid_combinations(&analysis);
        }
    }
}

#[test]
fn test_sum_position_shared_by_disjoint_pairs() {
    let analysis = analyze("1,2,3,4,5", "time-efficient");
    let triples = sorted_triples(&analysis);
    assert!(triples.contains(&(0, 3, 4)));
    assert!(triples.contains(&(1, 2, 4)));
    assert_eq!(triples.len(), 4);
}

#[test]
fn test_validation_errors() {
    let cases = [
        ("", "time-efficient", EMPTY_INPUT_MESSAGE.to_string()),
        ("   ", "memory-efficient", EMPTY_INPUT_MESSAGE.to_string()),
        ("1,,3", "memory-efficient", "Empty value at position 2".to_string()),
        ("1,2,3,", "time-efficient", "Empty value at position 4".to_string()),
        (",1,2,3", "memory-efficient", "Empty value at position 1".to_string()),
        ("1,abc,3", "time-efficient", "Invalid integer \"abc\" at position 2".to_string()),
        ("1,2.5,3", "memory-efficient", "Invalid integer \"2.5\" at position 2".to_string()),
        ("1,2,invalid,4", "time-efficient", "Invalid integer \"invalid\" at position 3".to_string()),
    ];

    for (raw, algorithm, expected) in cases {
        let analysis = analyze(raw, algorithm);
        assert_eq!(analysis.error.as_deref(), Some(expected.as_str()), "input {raw:?}");
        assert!(analysis.input.is_empty());
        assert!(analysis.result.is_empty());
        assert!(analysis.performance_metrics.is_none());
        assert_eq!(analysis.algorithm_used, algorithm);
    }
}

#[test]
fn test_whitespace_variants_parse_identically() {
    let expected = analyze("1,2,3", "time-efficient");
    for raw in ["1, 2, 3", " 1 , 2 , 3 "] {
        let analysis = analyze(raw, "time-efficient");
        assert_eq!(analysis.input, expected.input);
        assert_eq!(analysis.result, expected.result);
    }
}

#[test]
fn test_performance_metrics_fields() {
    let analysis = analyze("1,2,3,4,5", "time-efficient");
    let metrics = analysis.performance_metrics.clone().unwrap();

    assert_eq!(metrics.algorithm, "Time Eff.");
    assert!(metrics.execution_time >= 0.0);
    assert_eq!(metrics.memory_used, 0);
    assert_eq!(metrics.input_size, 5);
    assert_eq!(metrics.result_count, analysis.result.len());
    assert_eq!(metrics.result, analysis.result);
    assert_eq!(metrics.complexity.unwrap().description, "Binary search optimized");
    assert!(metrics.error.is_none());
}

#[test]
fn test_unknown_algorithm_uses_fallback() {
    let analysis = analyze("1,2,3", "bogus");
    assert_eq!(analysis.algorithm_used, "bogus");
    assert_eq!(analysis.result, vec![Combination { pa: 0, pb: 1, sum: 2 }]);
    assert_eq!(analysis.performance_metrics.unwrap().algorithm, "Time Eff.");
}

#[test]
fn test_idempotence() {
    for algorithm in ["time-efficient", "memory-efficient", "bogus"] {
        let first = analyze("3,0,3,6,-3,3", algorithm);
        let second = analyze("3,0,3,6,-3,3", algorithm);
        assert_eq!(first.input, second.input);
        assert_eq!(first.result, second.result);
        assert_eq!(first.error, second.error);
        assert_eq!(first.algorithm_used, second.algorithm_used);
    }
}

#[test]
fn test_both_algorithms_agree_on_moderate_input() {
    let raw: Vec<String> = (1..=15).map(|v| v.to_string()).collect();
    let raw = raw.join(",");

    let time = analyze(&raw, "time-efficient");
    let memory = analyze(&raw, "memory-efficient");

    assert_eq!(time.input, memory.input);
    assert_eq!(sorted_triples(&time), sorted_triples(&memory));
    assert_valid_combinations(&time);
    assert!(time.performance_metrics.unwrap().execution_time < 5000.0);
}

#[test]
fn test_full_i64_range_finds_every_combination() {
    // Pairs whose sum leaves the i64 range are skipped, the rest still count
    let raw = "9223372036854775807,1,2,3,-9223372036854775808,-9223372036854775807";
    let time = analyze(raw, "time-efficient");
    let memory = analyze(raw, "memory-efficient");

    for analysis in [&time, &memory] {
        assert!(analysis.error.is_none());
        assert!(analysis.performance_metrics.as_ref().unwrap().error.is_none());
        assert_valid_combinations(analysis);
        // 1 + 2 = 3 and MIN + 1 = MIN + 1
        assert!(sorted_triples(analysis).contains(&(1, 2, 3)));
        assert!(sorted_triples(analysis).contains(&(1, 4, 5)));
    }
    assert_eq!(sorted_triples(&time), sorted_triples(&memory));
}

#[test]
fn test_counting_allocator_as_probe() {
    // Not installed as the global allocator here, so it never sees an allocation
    let allocator = CountingAllocator::new();
    let analysis = Analyzer::with_probe(&allocator).analyze("1,2,3,4", "memory-efficient");
    assert_eq!(analysis.performance_metrics.unwrap().memory_used, 0);
    assert_eq!(analysis.result.len(), 2);
}
