// WHY: Wraps a detector call with timing, best-effort memory accounting and failure capture
// Detector failures become report data so the entry point never propagates them

use serde::Serialize;
use std::alloc::{GlobalAlloc, Layout, System};
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;
use tracing::{debug, warn};

use crate::algorithm::{complexity_for, ComplexityDescriptor};
use crate::sum_detector::{Combination, CombinationSet};

/// Execution metrics for one detector invocation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceReport {
    /// Detector display name, e.g. "Time Eff."
    pub algorithm: String,
    /// Milliseconds, rounded to 3 decimal places
    pub execution_time: f64,
    /// Bytes; zero when the probe cannot measure
    pub memory_used: u64,
    pub result: Vec<Combination>,
    pub result_count: usize,
    pub input_size: usize,
    /// Absent when the display name has no table entry
    pub complexity: Option<ComplexityDescriptor>,
    pub error: Option<String>,
}

/// Source of current heap usage, if the host can provide one
pub trait MemoryProbe {
    fn heap_bytes(&self) -> Option<u64>;
}

impl<T: MemoryProbe + ?Sized> MemoryProbe for &T {
    fn heap_bytes(&self) -> Option<u64> {
        (**self).heap_bytes()
    }
}

/// Probe for hosts without heap introspection
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMemoryProbe;

impl MemoryProbe for NoMemoryProbe {
    fn heap_bytes(&self) -> Option<u64> {
        None
    }
}

/// Global allocator wrapper that tracks live heap bytes
///
/// Install with `#[global_allocator]` and pass a reference as the probe.
/// Readings are process-wide, so concurrent allocations elsewhere show up in the delta.
pub struct CountingAllocator {
    inner: System,
    live: AtomicUsize,
}

impl CountingAllocator {
    pub const fn new() -> Self {
        Self {
            inner: System,
            live: AtomicUsize::new(0),
        }
    }

    pub fn live_bytes(&self) -> usize {
        self.live.load(Ordering::Relaxed)
    }
}

impl Default for CountingAllocator {
    fn default() -> Self {
        Self::new()
    }
}

unsafe impl GlobalAlloc for CountingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        let ptr = self.inner.alloc(layout);
        if !ptr.is_null() {
            self.live.fetch_add(layout.size(), Ordering::Relaxed);
        }
        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        let ptr = self.inner.alloc_zeroed(layout);
        if !ptr.is_null() {
            self.live.fetch_add(layout.size(), Ordering::Relaxed);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        self.inner.dealloc(ptr, layout);
        self.live.fetch_sub(layout.size(), Ordering::Relaxed);
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        let new_ptr = self.inner.realloc(ptr, layout, new_size);
        if !new_ptr.is_null() {
            self.live.fetch_add(new_size, Ordering::Relaxed);
            self.live.fetch_sub(layout.size(), Ordering::Relaxed);
        }
        new_ptr
    }
}

impl MemoryProbe for CountingAllocator {
    fn heap_bytes(&self) -> Option<u64> {
        Some(self.live_bytes() as u64)
    }
}

/// Run a detector and collect its metrics
///
/// Errors and panics inside the detector are converted to a string in
/// `error` and the result is replaced by an empty list.
pub fn run_with_metrics<F, P>(
    seq: &[i64],
    algorithm_name: &str,
    detector: F,
    probe: &P,
) -> PerformanceReport
where
    F: FnOnce(&[i64]) -> anyhow::Result<CombinationSet>,
    P: MemoryProbe + ?Sized,
{
    let start_memory = probe.heap_bytes();
    let start_time = Instant::now();

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| detector(seq)));

    let elapsed = start_time.elapsed();
    let end_memory = probe.heap_bytes();

    let (result, error) = match outcome {
        Ok(Ok(set)) => (set.into_vec(), None),
        Ok(Err(e)) => {
            warn!("{} failed: {}", algorithm_name, e);
            (Vec::new(), Some(e.to_string()))
        }
        Err(payload) => {
            let message = format!("detector panicked: {}", panic_message(payload.as_ref()));
            warn!("{} {}", algorithm_name, message);
            (Vec::new(), Some(message))
        }
    };

    // WHY: only report a delta when both readings exist; never invent a figure
    let memory_used = match (start_memory, end_memory) {
        (Some(before), Some(after)) => after.saturating_sub(before),
        _ => 0,
    };

    let execution_time = round_millis(elapsed.as_secs_f64() * 1000.0);
    debug!(
        "{} ran in {:.3}ms over {} values, {} results",
        algorithm_name,
        execution_time,
        seq.len(),
        result.len()
    );

    PerformanceReport {
        algorithm: algorithm_name.to_string(),
        execution_time,
        memory_used,
        result_count: result.len(),
        result,
        input_size: seq.len(),
        complexity: complexity_for(algorithm_name).copied(),
        error,
    }
}

fn round_millis(ms: f64) -> f64 {
    (ms * 1000.0).round() / 1000.0
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
