// WHY: Maps algorithm identifiers to detector implementations and their reported complexity
// Unknown identifiers fall back to the time-efficient detector rather than failing

use serde::Serialize;
use tracing::debug;

use crate::sum_detector::{detect_sums_memory_efficient, detect_sums_time_efficient, DetectorFn};

/// Identifier used when none is given, and the fallback for unrecognized identifiers
pub const DEFAULT_ALGORITHM: &str = "time-efficient";

/// Reporting-only complexity classification; never consulted for execution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComplexityDescriptor {
    pub time: &'static str,
    pub space: &'static str,
    pub description: &'static str,
}

/// Complexity metadata keyed by detector display name
/// The memory-efficient space label ignores the dedup set; kept as published
pub const COMPLEXITY_TABLE: [(&str, ComplexityDescriptor); 2] = [
    (
        "Time Eff.",
        ComplexityDescriptor {
            time: "O(n² log n)",
            space: "O(n)",
            description: "Binary search optimized",
        },
    ),
    (
        "Memory Eff.",
        ComplexityDescriptor {
            time: "O(n³)",
            space: "O(1)",
            description: "Triple nested loop",
        },
    ),
];

/// Look up complexity metadata by display name
pub fn complexity_for(display_name: &str) -> Option<&'static ComplexityDescriptor> {
    COMPLEXITY_TABLE
        .iter()
        .find(|(name, _)| *name == display_name)
        .map(|(_, descriptor)| descriptor)
}

/// Detection strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    #[default]
    TimeEfficient,
    MemoryEfficient,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::MemoryEfficient, Algorithm::TimeEfficient];

    /// Strict lookup; `None` for anything but the two known identifiers
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        match identifier {
            "time-efficient" => Some(Self::TimeEfficient),
            "memory-efficient" => Some(Self::MemoryEfficient),
            _ => None,
        }
    }

    /// Resolve an identifier, falling back to the time-efficient detector
    pub fn resolve(identifier: &str) -> Self {
        Self::from_identifier(identifier).unwrap_or_else(|| {
            debug!("Unknown algorithm {:?}, falling back to {}", identifier, DEFAULT_ALGORITHM);
            Self::TimeEfficient
        })
    }

    pub fn identifier(self) -> &'static str {
        match self {
            Self::TimeEfficient => "time-efficient",
            Self::MemoryEfficient => "memory-efficient",
        }
    }

    /// Short label shown in performance reports
    pub fn display_name(self) -> &'static str {
        match self {
            Self::TimeEfficient => "Time Eff.",
            Self::MemoryEfficient => "Memory Eff.",
        }
    }

    /// Longer label for option lists
    pub fn label(self) -> &'static str {
        match self {
            Self::TimeEfficient => "Time Efficient",
            Self::MemoryEfficient => "Memory Efficient",
        }
    }

    pub fn detector(self) -> DetectorFn {
        match self {
            Self::TimeEfficient => detect_sums_time_efficient,
            Self::MemoryEfficient => detect_sums_memory_efficient,
        }
    }

    pub fn complexity(self) -> Option<&'static ComplexityDescriptor> {
        complexity_for(self.display_name())
    }
}
