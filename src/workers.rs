// src/workers.rs

//! Worker-count detection.

use std::thread::available_parallelism;

/// Number of logical CPUs visible to the process.
///
/// Delegates to [`std::thread::available_parallelism`], which honours
/// OS-level restrictions such as cgroup CPU quotas and affinity masks.
/// Falls back to 1 if the count cannot be determined.
pub fn detect() -> usize {
    available_parallelism().map(|n| n.get()).unwrap_or(1)
}
