//! Heapcount - Heap Sort Operation Count Analysis
//!
//! Measures how many comparisons and swaps heap sort performs on random
//! arrays of increasing size, and compares the observed mean against the
//! `n log n` bound.
//!
//! # Features
//!
//! - **Instrumented heap sort**: every promoting comparison and every swap is counted
//! - **Event breakdown**: build steps, promotions, swaps and extractions tracked separately
//! - **Random inputs**: uniform values in `[1, 1000]`, optionally seeded for reproducible runs
//! - **Experiment driver**: powers-of-ten sizes, repeated trials, mean vs. bound
//!
//! # Example
//!
//! ```rust
//! use heapcount::{heap_sort, n_log_n, random_sequence};
//!
//! let mut seq = random_sequence(100);
//! let ops = heap_sort(&mut seq);
//!
//! assert!(seq.windows(2).all(|w| w[0] <= w[1]));
//! assert!(ops > n_log_n(100) / 2);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   Generator     │  uniform [1, 1000]
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   Heap Sort     │  build heap, extract, count
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   Experiment    │  mean over trials vs. n log n
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   Report        │  text or JSON
//! └─────────────────┘
//! ```

#![warn(clippy::all)]

pub mod bound;
pub mod config;
pub mod experiment;
pub mod generate;
pub mod report;
pub mod sort;

// Re-export commonly used types
pub use bound::n_log_n;
pub use config::{
    ConfigError, ConfigResult, ExperimentConfig, HeapcountConfig, OutputConfig, OutputFormat,
};
pub use experiment::{
    Experiment, ExperimentError, ExperimentReport, ExperimentResult, SizeReport,
};
pub use generate::{random_sequence, random_sequence_with, VALUE_MAX, VALUE_MIN};
pub use sort::{
    build_max_heap, heap_sort, heap_sort_with, is_max_heap, is_sorted, max_heapify, OpCounter,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
