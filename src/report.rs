//! Console report rendering
//!
//! Text output mirrors the classic per-size layout:
//!
//! ```text
//! Array Size: 10
//!     Number of Operations:
//!     ----------------------------
//!     Operations on array 0: 57
//!     ...
//!     ----------------------------
//!     Average operations: 55.21
//!     Expected --> O(n(lgn)): 33
//!     Actual/Expected = 1.6732
//! ```

use std::fmt::Write;

use crate::experiment::{ExperimentReport, SizeReport};

const RULE: &str = "----------------------------";

/// Render one size's block of the text report.
pub fn render_size(report: &SizeReport, show_trials: bool) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "Array Size: {}", report.size);
    let _ = writeln!(out, "\tNumber of Operations:");
    let _ = writeln!(out, "\t{}", RULE);
    if show_trials {
        for (i, count) in report.counts.iter().enumerate() {
            let _ = writeln!(out, "\tOperations on array {}: {}", i, count);
        }
        let _ = writeln!(out, "\t{}", RULE);
    }
    let _ = writeln!(out, "\tAverage operations: {:.2}", report.mean);
    let _ = writeln!(out, "\tExpected --> O(n(lgn)): {}", report.expected);
    match report.ratio {
        Some(ratio) => {
            let _ = writeln!(out, "\tActual/Expected = {:.4}", ratio);
        }
        None => {
            let _ = writeln!(out, "\tActual/Expected = n/a");
        }
    }

    out
}

/// Render the whole report as pretty-printed JSON.
pub fn render_json(report: &ExperimentReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::OpCounter;

    fn sample_size() -> SizeReport {
        SizeReport {
            size: 10,
            counts: vec![60, 50],
            totals: OpCounter {
                build_steps: 12,
                promotions: 50,
                swaps: 30,
                extractions: 18,
            },
            mean: 55.0,
            expected: 33,
            ratio: Some(55.0 / 33.0),
        }
    }

    fn sample_report() -> ExperimentReport {
        ExperimentReport {
            trials: 2,
            seed: Some(4),
            sizes: vec![sample_size()],
        }
    }

    #[test]
    fn test_render_size_with_trials() {
        let text = render_size(&sample_size(), true);
        assert!(text.starts_with("Array Size: 10\n"));
        assert!(text.contains("\tOperations on array 0: 60\n"));
        assert!(text.contains("\tOperations on array 1: 50\n"));
        assert!(text.contains("\tAverage operations: 55.00\n"));
        assert!(text.contains("\tExpected --> O(n(lgn)): 33\n"));
        assert!(text.contains("\tActual/Expected = 1.6667\n"));
    }

    #[test]
    fn test_render_size_without_trials() {
        let text = render_size(&sample_size(), false);
        assert!(!text.contains("Operations on array"));
        assert!(text.contains("Average operations"));
    }

    #[test]
    fn test_render_missing_ratio() {
        let mut size = sample_size();
        size.ratio = None;
        assert!(render_size(&size, false).contains("Actual/Expected = n/a"));
    }

    #[test]
    fn test_render_json() {
        let json = render_json(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["trials"], 2);
        assert_eq!(value["seed"], 4);
        assert_eq!(value["sizes"][0]["size"], 10);
        assert_eq!(value["sizes"][0]["counts"][1], 50);
        assert_eq!(value["sizes"][0]["expected"], 33);
        assert_eq!(value["sizes"][0]["totals"]["promotions"], 50);
    }
}
