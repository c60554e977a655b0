//! Theoretical n log n reference bound

/// `floor(log2(n) * n)`, the reference operation estimate for size `n`.
///
/// Returns 0 for `n == 0`.
pub fn n_log_n(n: u64) -> u64 {
    if n == 0 {
        return 0;
    }
    let n = n as f64;
    (n.log2() * n).floor() as u64
}
