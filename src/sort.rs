//! Instrumented heap sort
//!
//! Classic binary max-heap selection sort over `[i32]`, counting every
//! comparison that promotes a child and every swap it performs.
//!
//! ```text
//!              0
//!        1            2
//!     3     4      5     6
//!    7 8   9 10  11 12 13 14
//!
//! left(i)  = 2i + 1
//! right(i) = 2i + 2
//! ```

use serde::Serialize;

/// Operation counter threaded through a single sort.
///
/// The four fields partition the events a sort performs. Their sum is the
/// operation count reported for that input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OpCounter {
    /// Build-phase outer iterations
    pub build_steps: u64,
    /// Sift-down comparisons that found a child strictly larger than the candidate
    pub promotions: u64,
    /// Sift-down swaps
    pub swaps: u64,
    /// Extraction-phase root swaps
    pub extractions: u64,
}

impl OpCounter {
    /// Create a zeroed counter
    pub fn new() -> Self {
        Self::default()
    }

    /// Total operation count
    pub fn total(&self) -> u64 {
        self.build_steps + self.promotions + self.swaps + self.extractions
    }
}

impl std::ops::AddAssign for OpCounter {
    fn add_assign(&mut self, rhs: Self) {
        self.build_steps += rhs.build_steps;
        self.promotions += rhs.promotions;
        self.swaps += rhs.swaps;
        self.extractions += rhs.extractions;
    }
}

/// Sort `seq` in place and return the number of operations performed.
///
/// # Example
///
/// ```rust
/// use heapcount::heap_sort;
///
/// let mut seq = vec![4, 1, 3, 2, 16, 9, 10, 14, 8, 7];
/// let ops = heap_sort(&mut seq);
///
/// assert_eq!(seq, vec![1, 2, 3, 4, 7, 8, 9, 10, 14, 16]);
/// assert_eq!(ops, 64);
/// ```
pub fn heap_sort(seq: &mut [i32]) -> u64 {
    let mut ops = OpCounter::new();
    heap_sort_with(seq, &mut ops);
    ops.total()
}

/// Sort `seq` in place, accumulating every event into `ops`.
pub fn heap_sort_with(seq: &mut [i32], ops: &mut OpCounter) {
    let n = seq.len();
    build_max_heap(seq, ops);

    for end in (1..n).rev() {
        // seq[..=end] is a max-heap, seq[end + 1..] is sorted
        ops.extractions += 1;
        seq.swap(0, end);
        max_heapify(seq, 0, end, ops);
    }
}

/// Turn `seq` into a max-heap in place.
///
/// Scans from `seq.len() / 2` down to the root, one counted step per index.
/// Fewer than two elements already form a heap, so no steps are taken.
pub fn build_max_heap(seq: &mut [i32], ops: &mut OpCounter) {
    let n = seq.len();
    if n < 2 {
        return;
    }

    for root in (0..=n / 2).rev() {
        ops.build_steps += 1;
        max_heapify(seq, root, n, ops);
    }
}

/// Sift the element at `root` down until the max-heap invariant holds over
/// `seq[..heap_size]`.
///
/// Only strictly larger children are promoted, so equal values never cost a
/// swap.
pub fn max_heapify(seq: &mut [i32], mut root: usize, heap_size: usize, ops: &mut OpCounter) {
    debug_assert!(heap_size <= seq.len());

    loop {
        let left = 2 * root + 1;
        let right = left + 1;
        let mut largest = root;

        if left < heap_size && seq[left] > seq[largest] {
            largest = left;
            ops.promotions += 1;
        }

        if right < heap_size && seq[right] > seq[largest] {
            largest = right;
            ops.promotions += 1;
        }

        if largest == root {
            return;
        }

        ops.swaps += 1;
        seq.swap(root, largest);
        root = largest;
    }
}

/// Check the max-heap invariant over `seq[..heap_size]`.
pub fn is_max_heap(seq: &[i32], heap_size: usize) -> bool {
    let heap = &seq[..heap_size.min(seq.len())];
    (1..heap.len()).all(|child| heap[(child - 1) / 2] >= heap[child])
}

/// Check that `seq` is in non-decreasing order.
pub fn is_sorted(seq: &[i32]) -> bool {
    seq.windows(2).all(|pair| pair[0] <= pair[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted_copy(seq: &[i32]) -> Vec<i32> {
        let mut v = seq.to_vec();
        v.sort_unstable();
        v
    }

    #[test]
    fn test_reference_trace() {
        let mut seq = vec![4, 1, 3, 2, 16, 9, 10, 14, 8, 7];
        let mut ops = OpCounter::new();
        heap_sort_with(&mut seq, &mut ops);

        assert_eq!(seq, vec![1, 2, 3, 4, 7, 8, 9, 10, 14, 16]);
        assert_eq!(
            ops,
            OpCounter {
                build_steps: 6,
                promotions: 28,
                swaps: 21,
                extractions: 9,
            }
        );
        assert_eq!(ops.total(), 64);
    }

    #[test]
    fn test_empty_and_single() {
        let mut empty: Vec<i32> = vec![];
        assert_eq!(heap_sort(&mut empty), 0);
        assert!(empty.is_empty());

        let mut single = vec![42];
        assert_eq!(heap_sort(&mut single), 0);
        assert_eq!(single, vec![42]);
    }

    #[test]
    fn test_two_elements() {
        let mut asc = vec![1, 2];
        assert_eq!(heap_sort(&mut asc), 5);
        assert_eq!(asc, vec![1, 2]);

        let mut desc = vec![2, 1];
        assert_eq!(heap_sort(&mut desc), 3);
        assert_eq!(desc, vec![1, 2]);
    }

    #[test]
    fn test_reverse_sorted() {
        let mut seq: Vec<i32> = (1..=10).rev().collect();
        let mut ops = OpCounter::new();
        heap_sort_with(&mut seq, &mut ops);

        assert_eq!(seq, (1..=10).collect::<Vec<_>>());
        assert_eq!(ops.total(), 42);
    }

    #[test]
    fn test_all_equal_costs_baseline_only() {
        let mut seq = vec![5; 8];
        let mut ops = OpCounter::new();
        heap_sort_with(&mut seq, &mut ops);

        assert_eq!(ops.promotions, 0);
        assert_eq!(ops.swaps, 0);
        assert_eq!(ops.build_steps, 5);
        assert_eq!(ops.extractions, 7);
        assert_eq!(seq, vec![5; 8]);
    }

    #[test]
    fn test_sorted_input_is_stable_and_deterministic() {
        let mut seq: Vec<i32> = (1..=10).collect();
        let first = heap_sort(&mut seq);
        assert_eq!(seq, (1..=10).collect::<Vec<_>>());

        let second = heap_sort(&mut seq);
        assert_eq!(first, second);
        assert_eq!(seq, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_build_max_heap_establishes_invariant() {
        let mut seq = vec![4, 1, 3, 2, 16, 9, 10, 14, 8, 7];
        let mut ops = OpCounter::new();
        build_max_heap(&mut seq, &mut ops);

        assert!(is_max_heap(&seq, seq.len()));
        assert_eq!(seq[0], 16);
        assert_eq!(ops.build_steps, 6);
    }

    #[test]
    fn test_max_heapify_single_step() {
        // Children of the root are already heaps
        let mut seq = vec![1, 5, 4, 3, 2];
        let mut ops = OpCounter::new();
        let len = seq.len();
        max_heapify(&mut seq, 0, len, &mut ops);

        assert!(is_max_heap(&seq, seq.len()));
        assert_eq!(seq, vec![5, 3, 4, 1, 2]);
        assert_eq!(ops.promotions, 2);
        assert_eq!(ops.swaps, 2);
    }

    #[test]
    fn test_heap_holds_after_every_extraction() {
        let mut seq = vec![5, -3, 9, 9, 0, 12, -3, 7, 5, 1, 12, 4, -8, 2];
        let mut ops = OpCounter::new();
        build_max_heap(&mut seq, &mut ops);

        for end in (1..seq.len()).rev() {
            seq.swap(0, end);
            max_heapify(&mut seq, 0, end, &mut ops);
            assert!(is_max_heap(&seq, end), "heap broken at size {}: {:?}", end, seq);
            assert!(is_sorted(&seq[end..]));
        }
        assert!(is_sorted(&seq));
    }

    #[test]
    fn test_max_heapify_respects_heap_size() {
        let mut seq = vec![1, 2, 9];
        let mut ops = OpCounter::new();
        max_heapify(&mut seq, 0, 2, &mut ops);

        assert_eq!(seq, vec![2, 1, 9]);
        assert_eq!(ops.total(), 2);
    }

    #[test]
    fn test_duplicates_are_preserved() {
        let input = vec![3, 1, 3, 2, 1, 3, 2];
        let mut seq = input.clone();
        heap_sort(&mut seq);
        assert_eq!(seq, sorted_copy(&input));
    }

    #[test]
    fn test_is_max_heap() {
        assert!(is_max_heap(&[], 0));
        assert!(is_max_heap(&[9, 7, 8, 1, 2], 5));
        assert!(!is_max_heap(&[1, 7, 8], 3));
        assert!(is_max_heap(&[9, 7, 8, 100], 3));
    }

    #[test]
    fn test_counter_add_assign() {
        let mut a = OpCounter {
            build_steps: 1,
            promotions: 2,
            swaps: 3,
            extractions: 4,
        };
        let b = a;
        a += b;
        assert_eq!(a.total(), 20);
        assert_eq!(a.extractions, 8);
    }
}
