//! Subset enumeration.
//!
//! Produces every non-empty subset of `{start, …, n-1}` with at most `cap`
//! elements. The order is that of a depth-first include/exclude tree in
//! which the branch *including* the current index is explored first, and a
//! subset is emitted at the leaf where all indices have been decided:
//!
//! ```text
//! n = 4, start = 1, unbounded:  [1,2,3] [1,2] [1,3] [1] [2,3] [2] [3]
//! n = 4, start = 1, cap = 1:    [1] [2] [3]
//! ```
//!
//! The exact optimizer's tie-break depends on this order. The traversal uses
//! an explicit stack, so catalog size is not limited by recursion depth.

/// A pending decision: indices below `index` are settled, `subset` holds the
/// ones that were included.
#[derive(Debug)]
struct Frame {
    index: usize,
    subset: Vec<usize>,
}

/// Iterator over non-empty bounded-cardinality subsets.
///
/// # Example
///
/// ```
/// use assortopt_solver::SubsetEnumerator;
///
/// let subsets: Vec<Vec<usize>> = SubsetEnumerator::new(4, 1, None).collect();
/// assert_eq!(
///     subsets,
///     vec![vec![1, 2, 3], vec![1, 2], vec![1, 3], vec![1], vec![2, 3], vec![2], vec![3]]
/// );
/// ```
#[derive(Debug)]
pub struct SubsetEnumerator {
    end: usize,
    cap: usize,
    stack: Vec<Frame>,
}

impl SubsetEnumerator {
    /// Enumerates subsets of `{start, …, end-1}` with at most `cap` elements.
    ///
    /// `cap = None` means unbounded. A cap of zero or an empty range yields
    /// nothing.
    pub fn new(end: usize, start: usize, cap: Option<usize>) -> Self {
        let cap = cap.unwrap_or(end);
        let mut stack = Vec::with_capacity(end.saturating_sub(start) + 1);
        if cap > 0 && start < end {
            stack.push(Frame {
                index: start,
                subset: Vec::new(),
            });
        }
        Self { end, cap, stack }
    }

    /// Number of subsets this enumerator yields in total.
    pub fn total(&self) -> u128 {
        match self.stack.first() {
            Some(root) => subset_count(self.end - root.index, self.cap),
            None => 0,
        }
    }
}

impl Iterator for SubsetEnumerator {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(Frame { index, subset }) = self.stack.pop() {
            // A full subset can only be extended by exclusions, which all
            // lead to the same leaf.
            if subset.len() == self.cap {
                return Some(subset);
            }
            if index == self.end {
                if subset.is_empty() {
                    continue;
                }
                return Some(subset);
            }

            let mut included = subset.clone();
            included.push(index);

            // Pushed last, popped first.
            self.stack.push(Frame {
                index: index + 1,
                subset,
            });
            self.stack.push(Frame {
                index: index + 1,
                subset: included,
            });
        }
        None
    }
}

/// Collects [`SubsetEnumerator::new`] into a vector.
pub fn enumerate_subsets(end: usize, start: usize, cap: Option<usize>) -> Vec<Vec<usize>> {
    SubsetEnumerator::new(end, start, cap).collect()
}

/// `Σ_{k=1}^{min(cap, m)} C(m, k)`: the number of non-empty subsets of an
/// `m`-element range with at most `cap` elements. Saturates at `u128::MAX`.
pub fn subset_count(m: usize, cap: usize) -> u128 {
    let mut total: u128 = 0;
    let mut binomial: u128 = 1;
    for k in 1..=cap.min(m) {
        // C(m, k) = C(m, k-1) * (m - k + 1) / k, exact at every step.
        binomial = match binomial.checked_mul((m - k + 1) as u128) {
            Some(product) => product / k as u128,
            None => return u128::MAX,
        };
        total = total.saturating_add(binomial);
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrestricted_order() {
        assert_eq!(
            enumerate_subsets(4, 1, None),
            vec![
                vec![1, 2, 3],
                vec![1, 2],
                vec![1, 3],
                vec![1],
                vec![2, 3],
                vec![2],
                vec![3]
            ]
        );
    }

    #[test]
    fn test_restricted_to_singletons() {
        assert_eq!(enumerate_subsets(4, 1, Some(1)), vec![vec![1], vec![2], vec![3]]);
    }

    #[test]
    fn test_cap_two_order() {
        assert_eq!(
            enumerate_subsets(3, 0, Some(2)),
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0],
                vec![1, 2],
                vec![1],
                vec![2]
            ]
        );
    }

    #[test]
    fn test_empty_ranges() {
        assert!(enumerate_subsets(3, 3, None).is_empty());
        assert!(enumerate_subsets(3, 5, None).is_empty());
        assert!(enumerate_subsets(3, 0, Some(0)).is_empty());
        assert_eq!(SubsetEnumerator::new(3, 0, Some(0)).total(), 0);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(
            enumerate_subsets(7, 2, Some(3)),
            enumerate_subsets(7, 2, Some(3))
        );
    }

    #[test]
    fn test_completeness_matches_binomial_sum() {
        for n in 0..9 {
            for start in 0..=n {
                for cap in 1..=n.max(1) {
                    let subsets = enumerate_subsets(n, start, Some(cap));
                    let expected = subset_count(n - start, cap);
                    assert_eq!(subsets.len() as u128, expected, "n={n} start={start} cap={cap}");
                    assert_eq!(SubsetEnumerator::new(n, start, Some(cap)).total(), expected);
                }
            }
        }
    }

    #[test]
    fn test_subsets_are_distinct_sorted_and_bounded() {
        let subsets = enumerate_subsets(8, 0, Some(3));
        let mut seen = std::collections::HashSet::new();
        for subset in &subsets {
            assert!(!subset.is_empty() && subset.len() <= 3);
            assert!(subset.windows(2).all(|w| w[0] < w[1]));
            assert!(seen.insert(subset.clone()));
        }
    }

    #[test]
    fn test_subset_count() {
        assert_eq!(subset_count(3, 3), 7);
        assert_eq!(subset_count(3, 1), 3);
        assert_eq!(subset_count(10, 4), 10 + 45 + 120 + 210);
        assert_eq!(subset_count(0, 5), 0);
        assert_eq!(subset_count(64, 64), u64::MAX as u128);
    }
}
