//! Shell sort with Knuth's increment sequence 1, 4, 13, 40, 121, ...
//!
//! Runs gapped insertion passes with shrinking gaps `h`. After the pass for `h` the slice is
//! h-sorted, i.e. it is the interleaving of `h` sorted subsequences. The final pass with `h == 1`
//! is a plain insertion sort over input that is by then mostly in order. Elements `h` apart can
//! cross equal elements in between, so the sort is unstable.
//!
//! Both the natural order and the comparator entry points run the full gapped procedure.

use core::cmp::Ordering;

use crate::primitives::{less_by, Counter, Ops};

sort_impl!(shell_sort);

/// Returns the gaps used to sort a slice of length `len`, largest first and ending in 1.
///
/// The starting gap is the first element of `h = 3h + 1`, seeded at 1, that is not less than
/// `len / 3`.
pub fn gaps(len: usize) -> Gaps {
    let mut h = 1;
    while h < len / 3 {
        h = 3 * h + 1;
    }

    Gaps { h }
}

/// Iterator over the Knuth gaps of a Shell sort pass sequence, see [`gaps`].
#[derive(Clone, Debug)]
pub struct Gaps {
    h: usize,
}

impl Iterator for Gaps {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.h == 0 {
            return None;
        }

        let h = self.h;
        self.h /= 3;

        Some(h)
    }
}

/// Checks that no element is strictly less than the element `h` positions earlier.
///
/// # Panics
///
/// Panics if `h` is zero.
pub fn is_h_sorted<T>(v: &[T], h: usize) -> bool
where
    T: Ord,
{
    is_h_sorted_by(v, h, |a, b| a.cmp(b))
}

/// Checks that `compare` orders no element strictly before the element `h` positions earlier.
///
/// # Panics
///
/// Panics if `h` is zero.
pub fn is_h_sorted_by<T, F>(v: &[T], h: usize, mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    assert!(h != 0, "gap must be non-zero");

    (h..v.len()).all(|i| !less_by(&v[i], &v[i - h], &mut compare))
}

fn shell_sort<T, E, F, C>(v: &mut [T], ops: &mut Ops<F, C>) -> Result<(), E>
where
    F: FnMut(&T, &T) -> Result<bool, E>,
    C: Counter,
{
    let len = v.len();
    if len < 2 {
        return Ok(());
    }

    for h in gaps(len) {
        for i in h..len {
            let mut j = i;
            while j >= h && ops.less(v, j, j - h)? {
                ops.exchange(v, j, j - h);
                j -= h;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SortError;

    #[test]
    fn concrete_scenario() {
        let mut v = [5, 3, 8, 1, 9, 2];
        sort(&mut v);
        assert_eq!(v, [1, 2, 3, 5, 8, 9]);
    }

    #[test]
    fn subrange_scenario() {
        let mut v = [9, 5, 3, 8, 1, 2];
        sort_range(&mut v, 1..=4);
        assert_eq!(v, [9, 1, 3, 5, 8, 2]);
    }

    #[test]
    fn knuth_gaps() {
        assert_eq!(gaps(10).collect::<Vec<_>>(), [4, 1]);
        assert_eq!(gaps(0).collect::<Vec<_>>(), [1]);
        assert_eq!(gaps(2).collect::<Vec<_>>(), [1]);
        assert_eq!(gaps(12).collect::<Vec<_>>(), [4, 1]);
        assert_eq!(gaps(14).collect::<Vec<_>>(), [4, 1]);
        assert_eq!(gaps(15).collect::<Vec<_>>(), [13, 4, 1]);
        assert_eq!(gaps(1_000).collect::<Vec<_>>(), [364, 121, 40, 13, 4, 1]);
    }

    #[test]
    fn h_sortedness() {
        // 4-sorted but not sorted: columns (0, 4, 8) (1, 5) (2, 6) (3, 7).
        let v = [1, 5, 2, 6, 3, 7, 4, 8, 9];
        assert!(is_h_sorted(&v, 4));
        assert!(!is_h_sorted(&v, 1));
        assert!(!is_sorted(&v));

        let v = [2, 1, 0];
        assert!(is_h_sorted(&v, 3));
        assert!(!is_h_sorted(&v, 2));

        assert!(is_h_sorted_by(&[3, 2, 1], 1, |a: &i32, b: &i32| b.cmp(a)));
        assert!(is_h_sorted::<i32>(&[], 1));
    }

    #[test]
    #[should_panic(expected = "gap must be non-zero")]
    fn zero_gap_panics() {
        is_h_sorted(&[1, 2, 3], 0);
    }

    #[test]
    fn sorted_output_is_h_sorted_for_every_gap() {
        let mut v = sort_test_tools::patterns::random(500);
        sort(&mut v);

        for h in gaps(v.len()) {
            assert!(is_h_sorted(&v, h));
        }
    }

    #[test]
    fn comparator_runs_gapped_passes() {
        let mut natural = (0..200).rev().collect::<Vec<i32>>();
        let mut custom = natural.clone();

        let natural_stats = sort_counted(&mut natural);
        let custom_stats = sort_by_counted(&mut custom, |a, b| a.cmp(b));

        assert_eq!(natural, custom);
        assert_eq!(natural_stats, custom_stats);

        // A single h == 1 pass over reversed input would need one exchange per inversion.
        assert!(custom_stats.exchanges < 199 * 200 / 2);
    }

    #[test]
    fn subrange_gaps_follow_range_length() {
        let original = sort_test_tools::patterns::random(100);
        let (lo, hi) = (10, 23);

        // 14 elements sort with gaps 4, 1. The whole slice would start at 40.
        assert_eq!(gaps(hi - lo + 1).collect::<Vec<_>>(), [4, 1]);
        assert_eq!(gaps(original.len()).next(), Some(40));

        let mut in_place = original.clone();
        let mut in_place_comparisons = 0u64;
        sort_range_by(&mut in_place, lo..=hi, |a, b| {
            in_place_comparisons += 1;
            a.cmp(b)
        });

        let mut standalone = original[lo..=hi].to_vec();
        let standalone_stats = sort_by_counted(&mut standalone, |a, b| a.cmp(b));

        assert_eq!(in_place_comparisons, standalone_stats.comparisons);
        assert_eq!(&in_place[lo..=hi], standalone.as_slice());
        assert_eq!(&in_place[..lo], &original[..lo]);
        assert_eq!(&in_place[(hi + 1)..], &original[(hi + 1)..]);

        let mut counted = original.clone();
        assert_eq!(sort_counted(&mut counted[lo..=hi]), standalone_stats);
    }

    #[test]
    fn sorted_input_has_no_exchanges() {
        let mut v = (0..100).collect::<Vec<i32>>();
        let stats = sort_counted(&mut v);

        assert_eq!(stats.exchanges, 0);
    }

    #[test]
    fn incomparable_is_reported() {
        let mut v = [f32::NAN, 1.0, 2.0, 0.0, 4.0];
        assert_eq!(try_sort(&mut v), Err(SortError::Incomparable));
    }
}
