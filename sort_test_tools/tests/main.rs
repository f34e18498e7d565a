//! Runs the suites against the standard library sort, a failure here is a bug in the suites.

use std::cmp::Ordering;
use std::ops::RangeInclusive;

use sort_test_tools::instantiate_sort_tests;
use sort_test_tools::Sort;

struct SortImpl {}

impl Sort for SortImpl {
    fn name() -> String {
        "rust_std_stable".into()
    }

    fn sort<T>(arr: &mut [T])
    where
        T: Ord,
    {
        arr.sort();
    }

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        arr.sort_by(compare);
    }

    fn sort_range<T>(arr: &mut [T], range: RangeInclusive<usize>)
    where
        T: Ord,
    {
        arr[range].sort();
    }

    fn sort_range_by<T, F>(arr: &mut [T], range: RangeInclusive<usize>, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        arr[range].sort_by(compare);
    }
}

instantiate_sort_tests!(SortImpl);
