use std::cmp::Ordering;
use std::ops::RangeInclusive;

pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;

    /// Sorts `arr[lo..=hi]`, the rest of `arr` must stay untouched.
    fn sort_range<T>(arr: &mut [T], range: RangeInclusive<usize>)
    where
        T: Ord;

    fn sort_range_by<T, F>(arr: &mut [T], range: RangeInclusive<usize>, compare: F)
    where
        F: FnMut(&T, &T) -> Ordering;
}

pub mod patterns;
