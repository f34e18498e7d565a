//! Elementary in-place comparison sorts: selection sort, insertion sort and shell sort.
//!
//! Every algorithm module exposes the same set of entry points, generated by `sort_impl!` from
//! the module's core routine. The core routines are written once against a fallible strict-less
//! predicate, the infallible entry points instantiate them with [`core::convert::Infallible`].

macro_rules! sort_impl {
    ($sort_fn:ident) => {
        pub use crate::primitives::{is_sorted, is_sorted_by};

        /// Sorts the slice in ascending natural order.
        #[inline]
        pub fn sort<T>(v: &mut [T])
        where
            T: Ord,
        {
            let mut ops = crate::primitives::Ops::new(
                |a: &T, b: &T| Ok::<bool, core::convert::Infallible>(crate::primitives::less(a, b)),
                (),
            );
            crate::primitives::into_ok($sort_fn(v, &mut ops));
        }

        /// Sorts the slice with a comparator function.
        ///
        /// The comparator must define a total order, otherwise the resulting order is
        /// unspecified. The slice always ends up holding the same elements it started with.
        #[inline]
        pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
        where
            F: FnMut(&T, &T) -> core::cmp::Ordering,
        {
            let mut ops = crate::primitives::Ops::new(
                |a: &T, b: &T| {
                    Ok::<bool, core::convert::Infallible>(crate::primitives::less_by(
                        a,
                        b,
                        &mut compare,
                    ))
                },
                (),
            );
            crate::primitives::into_ok($sort_fn(v, &mut ops));
        }

        /// Sorts `v[lo..=hi]` in ascending natural order, leaving the rest of `v` untouched.
        ///
        /// # Panics
        ///
        /// Panics if the range reaches past the end of `v` or `lo > hi + 1`.
        #[inline]
        #[track_caller]
        pub fn sort_range<T>(v: &mut [T], range: core::ops::RangeInclusive<usize>)
        where
            T: Ord,
        {
            let range = match crate::primitives::check_range(v.len(), range) {
                Ok(range) => range,
                Err(err) => panic!("{err}"),
            };

            sort(&mut v[range]);
        }

        /// Sorts `v[lo..=hi]` with a comparator function, leaving the rest of `v` untouched.
        ///
        /// # Panics
        ///
        /// Panics if the range reaches past the end of `v` or `lo > hi + 1`.
        #[inline]
        #[track_caller]
        pub fn sort_range_by<T, F>(v: &mut [T], range: core::ops::RangeInclusive<usize>, compare: F)
        where
            F: FnMut(&T, &T) -> core::cmp::Ordering,
        {
            let range = match crate::primitives::check_range(v.len(), range) {
                Ok(range) => range,
                Err(err) => panic!("{err}"),
            };

            sort_by(&mut v[range], compare);
        }

        /// Sorts a slice of partially ordered elements.
        ///
        /// Returns [`SortError::Incomparable`](crate::error::SortError::Incomparable) as soon as
        /// two elements without an order relation are compared, e.g. a `NaN` float. In that case
        /// the slice is left as a permutation of its input.
        #[inline]
        pub fn try_sort<T>(v: &mut [T]) -> Result<(), crate::error::SortError>
        where
            T: PartialOrd,
        {
            let mut ops = crate::primitives::Ops::new(crate::primitives::partial_less::<T>, ());
            $sort_fn(v, &mut ops)
        }

        /// Like [`try_sort`] restricted to `v[lo..=hi]`, reporting an invalid range as an error
        /// instead of panicking.
        #[inline]
        pub fn try_sort_range<T>(
            v: &mut [T],
            range: core::ops::RangeInclusive<usize>,
        ) -> Result<(), crate::error::SortError>
        where
            T: PartialOrd,
        {
            let range = crate::primitives::check_range(v.len(), range)?;
            try_sort(&mut v[range])
        }

        /// Sorts the slice with a fallible comparator function.
        ///
        /// The first error returned by `compare` aborts the sort and is handed back unchanged.
        #[inline]
        pub fn try_sort_by<T, E, F>(v: &mut [T], mut compare: F) -> Result<(), E>
        where
            F: FnMut(&T, &T) -> Result<core::cmp::Ordering, E>,
        {
            let mut ops = crate::primitives::Ops::new(
                |a: &T, b: &T| compare(a, b).map(|ord| ord.is_lt()),
                (),
            );
            $sort_fn(v, &mut ops)
        }

        /// Sorts the slice in ascending natural order and reports the work done.
        #[inline]
        pub fn sort_counted<T>(v: &mut [T]) -> crate::primitives::SortStats
        where
            T: Ord,
        {
            let mut ops = crate::primitives::Ops::new(
                |a: &T, b: &T| Ok::<bool, core::convert::Infallible>(crate::primitives::less(a, b)),
                crate::primitives::SortStats::default(),
            );
            crate::primitives::into_ok($sort_fn(v, &mut ops));

            ops.into_counter()
        }

        /// Sorts the slice with a comparator function and reports the work done.
        #[inline]
        pub fn sort_by_counted<T, F>(v: &mut [T], mut compare: F) -> crate::primitives::SortStats
        where
            F: FnMut(&T, &T) -> core::cmp::Ordering,
        {
            let mut ops = crate::primitives::Ops::new(
                |a: &T, b: &T| {
                    Ok::<bool, core::convert::Infallible>(crate::primitives::less_by(
                        a,
                        b,
                        &mut compare,
                    ))
                },
                crate::primitives::SortStats::default(),
            );
            crate::primitives::into_ok($sort_fn(v, &mut ops));

            ops.into_counter()
        }
    };
}

pub mod error;
pub mod primitives;

pub mod insertion;
pub mod selection;
pub mod shell;

pub use error::SortError;
pub use primitives::SortStats;
