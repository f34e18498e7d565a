//! Comparison, exchange and verification primitives shared by all sorts.

use core::cmp::Ordering;
use core::convert::Infallible;
use core::ops::{Range, RangeInclusive};

use crate::error::SortError;

// --- Public ---

/// Returns `true` iff `a` strictly precedes `b` in natural order.
#[inline]
pub fn less<T>(a: &T, b: &T) -> bool
where
    T: Ord,
{
    a.lt(b)
}

/// Returns `true` iff `compare` orders `a` strictly before `b`.
#[inline]
pub fn less_by<T, F>(a: &T, b: &T, mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    compare(a, b) == Ordering::Less
}

/// Swaps the elements at `i` and `j`.
///
/// # Panics
///
/// Panics if `i` or `j` are out of bounds.
#[inline]
pub fn exchange<T>(v: &mut [T], i: usize, j: usize) {
    v.swap(i, j);
}

/// Checks that no element is strictly less than its predecessor.
pub fn is_sorted<T>(v: &[T]) -> bool
where
    T: Ord,
{
    is_sorted_by(v, |a, b| a.cmp(b))
}

/// Checks that no element is ordered strictly before its predecessor by `compare`.
pub fn is_sorted_by<T, F>(v: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    v.windows(2).all(|w| !less_by(&w[1], &w[0], &mut compare))
}

/// Validates the inclusive range `lo..=hi` against a slice of length `len` and converts it into
/// the equivalent half-open range.
///
/// `lo..=lo - 1` denotes the empty range at `lo` and is accepted for any `lo <= len`. An empty
/// slice also accepts `0..=0`, the `0..=len.saturating_sub(1)` whole-slice range, as empty.
pub fn check_range(len: usize, range: RangeInclusive<usize>) -> Result<Range<usize>, SortError> {
    let (lo, hi) = range.into_inner();

    if len == 0 && lo == 0 && hi == 0 {
        return Ok(0..0);
    }

    if lo > hi {
        // hi < lo, so hi + 1 can't overflow.
        if lo != hi + 1 {
            return Err(SortError::RangeInverted { lo, hi });
        }
        if lo > len {
            return Err(SortError::RangeStartOutOfBounds { lo, len });
        }

        return Ok(lo..lo);
    }

    if hi >= len {
        return Err(SortError::RangeOutOfBounds { hi, len });
    }

    Ok(lo..(hi + 1))
}

/// Observes the work a sort performs.
pub trait Counter {
    /// Called once before every invocation of the strict-less predicate.
    fn comparison(&mut self);

    /// Called once per exchange, including exchanges of a position with itself.
    fn exchange(&mut self);
}

impl Counter for () {
    #[inline(always)]
    fn comparison(&mut self) {}

    #[inline(always)]
    fn exchange(&mut self) {}
}

/// Number of comparisons and exchanges performed by a single sort call.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SortStats {
    pub comparisons: u64,
    pub exchanges: u64,
}

impl Counter for SortStats {
    #[inline]
    fn comparison(&mut self) {
        self.comparisons += 1;
    }

    #[inline]
    fn exchange(&mut self) {
        self.exchanges += 1;
    }
}

// --- Crate internal ---

/// Index based view of the primitives, as used by the core sort loops.
///
/// `is_less` is a strict-less predicate that may fail, the error is handed back to the caller of
/// the sort untouched.
pub(crate) struct Ops<F, C> {
    is_less: F,
    counter: C,
}

impl<F, C> Ops<F, C>
where
    C: Counter,
{
    #[inline]
    pub(crate) fn new(is_less: F, counter: C) -> Self {
        Self { is_less, counter }
    }

    /// `v[i] < v[j]`
    #[inline]
    pub(crate) fn less<T, E>(&mut self, v: &[T], i: usize, j: usize) -> Result<bool, E>
    where
        F: FnMut(&T, &T) -> Result<bool, E>,
    {
        self.counter.comparison();
        (self.is_less)(&v[i], &v[j])
    }

    #[inline]
    pub(crate) fn exchange<T>(&mut self, v: &mut [T], i: usize, j: usize) {
        self.counter.exchange();
        exchange(v, i, j);
    }

    #[inline]
    pub(crate) fn into_counter(self) -> C {
        self.counter
    }
}

#[inline]
pub(crate) fn partial_less<T>(a: &T, b: &T) -> Result<bool, SortError>
where
    T: PartialOrd,
{
    match a.partial_cmp(b) {
        Some(ord) => Ok(ord == Ordering::Less),
        None => Err(SortError::Incomparable),
    }
}

#[inline(always)]
pub(crate) fn into_ok<T>(res: Result<T, Infallible>) -> T {
    match res {
        Ok(val) => val,
        Err(never) => match never {},
    }
}
