//! Insertion sort.
//!
//! Stable, in-place and adaptive. Each element is moved left by adjacent exchanges until its
//! predecessor is no longer strictly greater, so it never passes an equal element. Already sorted
//! input costs `len - 1` comparisons and no exchanges, reversed input Θ(n²) of both.

use crate::primitives::{Counter, Ops};

sort_impl!(insertion_sort);

fn insertion_sort<T, E, F, C>(v: &mut [T], ops: &mut Ops<F, C>) -> Result<(), E>
where
    F: FnMut(&T, &T) -> Result<bool, E>,
    C: Counter,
{
    let len = v.len();

    // Grow the sorted prefix v[..i] by one element each round.
    for i in 1..len {
        let mut j = i;
        while j > 0 && ops.less(v, j, j - 1)? {
            ops.exchange(v, j, j - 1);
            j -= 1;
        }
    }

    Ok(())
}
