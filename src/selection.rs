//! Selection sort.
//!
//! Unstable, in-place, Θ(n²) comparisons regardless of input and exactly `len - 1` exchanges.
//! Each round selects the leftmost minimum of the unsorted suffix and exchanges it into place, that
//! exchange can carry an element past an equal one, which is why the sort is unstable.

use crate::primitives::{Counter, Ops};

sort_impl!(selection_sort);

fn selection_sort<T, E, F, C>(v: &mut [T], ops: &mut Ops<F, C>) -> Result<(), E>
where
    F: FnMut(&T, &T) -> Result<bool, E>,
    C: Counter,
{
    let len = v.len();
    if len < 2 {
        return Ok(());
    }

    for i in 0..(len - 1) {
        let mut min = i;
        for j in (i + 1)..len {
            // Strict less keeps the leftmost of several equal minima.
            if ops.less(v, j, min)? {
                min = j;
            }
        }

        ops.exchange(v, i, min);
    }

    Ok(())
}
