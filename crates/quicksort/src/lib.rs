//! In-place, unstable quicksort driven by a caller-supplied comparator.
//!
//! The pivot is the midpoint element of the current range. Partitioning
//! tracks the pivot by index and retargets it when a swap moves its slot,
//! so the pivot stays valid for the whole pass. Recursion always descends
//! into the smaller partition and loops on the larger one, which bounds
//! stack depth to O(log n); comparison count is still O(n²) in the worst
//! case (no randomization beyond the midpoint heuristic).
//!
//! Equal elements may be reordered — callers must not rely on stability.

use std::cmp::Ordering;

/// Sorts `items` in place using `compare` as the total order.
///
/// Slices of length 0 or 1 are left untouched. The comparator must impose
/// a total order; an inconsistent comparator can panic on an out-of-bounds
/// index but never causes memory unsafety.
pub fn sort_by<T, F>(items: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() > 1 {
        quicksort(items, 0, items.len() - 1, &mut compare);
    }
}

/// Sorts `items` in place by their natural order.
pub fn sort<T: Ord>(items: &mut [T]) {
    sort_by(items, T::cmp);
}

fn quicksort<T, F>(items: &mut [T], mut begin: usize, mut end: usize, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    while begin < end {
        let split = partition(items, begin, end, compare);

        // Recurse into the smaller half, iterate on the larger one.
        if split - begin < end - split {
            quicksort(items, begin, split, compare);
            begin = split + 1;
        } else {
            quicksort(items, split + 1, end, compare);
            end = split;
        }
    }
}

/// Hoare partition over the inclusive range `[begin, end]`.
///
/// Returns the split index `j` such that `[begin, j]` holds elements that
/// compare at or before the pivot and `[j+1, end]` the rest. The returned
/// split is always strictly less than `end`, so both sub-ranges shrink.
fn partition<T, F>(items: &mut [T], begin: usize, end: usize, compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut pivot = begin + (end - begin) / 2;
    let mut i = begin;
    let mut j = end;

    loop {
        while compare(&items[i], &items[pivot]) == Ordering::Less {
            i += 1;
        }
        while compare(&items[j], &items[pivot]) == Ordering::Greater {
            j -= 1;
        }

        if i >= j {
            return j;
        }

        // The pivot is addressed by index; a swap involving its slot must
        // retarget it before the elements move.
        if pivot == i {
            pivot = j;
        } else if pivot == j {
            pivot = i;
        }

        items.swap(i, j);
        i += 1;
        j -= 1;
    }
}
