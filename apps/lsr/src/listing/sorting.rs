//! Name comparison and sorting for collected entries.

use std::cmp::Ordering;

use crate::listing::entry::Entry;

/// Compares two entry names by raw byte value, ascending.
///
/// Deliberately not locale-aware and not case-folded: `B` sorts before `a`.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.as_bytes().cmp(b.as_bytes())
}

/// Sorts entries in place by name, ascending. Unstable: entries with
/// identical names (possible across lossy decoding) may swap positions.
pub fn sort_entries(entries: &mut [Entry]) {
    lsr_quicksort::sort_by(entries, |a, b| compare_names(&a.name, &b.name));
}
