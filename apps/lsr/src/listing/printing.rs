//! Output formatting for collected entries.

use std::io::{self, Write};

use crate::listing::entry::Entry;

/// Writes each entry as `name ` (name followed by one space).
///
/// No trailing newline, no column alignment, no quoting. Matches the wire
/// format consumers of the utility already expect.
pub fn print_entries(out: &mut impl Write, entries: &[Entry]) -> io::Result<()> {
    for entry in entries {
        write!(out, "{} ", entry.name)?;
    }
    Ok(())
}
