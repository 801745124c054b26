//! The listing driver: open → collect → sort → print.

use std::io::Write;
use std::path::Path;
use std::time::Instant;

use crate::listing::ListError;
use crate::listing::printing::print_entries;
use crate::listing::reading::{ReadDirSource, collect_entries};
use crate::listing::sorting::sort_entries;

/// Lists the directory at `path` to `out`: entries sorted by name
/// ascending, each printed as `name ` with no trailing newline.
///
/// Sorting always happens before any output is written, so a failure never
/// leaves a partial listing behind. The directory handle is closed before
/// printing starts; all buffers are released on every path by ownership.
pub fn list_directory(path: &Path, out: &mut impl Write) -> Result<(), ListError> {
    let overall_start = Instant::now();

    let mut source = ReadDirSource::open(path)?;
    let mut entries = collect_entries(&mut source)?;
    drop(source);

    sort_entries(entries.as_mut_slice());
    print_entries(out, entries.as_slice()).map_err(ListError::Write)?;

    log::debug!(
        "list_directory: path={}, entries={}, total={}ms",
        path.display(),
        entries.len(),
        overall_start.elapsed().as_millis()
    );

    Ok(())
}
