//! Low-level directory reading and Entry construction.
//!
//! Pure I/O: a source abstraction over directory iteration, the real
//! `std::fs::ReadDir`-backed source, and the collector that drains a source
//! into a growable buffer. No formatting or sorting here.

use std::ffi::OsString;
use std::fs;
use std::path::Path;

use lsr_growbuf::GrowBuf;

use crate::listing::ListError;
use crate::listing::entry::{Entry, FileType};

/// One raw record pulled from a [`DirectorySource`], before translation
/// into an [`Entry`].
#[derive(Debug, Clone)]
pub struct RawEntry {
    /// Name exactly as the OS reported it.
    pub name: OsString,
    /// Type carried by the record itself; never the result of a follow-up
    /// metadata query.
    pub file_type: FileType,
}

/// Trait for directory iteration.
///
/// Implementations provide the stream of raw records for one directory:
/// - [`ReadDirSource`]: the real file system
/// - scripted in-memory sources in tests
pub trait DirectorySource {
    /// Returns the next raw record, `Ok(None)` at end-of-stream, or the
    /// first OS-level read failure.
    fn next_entry(&mut self) -> Result<Option<RawEntry>, ListError>;
}

/// A directory source backed by the local file system.
///
/// The underlying handle closes when the source is dropped; `std` reports
/// no close errors, so open and read failures are the only observable ones.
pub struct ReadDirSource {
    inner: fs::ReadDir,
}

impl ReadDirSource {
    /// Opens `path` for iteration.
    pub fn open(path: &Path) -> Result<Self, ListError> {
        let inner = fs::read_dir(path).map_err(ListError::Open)?;
        Ok(Self { inner })
    }
}

impl DirectorySource for ReadDirSource {
    fn next_entry(&mut self) -> Result<Option<RawEntry>, ListError> {
        match self.inner.next() {
            None => Ok(None),
            Some(Err(err)) => Err(ListError::Read(err)),
            Some(Ok(dir_entry)) => {
                // file_type() comes from the record on every mainstream
                // platform; if the record has no type we keep Unknown
                // rather than paying for a stat call.
                let file_type = dir_entry
                    .file_type()
                    .map(FileType::from)
                    .unwrap_or(FileType::Unknown);
                Ok(Some(RawEntry {
                    name: dir_entry.file_name(),
                    file_type,
                }))
            }
        }
    }
}

/// Drains `source` into a buffer of entries.
///
/// Stops at end-of-stream and returns everything collected so far. A read
/// failure or a buffer-growth failure aborts the whole collection: the
/// partial buffer is dropped here and the caller sees only the error.
pub fn collect_entries<S: DirectorySource>(source: &mut S) -> Result<GrowBuf<Entry>, ListError> {
    let mut entries = GrowBuf::new();

    while let Some(raw) = source.next_entry()? {
        let name = raw.name.to_string_lossy().into_owned();
        entries.try_push(Entry::new(name, raw.file_type))?;
    }

    Ok(entries)
}
