//! Directory listing module - entry model, reading, sorting, printing, driver.

use std::fmt;
use std::io;

use lsr_growbuf::ReserveError;

pub(crate) mod entry;
pub(crate) mod operations;
pub(crate) mod printing;
pub(crate) mod reading;
pub(crate) mod sorting;

pub use entry::{Entry, FileType};
pub use operations::list_directory;
pub use printing::print_entries;
pub use reading::{DirectorySource, RawEntry, ReadDirSource, collect_entries};
pub use sorting::{compare_names, sort_entries};

/// Error type for a single listing operation.
///
/// Every variant is terminal for the operation that produced it; nothing is
/// retried. End-of-stream during iteration is not an error and never
/// appears here.
#[derive(Debug)]
pub enum ListError {
    /// The directory could not be opened.
    Open(io::Error),
    /// Iterating the directory failed partway through.
    Read(io::Error),
    /// The entry buffer could not grow.
    Allocation(ReserveError),
    /// Writing the listing to the output failed.
    Write(io::Error),
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open(err) => write!(f, "cannot open directory: {}", err),
            Self::Read(err) => write!(f, "cannot read directory: {}", err),
            Self::Allocation(err) => write!(f, "out of memory: {}", err),
            Self::Write(err) => write!(f, "cannot write listing: {}", err),
        }
    }
}

impl std::error::Error for ListError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Open(err) | Self::Read(err) | Self::Write(err) => Some(err),
            Self::Allocation(err) => Some(err),
        }
    }
}

impl From<ReserveError> for ListError {
    fn from(err: ReserveError) -> Self {
        Self::Allocation(err)
    }
}

#[cfg(test)]
mod reading_test;
