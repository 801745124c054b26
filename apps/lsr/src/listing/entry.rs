//! The directory entry model.

use std::fs;
use std::os::unix::fs::FileTypeExt;

/// Kind of a directory entry, as reported by the directory read itself.
///
/// `Unknown` means the raw record carried no type, not that the entry is
/// somehow invalid. Listing output does not use this field; it is captured
/// because the raw record already carries it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileType {
    BlockDevice,
    CharDevice,
    Directory,
    Fifo,
    Symlink,
    File,
    Socket,
    #[default]
    Unknown,
}

impl From<fs::FileType> for FileType {
    fn from(file_type: fs::FileType) -> Self {
        if file_type.is_dir() {
            Self::Directory
        } else if file_type.is_symlink() {
            Self::Symlink
        } else if file_type.is_file() {
            Self::File
        } else if file_type.is_block_device() {
            Self::BlockDevice
        } else if file_type.is_char_device() {
            Self::CharDevice
        } else if file_type.is_fifo() {
            Self::Fifo
        } else if file_type.is_socket() {
            Self::Socket
        } else {
            Self::Unknown
        }
    }
}

/// One directory member.
#[derive(Debug, Clone)]
pub struct Entry {
    /// Entry name, lossily decoded from the OS-reported bytes.
    pub name: String,
    /// Kind reported by the directory record, `Unknown` if it had none.
    pub file_type: FileType,
    /// Full stat metadata. No current operation populates this; the plain
    /// listing only needs names.
    pub metadata: Option<fs::Metadata>,
}

impl Entry {
    pub fn new(name: impl Into<String>, file_type: FileType) -> Self {
        Self {
            name: name.into(),
            file_type,
            metadata: None,
        }
    }
}
