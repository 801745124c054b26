//! Collector tests against a scripted in-memory source.
//!
//! These verify the drain semantics without touching the real file system.

use std::collections::VecDeque;
use std::ffi::OsString;
use std::io;

use super::ListError;
use super::entry::FileType;
use super::reading::{DirectorySource, RawEntry, collect_entries};

/// What a scripted source does on one `next_entry` call. After the script
/// runs out, the source reports end-of-stream.
enum Step {
    Name(&'static str),
    Fail,
}

struct ScriptedSource {
    steps: VecDeque<Step>,
}

impl ScriptedSource {
    fn new(steps: impl IntoIterator<Item = Step>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
        }
    }
}

impl DirectorySource for ScriptedSource {
    fn next_entry(&mut self) -> Result<Option<RawEntry>, ListError> {
        match self.steps.pop_front() {
            None => Ok(None),
            Some(Step::Name(name)) => Ok(Some(RawEntry {
                name: OsString::from(name),
                file_type: FileType::Unknown,
            })),
            Some(Step::Fail) => Err(ListError::Read(io::Error::other("injected read failure"))),
        }
    }
}

#[test]
fn test_collects_entries_in_arrival_order() {
    let mut source = ScriptedSource::new([Step::Name("b"), Step::Name("a"), Step::Name("c")]);

    let entries = collect_entries(&mut source).unwrap();

    assert_eq!(entries.len(), 3);
    let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["b", "a", "c"]);
}

#[test]
fn test_empty_source_yields_empty_buffer() {
    let mut source = ScriptedSource::new([]);

    let entries = collect_entries(&mut source).unwrap();

    assert!(entries.is_empty());
    assert_eq!(entries.capacity(), 0);
}

#[test]
fn test_read_failure_discards_partial_collection() {
    let mut source = ScriptedSource::new([Step::Name("one"), Step::Name("two"), Step::Fail]);

    let result = collect_entries(&mut source);

    // The two already-collected entries must not leak out.
    assert!(matches!(result, Err(ListError::Read(_))));
}

#[test]
fn test_collected_entries_default_fields() {
    let mut source = ScriptedSource::new([Step::Name("thing")]);

    let entries = collect_entries(&mut source).unwrap();

    assert_eq!(entries[0].file_type, FileType::Unknown);
    assert!(entries[0].metadata.is_none());
}
