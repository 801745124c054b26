//! Library side of the `lsr` binary.
//!
//! Everything interesting lives in [`listing`]: the entry model, the
//! directory-iteration abstraction, the collector, and the listing driver.
//! The binary in `main.rs` is a thin argument-and-exit-code wrapper.

pub mod listing;

pub use listing::{ListError, list_directory};
