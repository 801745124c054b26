//! `lsr` binary: one positional argument, the directory to list.
//!
//! Exit codes: 0 on success, 1 on a usage error or a failed listing.
//! Diagnostics go to stderr as `lsr: <error>`; enable `RUST_LOG=debug` for
//! operation timing.

use std::env;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use lsr_lib::listing::list_directory;

fn main() -> ExitCode {
    env_logger::init();

    let Some(path) = env::args_os().nth(1) else {
        eprintln!("usage: lsr <directory>");
        return ExitCode::from(1);
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(err) = list_directory(Path::new(&path), &mut out) {
        eprintln!("lsr: {}", err);
        return ExitCode::from(1);
    }

    if let Err(err) = out.flush() {
        eprintln!("lsr: cannot write listing: {}", err);
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}
