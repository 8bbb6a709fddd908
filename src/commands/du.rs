use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::MAX_DEPTH;

pub fn run<W: Write>(path: &str, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}\t{}", path, disk_usage(Path::new(path)))
}

/// Sum of the apparent sizes of every entry reachable from `path`, including
/// `path` itself.
///
/// Best-effort by design: a missing path contributes zero, an unreadable
/// directory contributes its own size without its children, and symlinks
/// contribute their own size rather than their target's. A directory's own
/// size is counted exactly once in every case.
pub fn disk_usage(path: &Path) -> u64 {
    total_size(path, 0)
}

fn total_size(path: &Path, depth: usize) -> u64 {
    let Ok(meta) = fs::symlink_metadata(path) else {
        return 0;
    };

    let mut total = 0u64;
    if meta.is_dir() && depth < MAX_DEPTH {
        let Ok(entries) = fs::read_dir(path) else {
            return meta.len();
        };
        for entry in entries.flatten() {
            total += total_size(&entry.path(), depth + 1);
        }
    }
    total + meta.len()
}
