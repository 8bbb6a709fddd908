use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::MAX_DEPTH;
use crate::error::{MiniboxError, Result};

pub fn run(path: &str) {
    let stdout = io::stdout();
    if let Err(e) = remove_recursive(Path::new(path), &mut stdout.lock()) {
        eprintln!("remove: {e}");
    }
}

/// Delete `path`; for a directory, delete its entire contents first.
///
/// One line per removed entry is written to `out`, innermost first. A symlink
/// is removed itself, never followed. The first failure aborts the whole
/// call; entries already removed stay removed.
pub fn remove_recursive<W: Write>(path: &Path, out: &mut W) -> Result<()> {
    remove_entry(path, 0, out)
}

fn remove_entry<W: Write>(path: &Path, depth: usize, out: &mut W) -> Result<()> {
    if depth > MAX_DEPTH {
        return Err(MiniboxError::TooDeep {
            path: path.to_path_buf(),
        });
    }

    let meta = fs::symlink_metadata(path).map_err(|source| MiniboxError::Stat {
        path: path.to_path_buf(),
        source,
    })?;

    if meta.is_dir() {
        let entries = fs::read_dir(path).map_err(|source| MiniboxError::OpenDir {
            path: path.to_path_buf(),
            source,
        })?;
        for entry in entries {
            let entry = entry.map_err(|source| MiniboxError::OpenDir {
                path: path.to_path_buf(),
                source,
            })?;
            remove_entry(&entry.path(), depth + 1, out)?;
        }
        fs::remove_dir(path).map_err(|source| MiniboxError::Remove {
            path: path.to_path_buf(),
            source,
        })?;
        writeln!(out, "Removed directory '{}'", path.display())?;
    } else {
        fs::remove_file(path).map_err(|source| MiniboxError::Remove {
            path: path.to_path_buf(),
            source,
        })?;
        writeln!(out, "Removed '{}'", path.display())?;
    }

    Ok(())
}
