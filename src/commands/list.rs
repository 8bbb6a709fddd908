use std::ffi::OsStr;
use std::fs;
use std::io::{self, Write};
use std::os::unix::fs::MetadataExt;
use std::path::Path;

/// List `dir` one entry per line: name, apparent size, owner uid. The `.`
/// and `..` pseudo-entries are reported first, then the enumerated entries
/// in directory order.
pub fn run<W: Write>(dir: &Path, out: &mut W) -> io::Result<()> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("list: cannot open directory '{}': {e}", dir.display());
            return Ok(());
        }
    };

    for name in [".", ".."] {
        write_row(dir, OsStr::new(name), out)?;
    }
    for entry in entries.flatten() {
        write_row(dir, &entry.file_name(), out)?;
    }
    Ok(())
}

fn write_row<W: Write>(dir: &Path, name: &OsStr, out: &mut W) -> io::Result<()> {
    let display = name.to_string_lossy();
    // stat, not lstat: symlink rows show their target's size and owner.
    match fs::metadata(dir.join(name)) {
        Ok(meta) => writeln!(out, "{:<20} {:>10} {}", display, meta.len(), meta.uid()),
        Err(e) => {
            eprintln!("{:<20} [stat error: {e}]", display);
            Ok(())
        }
    }
}
