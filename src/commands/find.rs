use std::ffi::OsStr;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::MAX_DEPTH;

pub fn run<W: Write>(dir: &str, name: &str, out: &mut W) -> io::Result<()> {
    for path in find_by_name(Path::new(dir), name) {
        writeln!(out, "{}", path.display())?;
    }
    Ok(())
}

/// Collect every entry under `dir`, at any depth, whose base name exactly
/// equals `name`, in directory-enumeration order.
///
/// Tolerant by design: a missing or unreadable directory yields nothing, an
/// entry that cannot be stat'ed is skipped, and no diagnostics are emitted.
/// A directory whose name matches is reported and still searched inside.
pub fn find_by_name(dir: &Path, name: &str) -> Vec<PathBuf> {
    let mut matches = Vec::new();
    search(dir, OsStr::new(name), 0, &mut matches);
    matches
}

fn search(dir: &Path, name: &OsStr, depth: usize, matches: &mut Vec<PathBuf>) {
    if depth >= MAX_DEPTH {
        return;
    }
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        // Entries that cannot be stat'ed are skipped entirely; the lstat
        // also decides descent, so symlinks to directories are not followed.
        let Ok(meta) = fs::symlink_metadata(&path) else {
            continue;
        };
        if entry.file_name() == name {
            matches.push(path.clone());
        }
        if meta.is_dir() {
            search(&path, name, depth + 1, matches);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::os::unix::fs::symlink;

    use super::*;

    #[test]
    fn finds_matches_at_every_depth() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();
        fs::create_dir_all(root.join("one/two/three")).unwrap();
        fs::write(root.join("needle"), "0").unwrap();
        fs::write(root.join("one/needle"), "1").unwrap();
        fs::write(root.join("one/two/three/needle"), "3").unwrap();
        fs::write(root.join("one/haystack"), "x").unwrap();

        let mut found = find_by_name(root, "needle");
        found.sort();
        assert_eq!(
            found,
            vec![
                root.join("needle"),
                root.join("one/needle"),
                root.join("one/two/three/needle"),
            ]
        );
    }

    #[test]
    fn matching_directory_is_reported_and_searched() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();
        fs::create_dir_all(root.join("needle")).unwrap();
        fs::write(root.join("needle/needle"), "inner").unwrap();

        let mut found = find_by_name(root, "needle");
        found.sort();
        assert_eq!(found, vec![root.join("needle"), root.join("needle/needle")]);
    }

    #[test]
    fn missing_root_yields_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let found = find_by_name(&tmp.path().join("no-such-dir"), "x");
        assert!(found.is_empty());
    }

    #[test]
    fn name_must_match_exactly() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();
        fs::write(root.join("needle.txt"), "").unwrap();
        fs::write(root.join("aneedle"), "").unwrap();

        assert!(find_by_name(root, "needle").is_empty());
    }

    #[test]
    fn symlinked_directories_are_not_descended() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path();
        fs::create_dir(root.join("real")).unwrap();
        fs::write(root.join("real/needle"), "").unwrap();
        symlink(root.join("real"), root.join("alias")).unwrap();

        let found = find_by_name(root, "needle");
        // Only via the real directory, never via the symlink.
        assert_eq!(found, vec![root.join("real/needle")]);
    }

    #[test]
    fn entries_past_the_depth_cap_are_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("deep");
        let mut path = root.clone();
        for _ in 0..MAX_DEPTH + 5 {
            path.push("d");
            fs::create_dir_all(&path).unwrap();
        }
        fs::write(path.join("needle"), "").unwrap();
        fs::write(root.join("d/needle"), "shallow").unwrap();

        let found = find_by_name(&root, "needle");
        assert_eq!(found, vec![root.join("d/needle")]);
    }
}
