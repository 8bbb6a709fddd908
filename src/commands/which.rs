use std::fs;
use std::io::{self, Write};
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use crate::env::Environment;

pub fn run<W: Write>(prog: &str, env: &Environment, out: &mut W) -> io::Result<()> {
    if prog.is_empty() {
        eprintln!("which: no program specified");
        return Ok(());
    }
    let Some(path) = env.get("PATH") else {
        eprintln!("which: PATH not set");
        return Ok(());
    };
    match locate(prog, path) {
        Some(hit) => writeln!(out, "{}", hit.display()),
        None => writeln!(out, "{prog} not found in PATH"),
    }
}

/// First `PATH` entry containing an executable `prog`. An empty PATH
/// component stands for the current directory, searched as `./prog`.
/// A trailing colon does not open up an extra component, so an empty
/// `PATH` searches nowhere.
pub fn locate(prog: &str, path: &str) -> Option<PathBuf> {
    let mut components: Vec<&str> = path.split(':').collect();
    if components.last() == Some(&"") {
        components.pop();
    }
    components
        .into_iter()
        .map(|component| {
            if component.is_empty() {
                Path::new(".").join(prog)
            } else {
                Path::new(component).join(prog)
            }
        })
        .find(|candidate| is_executable(candidate))
}

fn is_executable(path: &Path) -> bool {
    fs::metadata(path)
        .map(|meta| meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}
