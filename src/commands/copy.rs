use std::fs;

/// Copy the contents of `src` to `dest` (regular files only, no recursion).
pub fn run(src: &str, dest: &str) {
    if let Err(e) = fs::copy(src, dest) {
        eprintln!("copy: cannot copy '{src}' to '{dest}': {e}");
    }
}
