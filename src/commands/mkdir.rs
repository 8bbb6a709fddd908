use std::fs::DirBuilder;
use std::os::unix::fs::DirBuilderExt;

/// Create `dir` with mode 0755 and confirm on stdout.
pub fn run(dir: &str) {
    match DirBuilder::new().mode(0o755).create(dir) {
        Ok(()) => println!("Directory '{dir}' created."),
        Err(e) => eprintln!("mkdir: cannot create directory '{dir}': {e}"),
    }
}
