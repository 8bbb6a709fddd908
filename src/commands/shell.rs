use std::process::Command;

use crate::env::Environment;

/// Launches `$SHELL` (default `/bin/sh`) with its working directory set to
/// `dir`, and waits for it to exit. The child's status is not inspected.
pub fn run(dir: &str, env: &Environment) {
    let shell = env.get("SHELL").unwrap_or("/bin/sh");
    if let Err(e) = Command::new(shell).current_dir(dir).status() {
        eprintln!("shell: cannot launch '{shell}' in '{dir}': {e}");
    }
}
