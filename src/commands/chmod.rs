use std::fs;
use std::os::unix::fs::PermissionsExt;

/// Set the permission bits of `file` to the octal `mode_str`.
///
/// A mode that is not valid octal is rejected outright rather than applied
/// as zero.
pub fn run(file: &str, mode_str: &str) {
    let mode = match u32::from_str_radix(mode_str, 8) {
        Ok(mode) => mode,
        Err(_) => {
            eprintln!("chmod: invalid mode '{mode_str}'");
            return;
        }
    };
    if let Err(e) = fs::set_permissions(file, fs::Permissions::from_mode(mode)) {
        eprintln!("chmod: cannot change mode of '{file}': {e}");
    }
}
