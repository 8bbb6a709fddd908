use std::fs;

/// Move (rename) `src` to `dest`.
pub fn run(src: &str, dest: &str) {
    if let Err(e) = fs::rename(src, dest) {
        eprintln!("move: cannot move '{src}' to '{dest}': {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renames_file() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("old.txt");
        let dest = tmp.path().join("new.txt");
        fs::write(&src, "contents").unwrap();

        run(src.to_str().unwrap(), dest.to_str().unwrap());

        assert!(!src.exists());
        assert_eq!(fs::read(&dest).unwrap(), b"contents");
    }

    #[test]
    fn renames_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let src = tmp.path().join("olddir");
        let dest = tmp.path().join("newdir");
        fs::create_dir(&src).unwrap();
        fs::write(src.join("inner.txt"), "x").unwrap();

        run(src.to_str().unwrap(), dest.to_str().unwrap());

        assert!(dest.join("inner.txt").exists());
        assert!(!src.exists());
    }
}
