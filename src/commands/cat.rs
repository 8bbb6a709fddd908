use std::fs::File;
use std::io::{self, Write};

/// Stream the bytes of `file` to `out`.
pub fn run<W: Write>(file: &str, out: &mut W) -> io::Result<()> {
    let mut f = match File::open(file) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("cat: cannot open '{file}': {e}");
            return Ok(());
        }
    };
    io::copy(&mut f, out)?;
    Ok(())
}
