use std::env;
use std::io::{self, Write};

pub fn run<W: Write>(out: &mut W) -> io::Result<()> {
    match env::current_dir() {
        Ok(dir) => writeln!(out, "{}", dir.display()),
        Err(e) => {
            eprintln!("pwd: cannot determine current directory: {e}");
            Ok(())
        }
    }
}
