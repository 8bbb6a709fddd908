use std::io::{self, Write};

use crate::env::Environment;

pub fn run<W: Write>(env: &Environment, out: &mut W) -> io::Result<()> {
    match env.get("USER") {
        Some(user) => writeln!(out, "{user}"),
        None => {
            eprintln!("whoami: no user found");
            Ok(())
        }
    }
}
