use std::io::{self, Write};

use crate::env::Environment;

/// Prints every variable as `NAME=value`, one per line, in the order the
/// snapshot preserved them.
pub fn run<W: Write>(env: &Environment, out: &mut W) -> io::Result<()> {
    for (name, value) in env.vars() {
        writeln!(out, "{name}={value}")?;
    }
    Ok(())
}
