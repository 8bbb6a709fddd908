use std::io::{self, Write};

/// ANSI erase-display plus cursor-home, flushed immediately so the effect is
/// visible even when nothing else is printed afterwards.
pub fn run<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "\x1b[2J\x1b[H")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_erase_and_home_sequences() {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        assert_eq!(out, b"\x1b[2J\x1b[H");
    }
}
