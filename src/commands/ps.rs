use std::fs;
use std::io::{self, Write};

/// One row per numeric `/proc` entry with a non-empty `cmdline`. Kernel
/// threads expose an empty cmdline and are skipped, as are processes that
/// exit between the directory scan and the read.
pub fn run<W: Write>(out: &mut W) -> io::Result<()> {
    let proc = match fs::read_dir("/proc") {
        Ok(proc) => proc,
        Err(e) => {
            eprintln!("ps: cannot open /proc: {e}");
            return Ok(());
        }
    };

    writeln!(out, "PID\tCMD")?;
    for entry in proc.flatten() {
        let name = entry.file_name();
        let Some(pid) = name.to_str().and_then(|s| s.parse::<u32>().ok()) else {
            continue;
        };
        if pid == 0 {
            continue;
        }
        if !entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
            continue;
        }
        let Ok(cmdline) = fs::read(format!("/proc/{pid}/cmdline")) else {
            continue;
        };
        if cmdline.is_empty() {
            continue;
        }
        // Arguments are NUL-separated; the first one is the command itself.
        let cmd = cmdline.split(|b| *b == 0).next().unwrap_or(&[]);
        writeln!(out, "{pid}\t{}", String::from_utf8_lossy(cmd))?;
    }
    Ok(())
}
