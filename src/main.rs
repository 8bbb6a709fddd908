use std::io::{self, Write};
use std::path::Path;

use minibox::commands;
use minibox::env::Environment;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let environment = Environment::from_process();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Flags are handled left to right. A flag that wants operands takes the
    // following arguments as written, even when they start with a dash; a
    // missing operand is reported and the flag is skipped. Arguments that are
    // not flags are ignored. The exit code is always 0.
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-l" => report(commands::list::run(Path::new("."), &mut out)),
            "-m" => match args.get(i + 1) {
                Some(dir) => {
                    commands::mkdir::run(dir);
                    i += 1;
                }
                None => eprintln!("No directory specified for -m"),
            },
            "-c" => match args.get(i + 1) {
                Some(dir) => {
                    commands::shell::run(dir, &environment);
                    i += 1;
                }
                None => eprintln!("No directory specified for -c"),
            },
            "-r" => match args.get(i + 1) {
                Some(path) => {
                    commands::remove::run(path);
                    i += 1;
                }
                None => eprintln!("No file specified for -r"),
            },
            "-x" => match args.get(i + 1) {
                Some(prog) => {
                    report(commands::which::run(prog, &environment, &mut out));
                    i += 1;
                }
                None => eprintln!("No program specified for -x"),
            },
            "-t" => match args.get(i + 1) {
                Some(file) => {
                    report(commands::cat::run(file, &mut out));
                    i += 1;
                }
                None => eprintln!("Usage: -t <file>"),
            },
            "-d" => match args.get(i + 1) {
                Some(path) => {
                    report(commands::du::run(path, &mut out));
                    i += 1;
                }
                None => eprintln!("Usage: -d <path>"),
            },
            "-u" => match args.get(i + 1) {
                Some(file) => {
                    commands::touch::run(file);
                    i += 1;
                }
                None => eprintln!("Usage: -u <file>"),
            },
            "-a" => {
                if i + 2 < args.len() {
                    commands::copy::run(&args[i + 1], &args[i + 2]);
                    i += 2;
                } else {
                    eprintln!("Usage: -a <src> <dest>");
                }
            }
            "-v" => {
                if i + 2 < args.len() {
                    commands::mv::run(&args[i + 1], &args[i + 2]);
                    i += 2;
                } else {
                    eprintln!("Usage: -v <src> <dest>");
                }
            }
            "-f" => {
                if i + 2 < args.len() {
                    report(commands::find::run(&args[i + 1], &args[i + 2], &mut out));
                    i += 2;
                } else {
                    eprintln!("Usage: -f <dir> <name>");
                }
            }
            "-o" => {
                if i + 2 < args.len() {
                    commands::chmod::run(&args[i + 1], &args[i + 2]);
                    i += 2;
                } else {
                    eprintln!("Usage: -o <file> <mode>");
                }
            }
            "-p" => report(commands::pwd::run(&mut out)),
            "-w" => report(commands::whoami::run(&environment, &mut out)),
            "-z" => report(commands::clear::run(&mut out)),
            "-e" => report(commands::env::run(&environment, &mut out)),
            "-s" => report(commands::ps::run(&mut out)),
            "-h" => report(print_help(&args[0], &mut out)),
            arg if arg.starts_with('-') => {
                eprintln!("Unknown option: {arg} use -h for help");
            }
            _ => {}
        }
        i += 1;
    }
}

fn report(result: io::Result<()>) {
    if let Err(e) = result {
        eprintln!("minibox: write error: {e}");
    }
}

fn print_help<W: Write>(prog: &str, out: &mut W) -> io::Result<()> {
    writeln!(out, "Usage: {prog} [-l] [-c <dir>] [-p] [-h]")?;
    writeln!(out, "Options:")?;
    writeln!(out, "  -l         List files in the current directory (with size and owner)")?;
    writeln!(out, "  -c <dir>   Spawn a shell in directory <dir>")?;
    writeln!(out, "  -p         Print the current working directory")?;
    writeln!(out, "  -h         Show this help message")?;
    writeln!(out, "  -w         Print the current user")?;
    writeln!(out, "  -m <dir>   Create a directory named <dir>")?;
    writeln!(out, "  -r <file/dir>   Remove file or directory recursively")?;
    writeln!(out, "  -x <prog>  Show full path of executable <prog> (like 'which')")?;
    writeln!(out, "  -z         Clear the terminal screen (like 'clear')")?;
    writeln!(out, "  -a <src> <dest>  Copy file from <src> to <dest>")?;
    writeln!(out, "  -v <src> <dest>  Move (rename) file from <src> to <dest>")?;
    writeln!(out, "  -t <file>        Print contents of <file> (cat)")?;
    writeln!(out, "  -d <path>        Show disk usage of <path> (du)")?;
    writeln!(out, "  -e               Print all environment variables (env)")?;
    writeln!(out, "  -u <file>        Touch file (create or update timestamp)")?;
    writeln!(out, "  -f <dir> <name>  Find file named <name> under <dir>")?;
    writeln!(out, "  -o <file> <mode> Change file permissions (chmod, octal)")?;
    writeln!(out, "  -s               Print process list (ps)")?;
    Ok(())
}
