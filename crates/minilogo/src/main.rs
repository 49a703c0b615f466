use clap::Parser;
use std::{path::PathBuf, process::exit};

/// Parse a file of turtle command lines and dump the commands.
#[derive(Parser)]
struct Args {
    input: PathBuf,
}

pub fn main() {
    let args = Args::parse();
    let input = match std::fs::read_to_string(&args.input) {
        Ok(x) => x,
        Err(e) => {
            println!(
                "Failed to open input file {}: {}",
                args.input.into_os_string().to_string_lossy(),
                e
            );
            exit(1);
        }
    };

    for (lineno, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match minilogo::parse(line) {
            Ok(cmds) => {
                for cmd in cmds {
                    println!("{:?}", cmd);
                }
            }
            Err(e) => {
                println!("Parse error at line {}: {}", lineno + 1, e);
                exit(1);
            }
        }
    }
}
