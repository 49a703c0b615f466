use std::{
    io::{BufRead, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use minilogo_turtle::Sandbox;

/// Run turtle command lines and report what got drawn.
#[derive(Parser, Debug)]
struct Args {
    /// File with one command line per line; reads stdin interactively when
    /// omitted.
    input: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();
    let args = Args::parse();

    let mut sandbox = Sandbox::new();
    match &args.input {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to open input file {}", path.display()))?;
            for (lineno, line) in text.lines().enumerate() {
                if line.trim().is_empty() {
                    continue;
                }
                sandbox
                    .execute(line)
                    .with_context(|| format!("{}:{}", path.display(), lineno + 1))?;
            }
        }
        None => interact(&mut sandbox)?,
    }

    report(&sandbox);
    Ok(())
}

fn interact(sandbox: &mut Sandbox) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    prompt()?;
    for line in stdin.lock().lines() {
        let line = line?;
        match sandbox.execute(&line) {
            Ok(()) => println!("OK"),
            Err(e) => println!("Don't recognize {:?}: {}", line, e),
        }
        prompt()?;
    }
    println!();
    Ok(())
}

fn prompt() -> anyhow::Result<()> {
    print!("> ");
    std::io::stdout().flush()?;
    Ok(())
}

fn report(sandbox: &Sandbox) {
    log::debug!("{} segments drawn", sandbox.segments().len());
    for seg in sandbox.segments() {
        println!(
            "line ({:.1}, {:.1}) -> ({:.1}, {:.1})",
            seg.p0.x, seg.p0.y, seg.p1.x, seg.p1.y
        );
    }
    let turtle = sandbox.turtle();
    println!(
        "turtle at ({:.1}, {:.1}), heading {:.0}, pen {}",
        turtle.pos().x,
        turtle.pos().y,
        turtle.heading(),
        if turtle.pen_is_down() { "down" } else { "up" }
    );
}
