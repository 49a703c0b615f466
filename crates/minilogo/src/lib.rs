//! Parser for a minimal turtle-graphics dialect of LOGO.
//!
//! A command line like `repeat 4 [forward 90 right 90]` goes through two
//! stages: [`token::split`] chops it into tokens, keeping each bracketed
//! block as one opaque token, and [`parse::parse_all`] matches the tokens
//! against the command table and descends into block tokens recursively.
//! The result is a sequence of [`Command`] values that an executor can apply
//! to a turtle.
//!
//! ```
//! use minilogo::{parse, Command};
//!
//! let cmds = parse("repeat 4 [forward 90 right 90]").unwrap();
//! assert_eq!(cmds, vec![Command::Repeat(4, vec![Command::Move(90), Command::Rotate(-90)])]);
//! ```

pub mod cmd;
pub mod parse;
pub mod token;

pub use cmd::{Command, CommandSpec};
pub use parse::{ParseError, MAX_DEPTH};

/// Parse one command line into an ordered command sequence.
///
/// Parsing is all-or-nothing: any bad token anywhere in the line, including
/// inside a nested block, fails the whole line and nothing gets executed.
pub fn parse(line: &str) -> Result<Vec<Command>, ParseError> {
    parse::parse_all(&token::split(line)?, 0)
}
