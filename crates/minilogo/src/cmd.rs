use crate::parse::{self, ParseError, MAX_DEPTH};
use crate::token;

/// A single turtle instruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Advance by a signed number of units along the current heading.
    Move(i32),
    /// Turn by a signed number of degrees, counterclockwise positive.
    Rotate(i32),
    PenUp,
    PenDown,
    /// Run the body in order, the given number of times.
    Repeat(u32, Vec<Command>),
}

type Build = fn(word: &str, params: &[String], depth: usize) -> Result<Command, ParseError>;

/// What the parser knows about one keyword: how many parameter tokens it
/// consumes, and how to turn them into a [`Command`].
pub struct CommandSpec {
    pub arity: usize,
    build: Build,
}

impl CommandSpec {
    /// Build the command from exactly `arity` parameter tokens. `word` is the
    /// keyword as the user spelled it, for error messages; `depth` is the
    /// current block nesting level.
    pub fn eval(
        &self,
        word: &str,
        params: &[String],
        depth: usize,
    ) -> Result<Command, ParseError> {
        (self.build)(word, params, depth)
    }
}

// The long spellings and the short ones build the same commands.
const COMMANDS: &[(&str, CommandSpec)] = &[
    ("forward", CommandSpec { arity: 1, build: forward }),
    ("fd", CommandSpec { arity: 1, build: forward }),
    ("back", CommandSpec { arity: 1, build: back }),
    ("bk", CommandSpec { arity: 1, build: back }),
    ("left", CommandSpec { arity: 1, build: left }),
    ("lt", CommandSpec { arity: 1, build: left }),
    ("right", CommandSpec { arity: 1, build: right }),
    ("rt", CommandSpec { arity: 1, build: right }),
    ("penup", CommandSpec { arity: 0, build: pen_up }),
    ("pu", CommandSpec { arity: 0, build: pen_up }),
    ("pendown", CommandSpec { arity: 0, build: pen_down }),
    ("pd", CommandSpec { arity: 0, build: pen_down }),
    ("repeat", CommandSpec { arity: 2, build: repeat }),
];

/// Look up a keyword in the command table.
pub fn lookup(word: &str) -> Option<&'static CommandSpec> {
    COMMANDS
        .iter()
        .find(|(name, _)| *name == word)
        .map(|(_, spec)| spec)
}

fn int(word: &str, param: &str) -> Result<i32, ParseError> {
    param.parse().map_err(|_| ParseError::BadNumber {
        cmd: word.to_owned(),
        param: param.to_owned(),
    })
}

fn negated(word: &str, param: &str) -> Result<i32, ParseError> {
    int(word, param)?
        .checked_neg()
        .ok_or_else(|| ParseError::BadNumber {
            cmd: word.to_owned(),
            param: param.to_owned(),
        })
}

fn forward(word: &str, params: &[String], _depth: usize) -> Result<Command, ParseError> {
    Ok(Command::Move(int(word, &params[0])?))
}

fn back(word: &str, params: &[String], _depth: usize) -> Result<Command, ParseError> {
    Ok(Command::Move(negated(word, &params[0])?))
}

fn left(word: &str, params: &[String], _depth: usize) -> Result<Command, ParseError> {
    Ok(Command::Rotate(int(word, &params[0])?))
}

// Turning right is a clockwise rotation, so the negation happens once, here;
// the executor only ever adds to the heading.
fn right(word: &str, params: &[String], _depth: usize) -> Result<Command, ParseError> {
    Ok(Command::Rotate(negated(word, &params[0])?))
}

fn pen_up(_word: &str, _params: &[String], _depth: usize) -> Result<Command, ParseError> {
    Ok(Command::PenUp)
}

fn pen_down(_word: &str, _params: &[String], _depth: usize) -> Result<Command, ParseError> {
    Ok(Command::PenDown)
}

fn repeat(word: &str, params: &[String], depth: usize) -> Result<Command, ParseError> {
    if depth >= MAX_DEPTH {
        return Err(ParseError::TooDeep);
    }
    let times: u32 = params[0].parse().map_err(|_| ParseError::BadNumber {
        cmd: word.to_owned(),
        param: params[0].clone(),
    })?;
    // The block arrived as one still-bracketed token; its interior is a
    // command line in its own right.
    let body = parse::parse_all(&token::split(&params[1])?, depth + 1)?;
    Ok(Command::Repeat(times, body))
}
