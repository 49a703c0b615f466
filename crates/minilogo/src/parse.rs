use crate::cmd::{self, Command};

/// Blocks nested deeper than this are rejected, so a pathological command
/// line can't recurse the parser (or later the executor) off the stack.
pub const MAX_DEPTH: usize = 64;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("I don't know how to {0}")]
    UnknownCommand(String),
    #[error("not enough inputs to {cmd} (expected {expected}, found {found})")]
    NotEnoughInputs {
        cmd: String,
        expected: usize,
        found: usize,
    },
    #[error("{cmd} doesn't like {param} as input")]
    BadNumber { cmd: String, param: String },
    #[error("missing a closing ] after {0}")]
    UnterminatedBlock(String),
    #[error("blocks nested more than {} levels deep", MAX_DEPTH)]
    TooDeep,
}

/// Parse a token sequence into commands.
///
/// The cursor walks the tokens; each one must be a keyword from the command
/// table, which says how many parameter tokens to consume after it. One bad
/// token anywhere fails the whole sequence. `depth` is the block nesting
/// level, 0 at the top of a command line.
pub fn parse_all(tokens: &[String], depth: usize) -> Result<Vec<Command>, ParseError> {
    let mut cmds = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        let word = tokens[i].as_str();
        let spec = cmd::lookup(word).ok_or_else(|| ParseError::UnknownCommand(word.to_owned()))?;
        let params =
            tokens
                .get(i + 1..i + 1 + spec.arity)
                .ok_or_else(|| ParseError::NotEnoughInputs {
                    cmd: word.to_owned(),
                    expected: spec.arity,
                    found: tokens.len() - i - 1,
                })?;
        cmds.push(spec.eval(word, params, depth)?);
        i += spec.arity + 1;
    }
    Ok(cmds)
}

#[cfg(test)]
mod tests {
    use crate::{parse, Command, ParseError};

    #[test]
    fn single_commands() {
        assert_eq!(parse("forward 10").unwrap(), vec![Command::Move(10)]);
        assert_eq!(parse("back 10").unwrap(), vec![Command::Move(-10)]);
        assert_eq!(parse("left 45").unwrap(), vec![Command::Rotate(45)]);
        assert_eq!(parse("right 45").unwrap(), vec![Command::Rotate(-45)]);
        assert_eq!(parse("penup").unwrap(), vec![Command::PenUp]);
        assert_eq!(parse("pendown").unwrap(), vec![Command::PenDown]);
    }

    #[test]
    fn short_spellings() {
        assert_eq!(parse("fd 1").unwrap(), parse("forward 1").unwrap());
        assert_eq!(parse("bk 1").unwrap(), parse("back 1").unwrap());
        assert_eq!(parse("lt 1").unwrap(), parse("left 1").unwrap());
        assert_eq!(parse("rt 1").unwrap(), parse("right 1").unwrap());
        assert_eq!(parse("pu").unwrap(), parse("penup").unwrap());
        assert_eq!(parse("pd").unwrap(), parse("pendown").unwrap());
    }

    #[test]
    fn negative_amounts() {
        assert_eq!(parse("forward -5").unwrap(), vec![Command::Move(-5)]);
        assert_eq!(parse("back -5").unwrap(), vec![Command::Move(5)]);
        assert_eq!(parse("right -90").unwrap(), vec![Command::Rotate(90)]);
    }

    #[test]
    fn several_commands() {
        assert_eq!(
            parse("penup forward 10 pendown").unwrap(),
            vec![Command::PenUp, Command::Move(10), Command::PenDown]
        );
    }

    #[test]
    fn repeat_block() {
        assert_eq!(
            parse("repeat 3 [forward 1]").unwrap(),
            vec![Command::Repeat(3, vec![Command::Move(1)])]
        );
    }

    #[test]
    fn nested_repeat() {
        assert_eq!(
            parse("repeat 2 [repeat 2 [forward 1]]").unwrap(),
            vec![Command::Repeat(
                2,
                vec![Command::Repeat(2, vec![Command::Move(1)])]
            )]
        );
    }

    #[test]
    fn multi_command_block() {
        assert_eq!(
            parse("repeat 2 [penup forward 4 pendown forward 4]").unwrap(),
            vec![Command::Repeat(
                2,
                vec![
                    Command::PenUp,
                    Command::Move(4),
                    Command::PenDown,
                    Command::Move(4),
                ]
            )]
        );
    }

    #[test]
    fn unknown_word_fails_the_whole_line() {
        assert_eq!(
            parse("bogus"),
            Err(ParseError::UnknownCommand("bogus".to_owned()))
        );
        assert_eq!(
            parse("forward 1 bogus"),
            Err(ParseError::UnknownCommand("bogus".to_owned()))
        );
        assert!(parse("repeat 2 [bogus]").is_err());
    }

    #[test]
    fn missing_inputs() {
        assert_eq!(
            parse("forward"),
            Err(ParseError::NotEnoughInputs {
                cmd: "forward".to_owned(),
                expected: 1,
                found: 0,
            })
        );
        assert_eq!(
            parse("repeat 2"),
            Err(ParseError::NotEnoughInputs {
                cmd: "repeat".to_owned(),
                expected: 2,
                found: 1,
            })
        );
    }

    #[test]
    fn non_numeric_inputs() {
        assert_eq!(
            parse("forward ten"),
            Err(ParseError::BadNumber {
                cmd: "forward".to_owned(),
                param: "ten".to_owned(),
            })
        );
        assert!(parse("repeat x [forward 1]").is_err());
        assert!(parse("repeat -1 [forward 1]").is_err());
    }

    #[test]
    fn empty_line_is_not_a_program() {
        assert!(parse("").is_err());
        assert!(parse("  ").is_err());
    }

    #[test]
    fn unterminated_block() {
        assert_eq!(
            parse("repeat 2 [forward 1"),
            Err(ParseError::UnterminatedBlock("[forward".to_owned()))
        );
    }

    #[test]
    fn runaway_nesting_is_rejected() {
        let mut line = String::from("forward 1");
        for _ in 0..80 {
            line = format!("repeat 2 [{line}]");
        }
        assert_eq!(parse(&line), Err(ParseError::TooDeep));
    }
}
