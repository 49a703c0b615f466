use kurbo::Line;
use minilogo::{Command, ParseError};

use crate::{Canvas, Trace, Turtle};

/// Apply a parsed command sequence to a turtle, in order.
pub fn exec(cmds: &[Command], turtle: &mut Turtle, canvas: &mut dyn Canvas) {
    for cmd in cmds {
        log::trace!("{:?}", cmd);
        match cmd {
            Command::Move(amount) => turtle.advance(*amount, canvas),
            Command::Rotate(degrees) => turtle.turn(*degrees),
            Command::PenUp => turtle.set_pen(false),
            Command::PenDown => turtle.set_pen(true),
            Command::Repeat(times, body) => {
                for _ in 0..*times {
                    exec(body, turtle, canvas);
                }
            }
        }
    }
}

/// A turtle, a recorded trace, and the parser wired together.
///
/// One command line goes through the whole pipeline at a time; a line that
/// fails to parse runs nothing and leaves the turtle exactly as it was.
#[derive(Clone, Debug, Default)]
pub struct Sandbox {
    turtle: Turtle,
    trace: Trace,
}

impl Sandbox {
    pub fn new() -> Sandbox {
        Sandbox::default()
    }

    /// Start the turtle somewhere other than the origin.
    pub fn with_turtle(turtle: Turtle) -> Sandbox {
        Sandbox {
            turtle,
            trace: Trace::new(),
        }
    }

    /// Parse and run one command line.
    pub fn execute(&mut self, line: &str) -> Result<(), ParseError> {
        let cmds = minilogo::parse(line)?;
        log::debug!("running {} commands", cmds.len());
        exec(&cmds, &mut self.turtle, &mut self.trace);
        Ok(())
    }

    pub fn turtle(&self) -> &Turtle {
        &self.turtle
    }

    /// Everything drawn so far, in draw order.
    pub fn segments(&self) -> &[Line] {
        self.trace.segments()
    }
}
