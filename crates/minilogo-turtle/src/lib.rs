//! Turtle state and command execution for the minilogo dialect.
//!
//! The turtle is a cursor with a position, a heading, and a pen. Executing a
//! parsed command sequence mutates the turtle in place and reports every
//! drawn segment to a [`Canvas`]; what a canvas does with the segments is
//! not this crate's business. [`Trace`] is the canvas that just remembers
//! them, which is all the tests and the CLI need.

pub mod exec;
pub mod turtle;

pub use exec::{exec, Sandbox};
pub use turtle::{Canvas, Trace, Turtle};

pub use kurbo;
