use minilogo_turtle::{exec, Trace, Turtle};

fn main() {
    let cmds = minilogo::parse("repeat 4 [forward 90 right 90]").unwrap();
    let mut turtle = Turtle::default();
    let mut trace = Trace::new();
    exec(&cmds, &mut turtle, &mut trace);
    dbg!(trace.segments());
}
