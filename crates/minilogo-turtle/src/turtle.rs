use kurbo::{Line, Point, Vec2};

/// Receives the line segments the turtle draws.
///
/// The interpreter only ever hands segments to this seam; turning them into
/// pixels, plotter moves, or SVG paths is the implementor's business.
pub trait Canvas {
    fn line(&mut self, from: Point, to: Point);
}

/// A stateful cursor with a position, a heading, and a pen.
#[derive(Clone, Debug, PartialEq)]
pub struct Turtle {
    pos: Point,
    // Degrees, counterclockwise from the +x axis.
    heading: f64,
    pen_down: bool,
}

impl Default for Turtle {
    fn default() -> Turtle {
        Turtle::at(Point::ORIGIN)
    }
}

impl Turtle {
    /// A turtle at `pos`, heading along +x, pen down.
    pub fn at(pos: impl Into<Point>) -> Turtle {
        Turtle {
            pos: pos.into(),
            heading: 0.0,
            pen_down: true,
        }
    }

    /// Advance by `amount` units along the current heading, drawing onto
    /// `canvas` when the pen is down. Negative amounts move backwards. The
    /// position updates whatever the pen is doing.
    pub fn advance(&mut self, amount: i32, canvas: &mut dyn Canvas) {
        let next = self.pos + Vec2::from_angle(self.heading.to_radians()) * f64::from(amount);
        if self.pen_down {
            canvas.line(self.pos, next);
        }
        self.pos = next;
    }

    /// Turn counterclockwise by `degrees`; negative turns clockwise.
    pub fn turn(&mut self, degrees: i32) {
        self.heading += f64::from(degrees);
    }

    pub fn set_pen(&mut self, down: bool) {
        self.pen_down = down;
    }

    pub fn pos(&self) -> Point {
        self.pos
    }

    /// Heading in degrees, counterclockwise from the +x axis.
    pub fn heading(&self) -> f64 {
        self.heading
    }

    pub fn pen_is_down(&self) -> bool {
        self.pen_down
    }
}

/// A [`Canvas`] that just remembers every segment, in draw order.
#[derive(Clone, Debug, Default)]
pub struct Trace {
    segments: Vec<Line>,
}

impl Trace {
    pub fn new() -> Trace {
        Trace::default()
    }

    pub fn segments(&self) -> &[Line] {
        &self.segments
    }
}

impl Canvas for Trace {
    fn line(&mut self, from: Point, to: Point) {
        self.segments.push(Line::new(from, to));
    }
}
