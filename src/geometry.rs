/// Integer room coordinates as written in the map
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coords {
    pub x: i64,
    pub y: i64,
}

impl Coords {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// Continuous position of an ant between two rooms
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Linear blend between two room coordinates, `coef` in [0, 1]
    #[inline]
    pub fn mix(from: Coords, to: Coords, coef: f64) -> Self {
        Self {
            x: mix(from.x as f64, to.x as f64, coef),
            y: mix(from.y as f64, to.y as f64, coef),
        }
    }
}

impl From<Coords> for Position {
    fn from(c: Coords) -> Self {
        Self {
            x: c.x as f64,
            y: c.y as f64,
        }
    }
}

#[inline(always)]
fn mix(a: f64, b: f64, coef: f64) -> f64 {
    a * (1.0 - coef) + b * coef
}

/// Axis-aligned rectangle in room coordinate space (y grows downwards)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub top: i64,
    pub left: i64,
    pub bottom: i64,
    pub right: i64,
}

impl Rect {
    /// Degenerate rectangle around a single point
    pub const fn around(c: Coords) -> Self {
        Self {
            top: c.y,
            left: c.x,
            bottom: c.y,
            right: c.x,
        }
    }

    /// Grow the rectangle so it contains `c`
    pub fn enclose(&mut self, c: Coords) {
        self.top = self.top.min(c.y);
        self.bottom = self.bottom.max(c.y);
        self.left = self.left.min(c.x);
        self.right = self.right.max(c.x);
    }

    /// Smallest rectangle containing every point, `None` for an empty input
    pub fn enclosing<I: IntoIterator<Item = Coords>>(points: I) -> Option<Self> {
        let mut points = points.into_iter();
        let mut rect = Self::around(points.next()?);
        for c in points {
            rect.enclose(c);
        }
        Some(rect)
    }
}
