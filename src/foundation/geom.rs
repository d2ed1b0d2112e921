use std::ops::{Add, Sub};

/// Integer pixel offset or position.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Point {
    /// Horizontal component, growing to the right.
    pub x: i32,
    /// Vertical component, growing downward.
    pub y: i32,
}

impl Point {
    /// The origin `(0, 0)`.
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a point from its components.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component-wise addition, or `None` on `i32` overflow.
    pub fn checked_add(self, rhs: Point) -> Option<Point> {
        Some(Point::new(self.x.checked_add(rhs.x)?, self.y.checked_add(rhs.y)?))
    }

    /// Component-wise subtraction, or `None` on `i32` overflow.
    pub fn checked_sub(self, rhs: Point) -> Option<Point> {
        Some(Point::new(self.x.checked_sub(rhs.x)?, self.y.checked_sub(rhs.y)?))
    }
}

/// Shorthand for [`Point::new`].
pub const fn pt(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Axis-aligned half-open pixel rectangle `[min, max)`.
///
/// Constructors do not canonicalise: a rectangle with `max < min` is representable and is
/// rejected by the compositor rather than silently swapped.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Rect {
    /// Inclusive top-left corner.
    pub min: Point,
    /// Exclusive bottom-right corner.
    pub max: Point,
}

impl Rect {
    /// Create a rectangle from its corner coordinates.
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0, y0),
            max: Point::new(x1, y1),
        }
    }

    /// Rectangle anchored at the origin with the given size.
    pub const fn from_size(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Horizontal extent (`max.x - min.x`), negative for inverted rectangles. Saturates at the
    /// `i32` range; see [`Rect::checked_size`].
    pub fn width(&self) -> i32 {
        self.max.x.saturating_sub(self.min.x)
    }

    /// Vertical extent (`max.y - min.y`), negative for inverted rectangles. Saturates at the
    /// `i32` range; see [`Rect::checked_size`].
    pub fn height(&self) -> i32 {
        self.max.y.saturating_sub(self.min.y)
    }

    /// `(width, height)`, or `None` when either does not fit in `i32`.
    pub fn checked_size(&self) -> Option<(i32, i32)> {
        Some((
            self.max.x.checked_sub(self.min.x)?,
            self.max.y.checked_sub(self.min.y)?,
        ))
    }

    /// Rectangle of the same size with its top-left corner at `origin`, or `None` on overflow.
    pub fn checked_at(&self, origin: Point) -> Option<Rect> {
        let (w, h) = self.checked_size()?;
        Some(Rect {
            min: origin,
            max: origin.checked_add(Point::new(w, h))?,
        })
    }

    /// Return `true` when `max >= min` on both axes.
    pub fn is_well_formed(&self) -> bool {
        self.max.x >= self.min.x && self.max.y >= self.min.y
    }

    /// Return `true` when the rectangle covers no pixel.
    pub fn is_empty(&self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Rectangle moved by `d`. Panics on overflow in debug builds; see [`Rect::checked_translate`].
    pub fn translate(&self, d: Point) -> Rect {
        Rect {
            min: self.min + d,
            max: self.max + d,
        }
    }

    /// Rectangle moved by `d`, or `None` when a corner leaves the `i32` range.
    pub fn checked_translate(&self, d: Point) -> Option<Rect> {
        Some(Rect {
            min: self.min.checked_add(d)?,
            max: self.max.checked_add(d)?,
        })
    }

    /// Return `true` when both rectangles are non-empty and share at least one pixel.
    pub fn overlaps(&self, other: &Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }

    /// Return `true` when `p` lies inside the rectangle.
    pub fn contains(&self, p: Point) -> bool {
        self.min.x <= p.x && p.x < self.max.x && self.min.y <= p.y && p.y < self.max.y
    }

    /// Return `true` when every pixel of `other` lies inside `self`. Empty rectangles are
    /// contained everywhere.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.is_empty()
            || (self.min.x <= other.min.x
                && other.max.x <= self.max.x
                && self.min.y <= other.min.y
                && other.max.y <= self.max.y)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/geom.rs"]
mod tests;
