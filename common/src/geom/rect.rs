use super::interval::Interval;
use super::point::Point;
use crate::error::InvalidInput;
use std::fmt;

/// Axis-aligned rectangle given by its upper-left and lower-right corners.
///
/// `y` grows downwards, so the upper-left corner holds the smaller value on
/// both axes. Line and point rectangles are valid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    upper_left: Point<f64>,
    lower_right: Point<f64>,
}

impl Rect {
    pub fn new(upper_left: Point<f64>, lower_right: Point<f64>) -> Result<Self, InvalidInput> {
        let coords = [upper_left.x, upper_left.y, lower_right.x, lower_right.y];
        if coords.iter().any(|c| c.is_nan()) {
            return Err(InvalidInput::NotANumber);
        }
        if upper_left.x > lower_right.x || upper_left.y > lower_right.y {
            return Err(InvalidInput::MalformedRect {
                ul_x: upper_left.x,
                ul_y: upper_left.y,
                lr_x: lower_right.x,
                lr_y: lower_right.y,
            });
        }
        Ok(Self {
            upper_left,
            lower_right,
        })
    }

    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Self, InvalidInput> {
        Self::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    pub fn from_intervals(x: Interval, y: Interval) -> Self {
        Self {
            upper_left: Point::new(x.low(), y.low()),
            lower_right: Point::new(x.high(), y.high()),
        }
    }

    pub fn upper_left(&self) -> Point<f64> {
        self.upper_left
    }

    pub fn lower_right(&self) -> Point<f64> {
        self.lower_right
    }

    pub fn x_interval(&self) -> Interval {
        Interval::from_validated(self.upper_left.x, self.lower_right.x)
    }

    pub fn y_interval(&self) -> Interval {
        Interval::from_validated(self.upper_left.y, self.lower_right.y)
    }

    pub fn width(&self) -> f64 {
        self.lower_right.x - self.upper_left.x
    }
    pub fn height(&self) -> f64 {
        self.lower_right.y - self.upper_left.y
    }
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Positive-area overlap; rectangles sharing only an edge or corner do not count.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.upper_left.x < other.lower_right.x
            && self.lower_right.x > other.upper_left.x
            && self.upper_left.y < other.lower_right.y
            && self.lower_right.y > other.upper_left.y
    }

    pub fn contains(&self, p: Point<f64>) -> bool {
        p.x >= self.upper_left.x
            && p.x <= self.lower_right.x
            && p.y >= self.upper_left.y
            && p.y <= self.lower_right.y
    }

    pub fn contains_rect(&self, other: &Rect) -> bool {
        self.contains(other.upper_left) && self.contains(other.lower_right)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{({}), ({})}}", self.upper_left, self.lower_right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_upper_left_beyond_lower_right() {
        assert!(matches!(
            Rect::from_coords(3.0, 0.0, 1.0, 2.0),
            Err(InvalidInput::MalformedRect { .. })
        ));
        assert!(matches!(
            Rect::from_coords(0.0, 3.0, 1.0, 2.0),
            Err(InvalidInput::MalformedRect { .. })
        ));
    }

    #[test]
    fn rejects_nan_corner() {
        assert_eq!(
            Rect::from_coords(0.0, 0.0, f64::NAN, 1.0),
            Err(InvalidInput::NotANumber)
        );
    }

    #[test]
    fn accepts_line() {
        let line = Rect::from_coords(0.0, 1.0, 5.0, 1.0).unwrap();
        assert_eq!(line.height(), 0.0);
        assert_eq!(line.area(), 0.0);
        assert!(line.y_interval().is_degenerate());
    }

    #[test]
    fn projections_round_trip() {
        let r = Rect::from_coords(-1.0, 2.0, 3.0, 7.0).unwrap();
        assert_eq!(Rect::from_intervals(r.x_interval(), r.y_interval()), r);
        assert_eq!(r.width(), 4.0);
        assert_eq!(r.height(), 5.0);
        assert_eq!(r.area(), 20.0);
    }

    #[test]
    fn corner_contact_is_not_overlap() {
        let a = Rect::from_coords(0.0, 0.0, 2.0, 2.0).unwrap();
        let b = Rect::from_coords(2.0, 2.0, 4.0, 4.0).unwrap();
        assert!(!a.overlaps(&b));
        assert!(a.contains(Point::new(2.0, 2.0)));
        assert!(b.contains(Point::new(2.0, 2.0)));
    }

    #[test]
    fn display() {
        let r = Rect::from_coords(0.0, 0.0, 4.0, 4.5).unwrap();
        assert_eq!(r.to_string(), "{(0, 0), (4, 4.5)}");
    }
}
