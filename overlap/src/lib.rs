#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

pub mod check;

use kata_common::geom::{Interval, Rect};

/// Overlapping part of two intervals, or `None` when they are disjoint or
/// only touch at an endpoint.
///
/// The interval that starts first is compared against the one that starts
/// later; for equal lows the longer interval counts as first, which keeps
/// the result independent of argument order. A single-coordinate interval
/// overlaps another only when it lies strictly inside it, or when both are
/// the same point.
pub fn overlap(line1: Interval, line2: Interval) -> Option<Interval> {
    if line1 == line2 {
        return Some(line1);
    }

    let (first, later) = if starts_before(&line1, &line2) {
        (line1, line2)
    } else {
        (line2, line1)
    };

    if later.low() >= first.high() {
        return None;
    }
    if later.is_degenerate() && !first.contains_strictly(later.low()) {
        return None;
    }

    Interval::new(later.low(), first.high().min(later.high())).ok()
}

fn starts_before(a: &Interval, b: &Interval) -> bool {
    a.low() < b.low() || (a.low() == b.low() && a.high() >= b.high())
}

/// Intersection of two rectangles, checked independently on each axis.
///
/// Returns `None` unless both axes overlap; a rectangle that overlaps on
/// only one axis is reported as no intersection.
pub fn rectangle_intersection(rect1: &Rect, rect2: &Rect) -> Option<Rect> {
    let x = overlap(rect1.x_interval(), rect2.x_interval());
    let y = overlap(rect1.y_interval(), rect2.y_interval());

    match (x, y) {
        (Some(x), Some(y)) => Some(Rect::from_intervals(x, y)),
        (x, y) => {
            log::debug!(
                "{} and {} do not intersect (x overlap: {}, y overlap: {})",
                rect1,
                rect2,
                x.is_some(),
                y.is_some()
            );
            None
        }
    }
}

pub trait Intersect: Sized {
    fn intersection(&self, other: &Self) -> Option<Self>;
}

impl Intersect for Interval {
    fn intersection(&self, other: &Self) -> Option<Self> {
        overlap(*self, *other)
    }
}

impl Intersect for Rect {
    fn intersection(&self, other: &Self) -> Option<Self> {
        rectangle_intersection(self, other)
    }
}
