pub mod interval;
pub mod point;
pub mod rect;

pub use interval::Interval;
pub use point::Point;
pub use rect::Rect;
