use thiserror::Error;

/// Rejected input. Absence of a result is never reported through this type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInput {
    #[error("malformed interval: low {low} is above high {high}")]
    MalformedInterval { low: f64, high: f64 },

    #[error("malformed rectangle: upper left ({ul_x}, {ul_y}) lies beyond lower right ({lr_x}, {lr_y})")]
    MalformedRect {
        ul_x: f64,
        ul_y: f64,
        lr_x: f64,
        lr_y: f64,
    },

    #[error("coordinate is not a number")]
    NotANumber,

    #[error("element {index} is not an integer: '{token}'")]
    NonNumeric { index: usize, token: String },

    #[error("element {index} is missing")]
    MissingElement { index: usize },

    #[error("expected {expected} coordinates, found {found}")]
    CoordinateCount { expected: usize, found: usize },

    #[error("empty value range: min {min} is above max {max}")]
    EmptyRange { min: i64, max: i64 },
}
