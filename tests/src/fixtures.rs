//! Enums shared between test files.

use tagged::Enum;

/// Result of a request.
#[derive(Debug, Clone, PartialEq, Enum)]
pub enum Status {
    Active,
    Failed(i64),
    Moved { code: i64, location: String },
}

#[derive(Debug, Clone, PartialEq, Enum)]
pub enum Shape {
    Circle(f64),
    Rect(f64, f64),
    #[tagged(rename = "Dot")]
    Point,
}
