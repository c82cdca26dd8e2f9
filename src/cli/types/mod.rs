//! Typed values accepted on the command line.

pub mod filters;
pub mod position;
pub mod range;

pub use filters::{ReportKind, SortKey};
pub use position::Position;
pub use range::{RatingRange, AGE_BOUNDS, RATING_BOUNDS};
