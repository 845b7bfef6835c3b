pub mod classification;
pub mod rows;

pub use classification::{Classification, ClassificationKind, Column};
pub use rows::{Placing, RiderRow, Row, TeamRow};
