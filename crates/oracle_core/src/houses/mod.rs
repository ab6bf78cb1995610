//! Chart angles and the equal-house division.

pub mod angles;
pub mod equal;

pub use angles::{ascendant, midheaven, Angles};
pub use equal::{assign_houses, equal_houses, house_for_longitude, House};
