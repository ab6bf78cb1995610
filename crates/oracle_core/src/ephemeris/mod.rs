pub mod synthetic;
pub mod types;

pub use synthetic::{Ephemeris, SyntheticEphemeris};
pub use types::{PlanetPosition, HOUSE_UNASSIGNED};
