//! Computational core behind oracle readings: natal chart geometry
//! (sidereal time, ascendant, equal houses, aspects) plus the numerology
//! and compatibility tables.
//!
//! Everything here is synchronous and side-effect free. Reference tables are
//! process-wide statics and are never mutated.

pub mod angles;
pub mod aspects;
pub mod chart;
pub mod compatibility;
pub mod config;
pub mod ephemeris;
pub mod error;
pub mod houses;
pub mod numerology;
pub mod reading;
pub mod zodiac;

pub use aspects::{Aspect, AspectCalculator, AspectKind};
pub use chart::{generate_natal_chart, BirthData, NatalChart, NatalChartBuilder};
pub use compatibility::{
    first_name_compatibility, sign_compatibility, NameCompatibility, SignCompatibility,
};
pub use config::EngineSettings;
pub use ephemeris::{Ephemeris, PlanetPosition, SyntheticEphemeris};
pub use error::{ChartError, ConfigError};
pub use houses::House;
pub use numerology::{daily_vibration, first_name_vibration, oracle_personal, Vibration};
pub use reading::{daily_reading, premium_reading, OracleReading};
pub use zodiac::{Element, Modality, PlanetId, ZodiacSign};
