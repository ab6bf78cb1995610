//! Deterministic planetary positions.
//!
//! [`SyntheticEphemeris`] is not an astronomical model: each body follows a
//! smooth trigonometric curve of the Julian Day, phase-shifted by its index
//! in the planet list. Charts, aspects and stored readings depend on these
//! exact numbers, so the formulas must not drift.

use super::types::PlanetPosition;
use crate::angles::normalize_degrees;
use crate::zodiac::PlanetId;

/// Source of planetary longitudes for chart assembly.
pub trait Ephemeris {
    /// Position of a single body, house unassigned.
    fn calc_planet_position(&self, planet: PlanetId, jd: f64) -> PlanetPosition;

    /// Positions of all ten bodies, in [`PlanetId::ALL`] order.
    fn calc_positions(&self, jd: f64) -> Vec<PlanetPosition> {
        PlanetId::ALL
            .iter()
            .map(|&planet| self.calc_planet_position(planet, jd))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SyntheticEphemeris;

impl SyntheticEphemeris {
    pub fn new() -> Self {
        Self
    }

    /// `normalize(sin(jd·0.01 + i)·10000 mod 360)`
    pub fn longitude(planet: PlanetId, jd: f64) -> f64 {
        let phase = jd * 0.01 + planet.index() as f64;
        normalize_degrees((phase.sin() * 10_000.0) % 360.0)
    }

    /// `sin(jd·0.05 + i) < −0.5`, never for the luminaries.
    pub fn is_retrograde(planet: PlanetId, jd: f64) -> bool {
        if planet.is_luminary() {
            return false;
        }
        let phase = jd * 0.05 + planet.index() as f64;
        phase.sin() < -0.5
    }
}

impl Ephemeris for SyntheticEphemeris {
    fn calc_planet_position(&self, planet: PlanetId, jd: f64) -> PlanetPosition {
        PlanetPosition::new(
            planet,
            Self::longitude(planet, jd),
            Self::is_retrograde(planet, jd),
        )
    }
}
