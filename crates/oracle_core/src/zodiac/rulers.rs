//! Sign rulers.
//!
//! Maps zodiac signs to their planetary rulers (modern and traditional).

use super::planets::PlanetId;
use super::signs::sign_index_from_longitude;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RulershipScheme {
    /// Outer planets rule Scorpio, Aquarius and Pisces.
    #[default]
    Modern,
    Traditional,
}

const MODERN_RULERS: [PlanetId; 12] = [
    PlanetId::Mars,    // Aries
    PlanetId::Venus,   // Taurus
    PlanetId::Mercury, // Gemini
    PlanetId::Moon,    // Cancer
    PlanetId::Sun,     // Leo
    PlanetId::Mercury, // Virgo
    PlanetId::Venus,   // Libra
    PlanetId::Pluto,   // Scorpio
    PlanetId::Jupiter, // Sagittarius
    PlanetId::Saturn,  // Capricorn
    PlanetId::Uranus,  // Aquarius
    PlanetId::Neptune, // Pisces
];

const TRADITIONAL_RULERS: [PlanetId; 12] = [
    PlanetId::Mars,
    PlanetId::Venus,
    PlanetId::Mercury,
    PlanetId::Moon,
    PlanetId::Sun,
    PlanetId::Mercury,
    PlanetId::Venus,
    PlanetId::Mars,
    PlanetId::Jupiter,
    PlanetId::Saturn,
    PlanetId::Saturn,
    PlanetId::Jupiter,
];

/// Ruler of the sign at `sign_index` (taken modulo 12).
pub fn get_sign_ruler(sign_index: usize, scheme: RulershipScheme) -> PlanetId {
    let idx = sign_index % 12;
    match scheme {
        RulershipScheme::Modern => MODERN_RULERS[idx],
        RulershipScheme::Traditional => TRADITIONAL_RULERS[idx],
    }
}

pub fn get_sign_ruler_from_longitude(longitude: f64, scheme: RulershipScheme) -> PlanetId {
    get_sign_ruler(sign_index_from_longitude(longitude), scheme)
}
