//! Ascendant and Midheaven.
//!
//! The right ascension of the meridian is taken directly from local mean
//! sidereal time:
//!
//! `Asc = atan2(cos(RAMC), −sin(RAMC)·cos(ε) − tan(φ)·sin(ε))`
//!
//! `MC  = atan2(sin(RAMC), cos(RAMC)·cos(ε))`
//!
//! `tan(φ)` diverges as the latitude approaches ±90°, so ascendants for
//! polar birth places are numerically unstable. No clamping is applied.

use crate::angles::{
    local_sidereal_time, normalize_degrees, obliquity_for_ascendant, obliquity_for_midheaven,
};
use serde::{Deserialize, Serialize};

/// Ecliptic longitude of the ascendant, degrees in [0, 360).
pub fn ascendant(jd: f64, latitude: f64, longitude: f64) -> f64 {
    let ramc = local_sidereal_time(jd, longitude).to_radians();
    let eps = obliquity_for_ascendant(jd).to_radians();
    let phi = latitude.to_radians();

    let asc = f64::atan2(ramc.cos(), -ramc.sin() * eps.cos() - phi.tan() * eps.sin());
    normalize_degrees(asc.to_degrees())
}

/// Ecliptic longitude of the midheaven, degrees in [0, 360).
pub fn midheaven(jd: f64, longitude: f64) -> f64 {
    let ramc = local_sidereal_time(jd, longitude).to_radians();
    let eps = obliquity_for_midheaven(jd).to_radians();

    let mc = f64::atan2(ramc.sin(), ramc.cos() * eps.cos());
    normalize_degrees(mc.to_degrees())
}

/// The four chart angles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Angles {
    pub ascendant: f64,
    pub midheaven: f64,
    pub descendant: f64,
    #[serde(rename = "imumCoeli")]
    pub imum_coeli: f64,
}

impl Angles {
    pub fn compute(jd: f64, latitude: f64, longitude: f64) -> Self {
        let asc = ascendant(jd, latitude, longitude);
        let mc = midheaven(jd, longitude);
        Self {
            ascendant: asc,
            midheaven: mc,
            descendant: normalize_degrees(asc + 180.0),
            imum_coeli: normalize_degrees(mc + 180.0),
        }
    }
}
