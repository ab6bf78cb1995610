use crate::angles::normalize_degrees;
use crate::zodiac::{sign_from_longitude, DegreeInSign, PlanetId};
use serde::{Deserialize, Serialize};

/// House number carried by a position before house assignment runs.
pub const HOUSE_UNASSIGNED: u8 = 0;

/// Placement of one body in a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanetPosition {
    pub planet: PlanetId,
    /// Localized display name ("Soleil", "Lune", ...)
    pub name: String,
    pub symbol: String,
    /// Ecliptic longitude in degrees (0-360)
    pub longitude: f64,
    #[serde(rename = "signIndex")]
    pub sign_index: u8,
    /// Localized sign name
    pub sign: String,
    pub degree: u8,
    pub minutes: u8,
    /// 1-12 once houses are assigned, [`HOUSE_UNASSIGNED`] before
    pub house: u8,
    pub retrograde: bool,
}

impl PlanetPosition {
    /// Resolve sign and in-sign degree for `longitude`; the house stays
    /// unassigned.
    pub fn new(planet: PlanetId, longitude: f64, retrograde: bool) -> Self {
        let meta = planet.planet();
        let longitude = normalize_degrees(longitude);
        let sign = sign_from_longitude(longitude);
        let DegreeInSign { degree, minutes } = DegreeInSign::from_longitude(longitude);
        Self {
            planet,
            name: meta.localized.to_string(),
            symbol: meta.symbol.to_string(),
            longitude,
            sign_index: sign.index,
            sign: sign.localized.to_string(),
            degree,
            minutes,
            house: HOUSE_UNASSIGNED,
            retrograde,
        }
    }

    pub fn has_house(&self) -> bool {
        (1..=12).contains(&self.house)
    }

    /// `"15°23' Gémeaux"`
    pub fn formatted(&self) -> String {
        let dms = DegreeInSign { degree: self.degree, minutes: self.minutes };
        format!("{} {}", dms, self.sign)
    }
}
