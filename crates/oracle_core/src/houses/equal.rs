//! Equal houses: twelve 30° segments starting at the ascendant.

use crate::angles::normalize_degrees;
use crate::ephemeris::PlanetPosition;
use crate::zodiac::{sign_from_longitude, DegreeInSign};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct House {
    /// 1-12
    pub number: u8,
    /// Cusp longitude in degrees (0-360)
    pub cusp: f64,
    #[serde(rename = "signIndex")]
    pub sign_index: u8,
    /// Localized sign name at the cusp
    pub sign: String,
    pub degree: u8,
    pub minutes: u8,
}

impl House {
    fn at(number: u8, cusp: f64) -> Self {
        let sign = sign_from_longitude(cusp);
        let DegreeInSign { degree, minutes } = DegreeInSign::from_longitude(cusp);
        Self {
            number,
            cusp,
            sign_index: sign.index,
            sign: sign.localized.to_string(),
            degree,
            minutes,
        }
    }

    pub fn formatted(&self) -> String {
        let dms = DegreeInSign { degree: self.degree, minutes: self.minutes };
        format!("{} {}", dms, self.sign)
    }
}

/// House `n` has its cusp at `normalize(ascendant + (n − 1)·30)`.
pub fn equal_houses(ascendant: f64) -> Vec<House> {
    (1..=12u8)
        .map(|n| House::at(n, normalize_degrees(ascendant + f64::from(n - 1) * 30.0)))
        .collect()
}

/// House containing `longitude`: the first `i` with the longitude in
/// `[cusp_i, cusp_{i+1})` going forward around the circle. `None` only for
/// NaN input or a malformed cusp list.
pub fn house_for_longitude(houses: &[House], longitude: f64) -> Option<u8> {
    let count = houses.len();
    for i in 0..count {
        let start = houses[i].cusp;
        let end = houses[(i + 1) % count].cusp;

        let inside = if start <= end {
            longitude >= start && longitude < end
        } else {
            // segment wraps through 0° Aries
            longitude >= start || longitude < end
        };
        if inside {
            return Some(houses[i].number);
        }
    }
    None
}

/// Return `positions` with every house number filled in.
///
/// A longitude that no segment contains (NaN leaking in through permissive
/// validation) is put in house 1 so the result never carries the
/// unassigned sentinel.
pub fn assign_houses(positions: Vec<PlanetPosition>, houses: &[House]) -> Vec<PlanetPosition> {
    positions
        .into_iter()
        .map(|mut position| {
            position.house = match house_for_longitude(houses, position.longitude) {
                Some(number) => number,
                None => {
                    log::warn!(
                        "no house contains {} at longitude {}; placing it in house 1",
                        position.name,
                        position.longitude
                    );
                    1
                }
            };
            position
        })
        .collect()
}
