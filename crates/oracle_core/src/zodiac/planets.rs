//! The ten bodies placed in a chart.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanetId {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl PlanetId {
    pub const ALL: [PlanetId; 10] = [
        PlanetId::Sun,
        PlanetId::Moon,
        PlanetId::Mercury,
        PlanetId::Venus,
        PlanetId::Mars,
        PlanetId::Jupiter,
        PlanetId::Saturn,
        PlanetId::Uranus,
        PlanetId::Neptune,
        PlanetId::Pluto,
    ];

    /// Position in the fixed planet list; also the phase offset of the
    /// synthetic ephemeris.
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn planet(&self) -> &'static Planet {
        &PLANETS[self.index()]
    }

    /// Sun and Moon never go retrograde.
    pub fn is_luminary(&self) -> bool {
        matches!(self, PlanetId::Sun | PlanetId::Moon)
    }

    /// Look up by canonical lowercase name ("sun", "moon", ...).
    pub fn from_name(name: &str) -> Option<Self> {
        PLANETS
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .map(|p| p.id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Planet {
    pub id: PlanetId,
    pub name: &'static str,
    pub localized: &'static str,
    pub symbol: &'static str,
}

macro_rules! planet {
    ($id:ident, $name:expr, $localized:expr, $symbol:expr) => {
        Planet {
            id: PlanetId::$id,
            name: $name,
            localized: $localized,
            symbol: $symbol,
        }
    };
}

pub static PLANETS: [Planet; 10] = [
    planet!(Sun, "sun", "Soleil", "☉"),
    planet!(Moon, "moon", "Lune", "☽"),
    planet!(Mercury, "mercury", "Mercure", "☿"),
    planet!(Venus, "venus", "Vénus", "♀"),
    planet!(Mars, "mars", "Mars", "♂"),
    planet!(Jupiter, "jupiter", "Jupiter", "♃"),
    planet!(Saturn, "saturn", "Saturne", "♄"),
    planet!(Uranus, "uranus", "Uranus", "♅"),
    planet!(Neptune, "neptune", "Neptune", "♆"),
    planet!(Pluto, "pluto", "Pluton", "♇"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_ids() {
        for (i, id) in PlanetId::ALL.iter().enumerate() {
            assert_eq!(id.index(), i);
            assert_eq!(id.planet().id, *id);
        }
    }

    #[test]
    fn test_from_name() {
        assert_eq!(PlanetId::from_name("venus"), Some(PlanetId::Venus));
        assert_eq!(PlanetId::from_name("Pluto"), Some(PlanetId::Pluto));
        assert_eq!(PlanetId::from_name("chiron"), None);
    }

    #[test]
    fn test_luminaries() {
        let luminaries: Vec<_> = PlanetId::ALL.iter().filter(|p| p.is_luminary()).collect();
        assert_eq!(luminaries, vec![&PlanetId::Sun, &PlanetId::Moon]);
    }
}
