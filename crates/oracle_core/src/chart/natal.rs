use crate::angles::julian_day;
use crate::aspects::{Aspect, AspectCalculator};
use crate::chart::birth::BirthData;
use crate::chart::summary::ChartSummary;
use crate::config::EngineSettings;
use crate::ephemeris::{Ephemeris, PlanetPosition, SyntheticEphemeris};
use crate::error::ChartError;
use crate::houses::{assign_houses, equal_houses, Angles, House};
use crate::zodiac::{get_sign_ruler, sign_from_longitude, PlanetId};
use serde::{Deserialize, Serialize};

/// A fully assembled natal chart. Built once by [`NatalChartBuilder`] and
/// never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NatalChart {
    pub name: String,
    /// Local birth date, `YYYY-MM-DD`
    pub date: String,
    /// Local birth time, `HH:MM`
    pub time: String,
    pub location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
    pub julian_day: f64,
    pub ascendant: f64,
    pub midheaven: f64,
    pub descendant: f64,
    pub imum_coeli: f64,
    /// Position of the planet ruling the rising sign
    pub ascendant_ruler: PlanetPosition,
    pub planets: Vec<PlanetPosition>,
    pub houses: Vec<House>,
    pub aspects: Vec<Aspect>,
    pub sun_sign: String,
    pub moon_sign: String,
    pub rising_sign: String,
}

impl NatalChart {
    pub fn planet(&self, id: PlanetId) -> Option<&PlanetPosition> {
        self.planets.iter().find(|p| p.planet == id)
    }

    pub fn house(&self, number: u8) -> Option<&House> {
        self.houses.iter().find(|h| h.number == number)
    }

    /// Aspect with the smallest orb; ties keep the earlier one.
    pub fn tightest_aspect(&self) -> Option<&Aspect> {
        self.aspects.iter().fold(None, |best: Option<&Aspect>, aspect| match best {
            Some(b) if b.orb <= aspect.orb => Some(b),
            _ => Some(aspect),
        })
    }

    pub fn summary(&self) -> ChartSummary {
        ChartSummary::from_positions(&self.planets)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Assembles natal charts from an ephemeris and engine settings.
#[derive(Debug, Clone)]
pub struct NatalChartBuilder<E: Ephemeris = SyntheticEphemeris> {
    ephemeris: E,
    settings: EngineSettings,
    aspects: AspectCalculator,
}

impl NatalChartBuilder<SyntheticEphemeris> {
    pub fn new() -> Self {
        Self {
            ephemeris: SyntheticEphemeris::new(),
            settings: EngineSettings::default(),
            aspects: AspectCalculator::new(),
        }
    }
}

impl Default for NatalChartBuilder<SyntheticEphemeris> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Ephemeris> NatalChartBuilder<E> {
    pub fn with_ephemeris<F: Ephemeris>(self, ephemeris: F) -> NatalChartBuilder<F> {
        NatalChartBuilder {
            ephemeris,
            settings: self.settings,
            aspects: self.aspects,
        }
    }

    /// Settings built in code are not required to validate; problems are
    /// logged and the chart is built anyway.
    pub fn with_settings(mut self, settings: EngineSettings) -> Self {
        self.aspects = AspectCalculator::with_settings(settings.aspects.clone());
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn build(&self, birth: &BirthData) -> Result<NatalChart, ChartError> {
        if self.settings.chart.strict_validation {
            birth.validate()?;
        } else if let Err(e) = birth.validate() {
            log::warn!("building chart for {:?} from unchecked input: {}", birth.name, e);
        }

        let jd = julian_day(&birth.datetime);
        let angles = Angles::compute(jd, birth.latitude, birth.longitude);

        let positions = self.ephemeris.calc_positions(jd);
        let houses = equal_houses(angles.ascendant);
        let aspects = self.aspects.compute_aspects(&positions);
        let planets = assign_houses(positions, &houses);

        let rising = sign_from_longitude(angles.ascendant);
        let ruler_id = get_sign_ruler(rising.index as usize, self.settings.chart.rulership);
        let ascendant_ruler = match planets.iter().find(|p| p.planet == ruler_id) {
            Some(ruler) => ruler.clone(),
            None => {
                let first = planets.first().ok_or(ChartError::NoPositions { jd })?;
                log::warn!(
                    "ascendant ruler {:?} missing from positions; falling back to {}",
                    ruler_id,
                    first.name
                );
                first.clone()
            }
        };

        let sign_of = |id: PlanetId| {
            planets
                .iter()
                .find(|p| p.planet == id)
                .map(|p| p.sign.clone())
                .unwrap_or_default()
        };
        let sun_sign = sign_of(PlanetId::Sun);
        let moon_sign = sign_of(PlanetId::Moon);

        log::debug!(
            "natal chart for {:?}: jd={:.5} asc={:.4} mc={:.4} aspects={}",
            birth.name,
            jd,
            angles.ascendant,
            angles.midheaven,
            aspects.len()
        );

        Ok(NatalChart {
            name: birth.name.clone(),
            date: birth.datetime.format("%Y-%m-%d").to_string(),
            time: birth.datetime.format("%H:%M").to_string(),
            location: birth.location.clone(),
            latitude: birth.latitude,
            longitude: birth.longitude,
            timezone: birth.timezone.clone(),
            julian_day: jd,
            ascendant: angles.ascendant,
            midheaven: angles.midheaven,
            descendant: angles.descendant,
            imum_coeli: angles.imum_coeli,
            ascendant_ruler,
            planets,
            houses,
            aspects,
            sun_sign,
            moon_sign,
            rising_sign: rising.localized.to_string(),
        })
    }
}

/// Build a chart with the synthetic ephemeris and default settings.
pub fn generate_natal_chart(birth: &BirthData) -> Result<NatalChart, ChartError> {
    NatalChartBuilder::new().build(birth)
}
