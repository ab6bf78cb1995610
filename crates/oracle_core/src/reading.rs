//! Oracle readings handed to the presentation layer.
//!
//! A reading is either standard (day vibration only) or premium (day
//! vibration plus personal vibration and natal chart highlights). The
//! variant is carried in a `"kind"` field when serialized.

use crate::aspects::Aspect;
use crate::chart::NatalChart;
use crate::numerology::{daily_vibration, oracle_personal, Vibration, VIBRATIONS};
use crate::zodiac::Element;
use chrono::Datelike;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OracleReading {
    Standard(StandardReading),
    Premium(PremiumReading),
}

impl OracleReading {
    /// Fields shared by both variants.
    pub fn standard(&self) -> &StandardReading {
        match self {
            OracleReading::Standard(reading) => reading,
            OracleReading::Premium(reading) => &reading.standard,
        }
    }

    pub fn is_premium(&self) -> bool {
        matches!(self, OracleReading::Premium(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardReading {
    /// `YYYY-MM-DD`
    pub date: String,
    pub first_name: String,
    pub vibration: u8,
    pub title: String,
    pub keyword: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PremiumReading {
    #[serde(flatten)]
    pub standard: StandardReading,
    pub personal_vibration: u8,
    pub personal_title: String,
    pub personal_keyword: String,
    pub personal_message: String,
    pub sun_sign: String,
    pub moon_sign: String,
    pub rising_sign: String,
    pub dominant_element: Element,
    pub tightest_aspect: Option<AspectHighlight>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AspectHighlight {
    pub planet1: String,
    pub planet2: String,
    /// Localized aspect name, e.g. "Trigone"
    pub aspect: String,
    pub orb: f64,
}

impl From<&Aspect> for AspectHighlight {
    fn from(aspect: &Aspect) -> Self {
        Self {
            planet1: aspect.planet1.clone(),
            planet2: aspect.planet2.clone(),
            aspect: aspect.aspect_type.localized().to_string(),
            orb: aspect.orb,
        }
    }
}

fn format_date(date: &impl Datelike) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

fn standard_reading(today: &impl Datelike, first_name: &str) -> StandardReading {
    let number = daily_vibration(today);
    // daily_vibration is always in 1..=9
    let vibration: &Vibration = &VIBRATIONS[usize::from(number) - 1];
    StandardReading {
        date: format_date(today),
        first_name: first_name.trim().to_string(),
        vibration: number,
        title: vibration.title.to_string(),
        keyword: vibration.keyword.to_string(),
        message: vibration.message_for(today, first_name),
    }
}

/// Reading of the day for anyone.
pub fn daily_reading(today: &impl Datelike, first_name: &str) -> OracleReading {
    OracleReading::Standard(standard_reading(today, first_name))
}

/// Reading of the day enriched with the reader's birth date and chart.
/// `None` when `birth_date` does not parse.
pub fn premium_reading(
    today: &impl Datelike,
    first_name: &str,
    birth_date: &str,
    chart: &NatalChart,
) -> Option<OracleReading> {
    let personal = oracle_personal(today, birth_date)?;
    let summary = chart.summary();

    Some(OracleReading::Premium(PremiumReading {
        standard: standard_reading(today, first_name),
        personal_vibration: personal.number,
        personal_title: personal.title.to_string(),
        personal_keyword: personal.keyword.to_string(),
        personal_message: personal.message_for(today, first_name),
        sun_sign: chart.sun_sign.clone(),
        moon_sign: chart.moon_sign.clone(),
        rising_sign: chart.rising_sign.clone(),
        dominant_element: summary.dominant_element,
        tightest_aspect: chart.tightest_aspect().map(AspectHighlight::from),
    }))
}
