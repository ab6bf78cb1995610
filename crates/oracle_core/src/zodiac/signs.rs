//! The twelve tropical signs and their element / modality classification.

use crate::angles::normalize_degrees;
use crate::numerology::fold_name;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

impl Element {
    pub const ALL: [Element; 4] = [Element::Fire, Element::Earth, Element::Air, Element::Water];

    pub fn localized(&self) -> &'static str {
        match self {
            Element::Fire => "Feu",
            Element::Earth => "Terre",
            Element::Air => "Air",
            Element::Water => "Eau",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    Cardinal,
    Fixed,
    Mutable,
}

impl Modality {
    pub const ALL: [Modality; 3] = [Modality::Cardinal, Modality::Fixed, Modality::Mutable];

    pub fn localized(&self) -> &'static str {
        match self {
            Modality::Cardinal => "Cardinal",
            Modality::Fixed => "Fixe",
            Modality::Mutable => "Mutable",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ZodiacSign {
    pub index: u8,
    pub name: &'static str,
    pub localized: &'static str,
    pub symbol: &'static str,
    pub element: Element,
    pub modality: Modality,
}

macro_rules! sign {
    ($index:expr, $name:expr, $localized:expr, $symbol:expr, $element:ident, $modality:ident) => {
        ZodiacSign {
            index: $index,
            name: $name,
            localized: $localized,
            symbol: $symbol,
            element: Element::$element,
            modality: Modality::$modality,
        }
    };
}

pub static ZODIAC_SIGNS: [ZodiacSign; 12] = [
    sign!(0, "aries", "Bélier", "♈", Fire, Cardinal),
    sign!(1, "taurus", "Taureau", "♉", Earth, Fixed),
    sign!(2, "gemini", "Gémeaux", "♊", Air, Mutable),
    sign!(3, "cancer", "Cancer", "♋", Water, Cardinal),
    sign!(4, "leo", "Lion", "♌", Fire, Fixed),
    sign!(5, "virgo", "Vierge", "♍", Earth, Mutable),
    sign!(6, "libra", "Balance", "♎", Air, Cardinal),
    sign!(7, "scorpio", "Scorpion", "♏", Water, Fixed),
    sign!(8, "sagittarius", "Sagittaire", "♐", Fire, Mutable),
    sign!(9, "capricorn", "Capricorne", "♑", Earth, Cardinal),
    sign!(10, "aquarius", "Verseau", "♒", Air, Fixed),
    sign!(11, "pisces", "Poissons", "♓", Water, Mutable),
];

lazy_static::lazy_static! {
    /// Folded French and English names -> sign index.
    static ref SIGN_NAME_INDEX: HashMap<String, usize> = {
        let mut index = HashMap::new();
        for (i, sign) in ZODIAC_SIGNS.iter().enumerate() {
            index.insert(fold_name(sign.name), i);
            index.insert(fold_name(sign.localized), i);
        }
        index
    };
}

/// Sign index (0-11) for an ecliptic longitude.
pub fn sign_index_from_longitude(longitude: f64) -> usize {
    ((normalize_degrees(longitude) / 30.0).floor() as usize) % 12
}

pub fn sign_from_longitude(longitude: f64) -> &'static ZodiacSign {
    &ZODIAC_SIGNS[sign_index_from_longitude(longitude)]
}

/// Resolve a French or English sign name, ignoring case, accents and
/// surrounding whitespace. `None` when the name is not a sign.
pub fn resolve_sign_name(name: &str) -> Option<&'static ZodiacSign> {
    SIGN_NAME_INDEX
        .get(fold_name(name.trim()).as_str())
        .map(|&i| &ZODIAC_SIGNS[i])
}

/// Whole degrees and arc-minutes of a longitude within its sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegreeInSign {
    pub degree: u8,
    pub minutes: u8,
}

impl DegreeInSign {
    pub fn from_longitude(longitude: f64) -> Self {
        let within = normalize_degrees(longitude) % 30.0;
        let degree = within.floor();
        let minutes = ((within - degree) * 60.0).floor().min(59.0);
        Self {
            degree: degree as u8,
            minutes: minutes as u8,
        }
    }
}

impl fmt::Display for DegreeInSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°{:02}'", self.degree, self.minutes)
    }
}
