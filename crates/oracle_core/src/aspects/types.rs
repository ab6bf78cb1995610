use crate::error::ConfigError;
use crate::zodiac::PlanetId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Angular relationships detected between two bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectKind {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Quincunx,
    Opposition,
}

impl AspectKind {
    /// Canonical table order.
    pub const ALL: [AspectKind; 6] = [
        AspectKind::Conjunction,
        AspectKind::Sextile,
        AspectKind::Square,
        AspectKind::Trine,
        AspectKind::Quincunx,
        AspectKind::Opposition,
    ];

    /// Exact angle in degrees.
    pub fn angle(&self) -> f64 {
        match self {
            AspectKind::Conjunction => 0.0,
            AspectKind::Sextile => 60.0,
            AspectKind::Square => 90.0,
            AspectKind::Trine => 120.0,
            AspectKind::Quincunx => 150.0,
            AspectKind::Opposition => 180.0,
        }
    }

    /// Default orb in degrees.
    pub fn default_orb(&self) -> f64 {
        match self {
            AspectKind::Conjunction => 8.0,
            AspectKind::Sextile => 6.0,
            AspectKind::Square => 7.0,
            AspectKind::Trine => 8.0,
            AspectKind::Quincunx => 3.0,
            AspectKind::Opposition => 8.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AspectKind::Conjunction => "conjunction",
            AspectKind::Sextile => "sextile",
            AspectKind::Square => "square",
            AspectKind::Trine => "trine",
            AspectKind::Quincunx => "quincunx",
            AspectKind::Opposition => "opposition",
        }
    }

    pub fn localized(&self) -> &'static str {
        match self {
            AspectKind::Conjunction => "Conjonction",
            AspectKind::Sextile => "Sextile",
            AspectKind::Square => "Carré",
            AspectKind::Trine => "Trigone",
            AspectKind::Quincunx => "Quinconce",
            AspectKind::Opposition => "Opposition",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }
}

/// One detected aspect between two bodies of a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    /// Localized name of the first body
    pub planet1: String,
    /// Localized name of the second body
    pub planet2: String,
    #[serde(rename = "planet1Id")]
    pub planet1_id: PlanetId,
    #[serde(rename = "planet2Id")]
    pub planet2_id: PlanetId,
    #[serde(rename = "type")]
    pub aspect_type: AspectKind,
    /// Exact angle for this aspect (0, 60, 90, 120, 150, 180)
    pub angle: f64,
    /// Deviation from the exact angle, rounded to 2 decimals
    pub orb: f64,
}

/// Settings for aspect calculations
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AspectSettings {
    /// Orb overrides per aspect name ("conjunction", "trine", ...);
    /// missing entries use [`AspectKind::default_orb`].
    #[serde(default)]
    pub orbs: HashMap<String, f64>,
}

impl AspectSettings {
    /// Orb overrides must use a lowercase aspect name from
    /// [`AspectKind::ALL`] and be a finite, non-negative number of degrees.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, orb) in &self.orbs {
            let field = format!("aspects.orbs.{}", name);
            match AspectKind::from_name(name) {
                None => {
                    return Err(ConfigError::InvalidValue {
                        field,
                        message: format!(
                            "unknown aspect. Valid aspects: {:?}",
                            AspectKind::ALL.iter().map(|k| k.name()).collect::<Vec<_>>()
                        ),
                    });
                }
                Some(kind) if kind.name() != name.as_str() => {
                    return Err(ConfigError::InvalidValue {
                        field,
                        message: format!("aspect names are lowercase, use \"{}\"", kind.name()),
                    });
                }
                Some(_) => {}
            }
            if !orb.is_finite() || *orb < 0.0 {
                return Err(ConfigError::InvalidValue {
                    field,
                    message: format!(
                        "orb must be a finite, non-negative number of degrees, got {}",
                        orb
                    ),
                });
            }
        }
        Ok(())
    }

    pub fn orb_for(&self, kind: AspectKind) -> f64 {
        self.orbs
            .get(kind.name())
            .copied()
            .unwrap_or_else(|| kind.default_orb())
    }
}
