use crate::angles::{angular_separation, round2};
use crate::aspects::types::{Aspect, AspectKind, AspectSettings};
use crate::ephemeris::PlanetPosition;

/// Aspect calculator
#[derive(Debug, Clone, Default)]
pub struct AspectCalculator {
    settings: AspectSettings,
}

impl AspectCalculator {
    /// Calculator with the default orb table
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculator with orb overrides. Settings that fail
    /// [`AspectSettings::validate`] are still used, with a warning; bad
    /// keys are ignored and bad orbs match nothing.
    pub fn with_settings(settings: AspectSettings) -> Self {
        if let Err(e) = settings.validate() {
            log::warn!("aspect settings did not validate: {}", e);
        }
        Self { settings }
    }

    pub fn settings(&self) -> &AspectSettings {
        &self.settings
    }

    /// Every aspect kind whose orb window contains the separation between
    /// two longitudes, with the unrounded deviation from the exact angle.
    ///
    /// The whole table is scanned; overlapping windows (possible only with
    /// widened orbs) yield one entry each, in table order.
    pub fn calculate_aspects(&self, lon1: f64, lon2: f64) -> Vec<(AspectKind, f64)> {
        let separation = angular_separation(lon1, lon2);

        AspectKind::ALL
            .iter()
            .filter_map(|&kind| {
                let deviation = (separation - kind.angle()).abs();
                (deviation <= self.settings.orb_for(kind)).then_some((kind, deviation))
            })
            .collect()
    }

    /// Aspects between two placed bodies.
    pub fn aspects_between(&self, p1: &PlanetPosition, p2: &PlanetPosition) -> Vec<Aspect> {
        self.calculate_aspects(p1.longitude, p2.longitude)
            .into_iter()
            .map(|(kind, deviation)| Aspect {
                planet1: p1.name.clone(),
                planet2: p2.name.clone(),
                planet1_id: p1.planet,
                planet2_id: p2.planet,
                aspect_type: kind,
                angle: kind.angle(),
                orb: round2(deviation),
            })
            .collect()
    }

    /// Aspects over every unordered pair, in list order.
    pub fn compute_aspects(&self, positions: &[PlanetPosition]) -> Vec<Aspect> {
        let mut aspects = Vec::new();
        for i in 0..positions.len() {
            for j in (i + 1)..positions.len() {
                aspects.extend(self.aspects_between(&positions[i], &positions[j]));
            }
        }
        aspects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zodiac::PlanetId;

    #[test]
    fn test_conjunction_across_zero() {
        let calc = AspectCalculator::new();
        let found = calc.calculate_aspects(358.0, 3.0);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].0, AspectKind::Conjunction);
        assert!((found[0].1 - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_orb_boundaries() {
        let calc = AspectCalculator::new();
        // quincunx orb is 3
        assert_eq!(calc.calculate_aspects(0.0, 153.0)[0].0, AspectKind::Quincunx);
        assert!(calc.calculate_aspects(0.0, 153.5).is_empty());
        // 45° lies between conjunction and sextile windows
        assert!(calc.calculate_aspects(0.0, 45.0).is_empty());
    }

    #[test]
    fn test_overlapping_windows_report_both() {
        let mut settings = AspectSettings::default();
        settings.orbs.insert("square".to_string(), 30.0);
        let calc = AspectCalculator::with_settings(settings);
        let kinds: Vec<AspectKind> = calc
            .calculate_aspects(0.0, 63.0)
            .into_iter()
            .map(|(kind, _)| kind)
            .collect();
        assert_eq!(kinds, vec![AspectKind::Sextile, AspectKind::Square]);
    }

    #[test]
    fn test_unvalidated_settings_still_build() {
        let mut settings = AspectSettings::default();
        settings.orbs.insert("conjunction".to_string(), f64::NAN);
        settings.orbs.insert("Trine".to_string(), 0.5);
        assert!(settings.validate().is_err());

        let calc = AspectCalculator::with_settings(settings);
        // NaN orb matches nothing
        assert!(calc.calculate_aspects(10.0, 10.0).is_empty());
        // mis-cased key is ignored: the default trine orb of 8 applies
        assert_eq!(calc.calculate_aspects(0.0, 125.0)[0].0, AspectKind::Trine);
    }

    #[test]
    fn test_aspects_between_rounds_orb() {
        let calc = AspectCalculator::new();
        let sun = PlanetPosition::new(PlanetId::Sun, 10.0, false);
        let mars = PlanetPosition::new(PlanetId::Mars, 131.234_567, false);
        let aspects = calc.aspects_between(&sun, &mars);
        assert_eq!(aspects.len(), 1);
        assert_eq!(aspects[0].aspect_type, AspectKind::Trine);
        assert_eq!(aspects[0].angle, 120.0);
        assert_eq!(aspects[0].orb, 1.23);
        assert_eq!(aspects[0].planet1, "Soleil");
        assert_eq!(aspects[0].planet2, "Mars");
    }

    #[test]
    fn test_compute_aspects_pairs() {
        let calc = AspectCalculator::new();
        let positions = vec![
            PlanetPosition::new(PlanetId::Sun, 0.0, false),
            PlanetPosition::new(PlanetId::Moon, 90.0, false),
            PlanetPosition::new(PlanetId::Venus, 180.0, false),
        ];
        let aspects = calc.compute_aspects(&positions);
        let summary: Vec<(PlanetId, PlanetId, AspectKind)> = aspects
            .iter()
            .map(|a| (a.planet1_id, a.planet2_id, a.aspect_type))
            .collect();
        assert_eq!(
            summary,
            vec![
                (PlanetId::Sun, PlanetId::Moon, AspectKind::Square),
                (PlanetId::Sun, PlanetId::Venus, AspectKind::Opposition),
                (PlanetId::Moon, PlanetId::Venus, AspectKind::Square),
            ]
        );
    }
}
