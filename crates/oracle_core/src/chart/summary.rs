//! Element and modality balance of a chart.

use crate::ephemeris::PlanetPosition;
use crate::zodiac::{Element, Modality, ZODIAC_SIGNS};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementCount {
    pub element: Element,
    pub count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModalityCount {
    pub modality: Modality,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSummary {
    /// One entry per element, in Fire, Earth, Air, Water order
    pub elements: Vec<ElementCount>,
    /// One entry per modality, in Cardinal, Fixed, Mutable order
    pub modalities: Vec<ModalityCount>,
    pub dominant_element: Element,
    pub dominant_modality: Modality,
    pub retrograde_count: usize,
}

impl ChartSummary {
    pub fn from_positions(positions: &[PlanetPosition]) -> Self {
        let sign_of = |p: &PlanetPosition| &ZODIAC_SIGNS[(p.sign_index as usize) % 12];

        let elements: Vec<ElementCount> = Element::ALL
            .iter()
            .map(|&element| ElementCount {
                element,
                count: positions.iter().filter(|p| sign_of(p).element == element).count(),
            })
            .collect();
        let modalities: Vec<ModalityCount> = Modality::ALL
            .iter()
            .map(|&modality| ModalityCount {
                modality,
                count: positions.iter().filter(|p| sign_of(p).modality == modality).count(),
            })
            .collect();

        // first maximum in table order wins ties
        let dominant_element = elements
            .iter()
            .fold(elements[0], |best, c| if c.count > best.count { *c } else { best })
            .element;
        let dominant_modality = modalities
            .iter()
            .fold(modalities[0], |best, c| if c.count > best.count { *c } else { best })
            .modality;

        Self {
            elements,
            modalities,
            dominant_element,
            dominant_modality,
            retrograde_count: positions.iter().filter(|p| p.retrograde).count(),
        }
    }

    pub fn count_for(&self, element: Element) -> usize {
        self.elements
            .iter()
            .find(|c| c.element == element)
            .map(|c| c.count)
            .unwrap_or(0)
    }
}
