use crate::zodiac::{resolve_sign_name, Element};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignCompatibility {
    pub sign1: String,
    pub sign2: String,
    pub element1: Element,
    pub element2: Element,
    pub score: u8,
    pub title: String,
    pub description: String,
    pub advice: String,
}

/// The ten unordered element pairs, each in its canonical order.
const ELEMENT_PAIRS: [(Element, Element); 10] = [
    (Element::Fire, Element::Fire),
    (Element::Earth, Element::Earth),
    (Element::Air, Element::Air),
    (Element::Water, Element::Water),
    (Element::Fire, Element::Air),
    (Element::Earth, Element::Water),
    (Element::Fire, Element::Earth),
    (Element::Fire, Element::Water),
    (Element::Earth, Element::Air),
    (Element::Air, Element::Water),
];

struct Entry {
    score: u8,
    title: &'static str,
    description: &'static str,
    advice: &'static str,
}

const DEFAULT_ENTRY: Entry = Entry {
    score: 5,
    title: "Rencontre des contraires",
    description: "Des énergies différentes qui demandent de l'adaptation.",
    advice: "Cherchez ce que chacun apporte à l'autre.",
};

lazy_static::lazy_static! {
    static ref ELEMENT_TABLE: HashMap<&'static str, Entry> = {
        let mut table = HashMap::new();
        table.insert("Feu-Feu", Entry {
            score: 8,
            title: "Double flamme",
            description: "Passion et enthousiasme partagés, une relation intense.",
            advice: "Apprenez à céder pour éviter les incendies.",
        });
        table.insert("Terre-Terre", Entry {
            score: 8,
            title: "Racines communes",
            description: "Fiabilité et valeurs concrètes, une base stable.",
            advice: "Osez sortir ensemble de vos habitudes.",
        });
        table.insert("Air-Air", Entry {
            score: 8,
            title: "Esprits complices",
            description: "Conversations sans fin et liberté mutuelle.",
            advice: "Passez des idées aux actes.",
        });
        table.insert("Eau-Eau", Entry {
            score: 9,
            title: "Océan d'émotions",
            description: "Une compréhension intuitive et profonde.",
            advice: "Gardez pied dans la réalité.",
        });
        table.insert("Feu-Air", Entry {
            score: 9,
            title: "Alchimie naturelle",
            description: "L'air attise le feu : élan, idées et audace.",
            advice: "Canalisez cette énergie vers des projets communs.",
        });
        table.insert("Terre-Eau", Entry {
            score: 9,
            title: "Jardin fertile",
            description: "L'eau nourrit la terre : tendresse et sécurité.",
            advice: "Exprimez vos besoins sans attendre d'être devinés.",
        });
        table.insert("Feu-Terre", Entry {
            score: 5,
            title: "Élan et prudence",
            description: "L'impatience rencontre la constance.",
            advice: "Accordez vos rythmes avant de décider.",
        });
        table.insert("Feu-Eau", Entry {
            score: 4,
            title: "Vapeur",
            description: "Passion et sensibilité peuvent se heurter.",
            advice: "Parlez avec douceur, écoutez avec patience.",
        });
        table.insert("Terre-Air", Entry {
            score: 5,
            title: "Concret et abstrait",
            description: "Le pragmatisme croise la pensée légère.",
            advice: "Respectez les deux façons de voir le monde.",
        });
        table.insert("Air-Eau", Entry {
            score: 6,
            title: "Brume",
            description: "La raison et l'émotion cherchent un langage commun.",
            advice: "Nommez ce que vous ressentez.",
        });
        table
    };
}

/// Canonical key of an unordered element pair, e.g. `"Feu-Air"` for both
/// (Air, Fire) and (Fire, Air).
pub fn element_pair_key(a: Element, b: Element) -> Option<String> {
    ELEMENT_PAIRS
        .iter()
        .find(|&&(x, y)| (x, y) == (a, b) || (x, y) == (b, a))
        .map(|(x, y)| format!("{}-{}", x.localized(), y.localized()))
}

/// Compatibility of two signs given by French or English name.
/// `None` when either name is not a sign.
pub fn sign_compatibility(sign1: &str, sign2: &str) -> Option<SignCompatibility> {
    let first = resolve_sign_name(sign1)?;
    let second = resolve_sign_name(sign2)?;

    let entry = element_pair_key(first.element, second.element)
        .and_then(|key| ELEMENT_TABLE.get(key.as_str()))
        .unwrap_or(&DEFAULT_ENTRY);

    Some(SignCompatibility {
        sign1: first.localized.to_string(),
        sign2: second.localized.to_string(),
        element1: first.element,
        element2: second.element,
        score: entry.score,
        title: entry.title.to_string(),
        description: entry.description.to_string(),
        advice: entry.advice.to_string(),
    })
}
