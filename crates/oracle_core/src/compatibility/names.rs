use crate::numerology::first_name_vibration;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Title used when either name carries no letters.
pub const PLACEHOLDER_TITLE: &str = "—";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameCompatibility {
    pub vib1: u8,
    pub vib2: u8,
    /// 1 to 10, or 0 when either name has no vibration.
    pub score: u8,
    pub title: String,
    pub description: String,
    pub advice: String,
}

impl NameCompatibility {
    fn placeholder(vib1: u8, vib2: u8) -> Self {
        Self {
            vib1,
            vib2,
            score: 0,
            title: PLACEHOLDER_TITLE.to_string(),
            description: String::new(),
            advice: String::new(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.score == 0
    }
}

struct Entry {
    score: u8,
    title: &'static str,
    description: &'static str,
    advice: &'static str,
}

const DEFAULT_ENTRY: Entry = Entry {
    score: 6,
    title: "Rencontre à explorer",
    description: "Deux vibrations différentes qui peuvent s'enrichir mutuellement.",
    advice: "Prenez le temps de comprendre le rythme de l'autre.",
};

lazy_static::lazy_static! {
    static ref NAME_TABLE: HashMap<&'static str, Entry> = {
        let mut table = HashMap::new();
        table.insert("same", Entry {
            score: 8,
            title: "Miroir",
            description: "Même vibration : vous vous comprenez sans parler.",
            advice: "Veillez à ne pas amplifier ensemble vos mêmes travers.",
        });
        table.insert("1-2", Entry {
            score: 7,
            title: "Le meneur et le conciliateur",
            description: "L'un ouvre la voie, l'autre assure l'entente.",
            advice: "Laissez de la place à la voix la plus douce.",
        });
        table.insert("1-3", Entry {
            score: 9,
            title: "Élan créatif",
            description: "Initiative et expression se nourrissent l'une l'autre.",
            advice: "Canalisez votre enthousiasme commun vers un projet.",
        });
        table.insert("1-5", Entry {
            score: 8,
            title: "Duo d'aventure",
            description: "Deux tempéraments indépendants qui aiment la nouveauté.",
            advice: "Gardez un point d'ancrage pour ne pas vous disperser.",
        });
        table.insert("1-8", Entry {
            score: 5,
            title: "Deux capitaines",
            description: "Volontés fortes : la rivalité guette.",
            advice: "Répartissez clairement les rôles.",
        });
        table.insert("2-4", Entry {
            score: 8,
            title: "Nid solide",
            description: "Sensibilité et fiabilité construisent un lien durable.",
            advice: "Autorisez-vous un peu d'imprévu.",
        });
        table.insert("2-6", Entry {
            score: 9,
            title: "Tendresse partagée",
            description: "Deux cœurs attentifs qui cherchent l'harmonie.",
            advice: "Exprimez aussi vos désaccords.",
        });
        table.insert("2-8", Entry {
            score: 7,
            title: "Force et douceur",
            description: "L'ambition de l'un est tempérée par le tact de l'autre.",
            advice: "Reconnaissez l'apport discret du partenaire.",
        });
        table.insert("3-5", Entry {
            score: 8,
            title: "Étincelles",
            description: "Une relation vive, drôle et changeante.",
            advice: "Construisez quelques habitudes communes.",
        });
        table.insert("3-6", Entry {
            score: 9,
            title: "Joie du foyer",
            description: "Créativité et chaleur font une maison vivante.",
            advice: "Partagez les responsabilités équitablement.",
        });
        table.insert("3-9", Entry {
            score: 8,
            title: "Inspiration",
            description: "Idéalisme et expression s'élèvent ensemble.",
            advice: "Ancrez vos rêves dans le concret.",
        });
        table.insert("4-5", Entry {
            score: 4,
            title: "Ordre et mouvement",
            description: "L'un veut des règles, l'autre de l'air.",
            advice: "Négociez un cadre souple.",
        });
        table.insert("4-7", Entry {
            score: 7,
            title: "Profondeur tranquille",
            description: "Rigueur et réflexion se respectent.",
            advice: "Parlez de vos sentiments, pas seulement de vos idées.",
        });
        table.insert("4-8", Entry {
            score: 8,
            title: "Bâtisseurs",
            description: "Deux partenaires concrets tournés vers la réussite.",
            advice: "Ne laissez pas le travail prendre toute la place.",
        });
        table.insert("5-7", Entry {
            score: 5,
            title: "Chercheurs de sens",
            description: "Curiosité commune mais besoins d'espace différents.",
            advice: "Respectez les temps de solitude de chacun.",
        });
        table.insert("6-9", Entry {
            score: 9,
            title: "Cœurs généreux",
            description: "Dévouement et altruisme tournés vers les autres.",
            advice: "Gardez du temps pour votre couple.",
        });
        table.insert("7-9", Entry {
            score: 7,
            title: "Âmes anciennes",
            description: "Une connexion spirituelle et réfléchie.",
            advice: "Partagez vos intuitions à voix haute.",
        });
        table.insert("11-22", Entry {
            score: 10,
            title: "Vision et réalisation",
            description: "Deux nombres maîtres : l'intuition rencontre la maîtrise.",
            advice: "Mettez cette intensité au service d'un but commun.",
        });
        table
    };
}

/// Symmetric table key: `"same"` or the sorted pair `"min-max"`.
pub fn pair_key(vib1: u8, vib2: u8) -> String {
    if vib1 == vib2 {
        "same".to_string()
    } else {
        format!("{}-{}", vib1.min(vib2), vib1.max(vib2))
    }
}

/// Compatibility of two first names through their vibrations.
pub fn first_name_compatibility(name1: &str, name2: &str) -> NameCompatibility {
    let vib1 = first_name_vibration(name1);
    let vib2 = first_name_vibration(name2);
    if vib1 == 0 || vib2 == 0 {
        return NameCompatibility::placeholder(vib1, vib2);
    }

    let key = pair_key(vib1, vib2);
    let entry = NAME_TABLE.get(key.as_str()).unwrap_or(&DEFAULT_ENTRY);
    NameCompatibility {
        vib1,
        vib2,
        score: entry.score,
        title: entry.title.to_string(),
        description: entry.description.to_string(),
        advice: entry.advice.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_key() {
        assert_eq!(pair_key(3, 3), "same");
        assert_eq!(pair_key(5, 3), "3-5");
        assert_eq!(pair_key(3, 5), "3-5");
        assert_eq!(pair_key(22, 11), "11-22");
    }

    #[test]
    fn test_empty_name_placeholder() {
        let result = first_name_compatibility("", "Paul");
        assert_eq!(result.score, 0);
        assert_eq!(result.title, "—");
        assert!(result.description.is_empty());
        assert!(result.advice.is_empty());
        assert_eq!(result.vib1, 0);
        assert!(result.is_placeholder());
    }

    #[test]
    fn test_same_vibration() {
        // Ana = 7
        let result = first_name_compatibility("Ana", "ana");
        assert_eq!(result.vib1, 7);
        assert_eq!(result.title, "Miroir");
        assert_eq!(result.score, 8);
    }

    #[test]
    fn test_table_hit_and_default() {
        // Marie = 1, "kb" = 4 -> 1-4 is not in the table
        let fallback = first_name_compatibility("Marie", "kb");
        assert_eq!(fallback.score, DEFAULT_ENTRY.score);
        assert_eq!(fallback.title, DEFAULT_ENTRY.title);

        // "bi" = 11, "iid" = 22
        let masters = first_name_compatibility("bi", "iid");
        assert_eq!(masters.score, 10);
    }

    #[test]
    fn test_symmetry() {
        let a = first_name_compatibility("Marie", "Paul");
        let b = first_name_compatibility("Paul", "Marie");
        assert_eq!(a.score, b.score);
        assert_eq!(a.title, b.title);
        assert_eq!(a.description, b.description);
        assert_eq!(a.advice, b.advice);
        assert_eq!((a.vib1, a.vib2), (b.vib2, b.vib1));
    }

    #[test]
    fn test_table_scores_in_range() {
        for entry in NAME_TABLE.values() {
            assert!((1..=10).contains(&entry.score));
        }
    }
}
