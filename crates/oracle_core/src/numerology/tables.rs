//! Reference meanings for the vibrations 1 to 9.

use chrono::Datelike;
use serde::Serialize;

/// Substituted into a message when no first name is known.
pub const ANONYMOUS_NAME: &str = "vous";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vibration {
    pub number: u8,
    pub title: &'static str,
    pub keyword: &'static str,
    /// Message templates; `{name}` is replaced by the reader's first name.
    pub messages: [&'static str; 4],
}

impl Vibration {
    /// Pick one of the four messages by day of year and fill in `name`.
    /// A name opening the sentence gets an uppercase first letter.
    pub fn message_for(&self, date: &impl Datelike, name: &str) -> String {
        let template = self.messages[(date.ordinal0() % 4) as usize];
        let name = name.trim();
        let name = if name.is_empty() { ANONYMOUS_NAME } else { name };
        let text = template.replace("{name}", name);
        if !template.starts_with("{name}") {
            return text;
        }
        let mut chars = text.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => text,
        }
    }
}

pub static VIBRATIONS: [Vibration; 9] = [
    Vibration {
        number: 1,
        title: "L'Initiateur",
        keyword: "Commencement",
        messages: [
            "{name}, une porte s'ouvre aujourd'hui : osez faire le premier pas.",
            "L'énergie du départ vous porte, {name}. Lancez ce que vous repoussiez.",
            "{name}, votre volonté trace le chemin. Avancez sans attendre d'approbation.",
            "Un nouveau cycle commence pour {name}. Semez une intention claire.",
        ],
    },
    Vibration {
        number: 2,
        title: "Le Diplomate",
        keyword: "Harmonie",
        messages: [
            "{name}, la douceur obtiendra aujourd'hui ce que la force n'obtient pas.",
            "Écoutez avant de répondre, {name} : un accord se prépare.",
            "{name}, une alliance discrète prend de la valeur. Cultivez-la.",
            "La patience est votre alliée, {name}. Laissez les choses mûrir.",
        ],
    },
    Vibration {
        number: 3,
        title: "Le Créateur",
        keyword: "Expression",
        messages: [
            "{name}, vos mots ont du poids aujourd'hui : dites ce que vous ressentez.",
            "La créativité circule librement pour {name}. Donnez-lui une forme.",
            "{name}, la joie partagée se multiplie. Entourez-vous.",
            "Une idée légère peut devenir grande, {name}. Notez-la.",
        ],
    },
    Vibration {
        number: 4,
        title: "Le Bâtisseur",
        keyword: "Stabilité",
        messages: [
            "{name}, chaque pierre posée aujourd'hui soutiendra demain.",
            "La méthode vous réussit, {name}. Terminez ce qui est commencé.",
            "{name}, vos fondations sont plus solides que vous ne le pensez.",
            "Un effort régulier porte ses fruits, {name}. Restez constant.",
        ],
    },
    Vibration {
        number: 5,
        title: "L'Aventurier",
        keyword: "Liberté",
        messages: [
            "{name}, le changement frappe à la porte : ouvrez-lui.",
            "Sortez de la routine, {name}. L'imprévu vous est favorable.",
            "{name}, un mouvement soudain dégage l'horizon.",
            "La curiosité vous guide aujourd'hui, {name}. Suivez-la.",
        ],
    },
    Vibration {
        number: 6,
        title: "Le Protecteur",
        keyword: "Amour",
        messages: [
            "{name}, un geste d'attention changera la journée de quelqu'un.",
            "Le foyer vous appelle, {name}. Prenez soin de ceux qui comptent.",
            "{name}, l'harmonie autour de vous commence par la paix en vous.",
            "Une responsabilité acceptée avec cœur devient une force, {name}.",
        ],
    },
    Vibration {
        number: 7,
        title: "Le Sage",
        keyword: "Introspection",
        messages: [
            "{name}, le silence a une réponse pour vous aujourd'hui.",
            "Prenez du recul, {name}. Ce qui est caché devient clair.",
            "{name}, votre intuition voit plus loin que votre raison.",
            "Une lecture, une marche, une pause : {name}, nourrissez votre esprit.",
        ],
    },
    Vibration {
        number: 8,
        title: "Le Stratège",
        keyword: "Abondance",
        messages: [
            "{name}, vos décisions d'aujourd'hui ont un effet durable.",
            "L'ambition est bien placée, {name}. Visez juste.",
            "{name}, une récompense arrive pour un travail passé.",
            "Prenez les commandes, {name} : la situation attend votre décision.",
        ],
    },
    Vibration {
        number: 9,
        title: "L'Humaniste",
        keyword: "Accomplissement",
        messages: [
            "{name}, un cycle s'achève. Remerciez-le et laissez-le partir.",
            "La générosité vous revient multipliée, {name}.",
            "{name}, votre regard bienveillant éclaire les autres.",
            "Faites de la place, {name} : le nouveau a besoin d'espace.",
        ],
    },
];

/// Table entry for 1 to 9; master numbers and 0 have none.
pub fn vibration(number: u8) -> Option<&'static Vibration> {
    match number {
        1..=9 => Some(&VIBRATIONS[number as usize - 1]),
        _ => None,
    }
}
