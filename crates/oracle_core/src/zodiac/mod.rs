//! Fixed reference tables: the twelve signs, the ten bodies, and rulerships.

pub mod planets;
pub mod rulers;
pub mod signs;

pub use planets::{Planet, PlanetId, PLANETS};
pub use rulers::{get_sign_ruler, get_sign_ruler_from_longitude, RulershipScheme};
pub use signs::{
    resolve_sign_name, sign_from_longitude, sign_index_from_longitude, DegreeInSign, Element,
    Modality, ZodiacSign, ZODIAC_SIGNS,
};
