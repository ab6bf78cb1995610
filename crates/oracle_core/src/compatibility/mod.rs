//! Compatibility between two first names (numerology) or two signs
//! (elements).
//!
//! The two scorers signal bad input differently: names that carry no
//! letters give a placeholder record with score 0, an unknown sign name
//! gives `None`.

pub mod names;
pub mod signs;

pub use names::{first_name_compatibility, NameCompatibility};
pub use signs::{element_pair_key, sign_compatibility, SignCompatibility};
