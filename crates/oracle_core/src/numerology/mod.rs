//! Pythagorean numerology: name vibrations, day vibrations and the
//! personal daily oracle.

pub mod letters;
pub mod reduce;
pub mod tables;

pub use letters::{first_name_vibration, fold_name, letter_value, name_sum};
pub use reduce::{
    daily_vibration, date_composite, life_path_number, oracle_personal, parse_birth_date,
    reduce_to_9, reduce_with_masters, MASTER_NUMBERS,
};
pub use tables::{vibration, Vibration, VIBRATIONS};
