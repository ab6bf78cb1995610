//! Natal chart assembly.

pub mod birth;
pub mod natal;
pub mod summary;

pub use birth::BirthData;
pub use natal::{generate_natal_chart, NatalChart, NatalChartBuilder};
pub use summary::{ChartSummary, ElementCount, ModalityCount};
