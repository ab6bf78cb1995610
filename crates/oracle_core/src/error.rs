use thiserror::Error;

/// Errors raised at the chart assembly boundary
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("Invalid latitude: {latitude}. Expected a finite value in [-90, 90]")]
    InvalidLatitude { latitude: f64 },
    #[error("Invalid longitude: {longitude}. Expected a finite value in [-180, 180]")]
    InvalidLongitude { longitude: f64 },
    #[error("Invalid birth instant: {message}")]
    InvalidInstant { message: String },
    #[error("Ephemeris returned no planetary positions for JD {jd}")]
    NoPositions { jd: f64 },
}

/// Errors that can occur while loading engine settings
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read settings file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid settings TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}
