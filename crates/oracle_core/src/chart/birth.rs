use crate::error::ChartError;
use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

/// Everything a chart needs to know about a birth.
///
/// `datetime` must already carry the correct UTC offset; the engine does
/// not resolve time zones. `location` and `timezone` are display labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthData {
    pub name: String,
    pub datetime: DateTime<FixedOffset>,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub timezone: String,
}

impl BirthData {
    pub fn new(
        name: impl Into<String>,
        datetime: DateTime<FixedOffset>,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            name: name.into(),
            datetime,
            latitude,
            longitude,
            location: String::new(),
            timezone: String::new(),
        }
    }

    /// Birth at 12:00 local time, for callers that do not know the hour.
    pub fn at_local_noon(
        name: impl Into<String>,
        date: NaiveDate,
        offset: FixedOffset,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self, ChartError> {
        let noon = date
            .and_hms_opt(12, 0, 0)
            .and_then(|local| offset.from_local_datetime(&local).single())
            .ok_or_else(|| ChartError::InvalidInstant {
                message: format!("cannot build local noon for {} at offset {}", date, offset),
            })?;
        Ok(Self::new(name, noon, latitude, longitude))
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = timezone.into();
        self
    }

    /// Latitude in [-90, 90] and longitude in [-180, 180], both finite.
    pub fn validate(&self) -> Result<(), ChartError> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(ChartError::InvalidLatitude { latitude: self.latitude });
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(ChartError::InvalidLongitude { longitude: self.longitude });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn paris_birth(lat: f64, lon: f64) -> BirthData {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let dt = offset.with_ymd_and_hms(1990, 6, 15, 14, 0, 0).unwrap();
        BirthData::new("Marie", dt, lat, lon)
    }

    #[test]
    fn test_validate_accepts_bounds() {
        assert!(paris_birth(48.8566, 2.3522).validate().is_ok());
        assert!(paris_birth(90.0, 180.0).validate().is_ok());
        assert!(paris_birth(-90.0, -180.0).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects() {
        assert_eq!(
            paris_birth(91.0, 0.0).validate(),
            Err(ChartError::InvalidLatitude { latitude: 91.0 })
        );
        assert!(matches!(
            paris_birth(f64::NAN, 0.0).validate(),
            Err(ChartError::InvalidLatitude { .. })
        ));
        assert_eq!(
            paris_birth(0.0, -180.5).validate(),
            Err(ChartError::InvalidLongitude { longitude: -180.5 })
        );
        assert!(matches!(
            paris_birth(0.0, f64::INFINITY).validate(),
            Err(ChartError::InvalidLongitude { .. })
        ));
    }

    #[test]
    fn test_at_local_noon() {
        let offset = FixedOffset::east_opt(3600).unwrap();
        let date = NaiveDate::from_ymd_opt(1985, 2, 3).unwrap();
        let birth = BirthData::at_local_noon("Paul", date, offset, 45.76, 4.84)
            .unwrap()
            .with_location("Lyon")
            .with_timezone("Europe/Paris");
        assert_eq!(birth.datetime.hour(), 12);
        assert_eq!(birth.datetime.naive_utc().hour(), 11);
        assert_eq!(birth.location, "Lyon");
        assert_eq!(birth.timezone, "Europe/Paris");
    }
}
