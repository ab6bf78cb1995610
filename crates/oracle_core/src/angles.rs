//! Angle and time helpers shared by every geometric computation.
//!
//! All angles are degrees. Functions are total over finite input and let
//! NaN flow through instead of failing; callers validate upstream.

use chrono::{DateTime, TimeZone};

/// Julian Day of the Unix epoch (1970-01-01T00:00:00Z).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Julian Day of J2000.0 (2000-01-01T12:00:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Mean obliquity of the ecliptic at J2000.0, degrees.
const OBLIQUITY_J2000_DEG: f64 = 23.439_291_1;

/// Normalize an angle to [0, 360).
pub fn normalize_degrees(value: f64) -> f64 {
    let normalized = value.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360.0
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// Continuous Julian Day of an instant. The offset carried by `instant` is
/// honored, so a local time with the right offset and its UTC equivalent give
/// the same value.
pub fn julian_day<Tz: TimeZone>(instant: &DateTime<Tz>) -> f64 {
    instant.timestamp_millis() as f64 / MILLIS_PER_DAY + UNIX_EPOCH_JD
}

/// Julian centuries elapsed since J2000.0.
pub fn centuries_since_j2000(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

/// Greenwich Mean Sidereal Time in degrees, [0, 360).
///
/// `280.46061837 + 360.98564736629·D + 0.00038793·T² − T³/38710000`
/// with D = days since J2000.0 and T = centuries since J2000.0.
pub fn greenwich_sidereal_time(jd: f64) -> f64 {
    let t = centuries_since_j2000(jd);
    let gmst = 280.460_618_37 + 360.985_647_366_29 * (jd - J2000_JD) + 0.000_387_93 * t * t
        - t * t * t / 38_710_000.0;
    normalize_degrees(gmst)
}

/// Local mean sidereal time in degrees for an east-positive longitude.
pub fn local_sidereal_time(jd: f64, longitude: f64) -> f64 {
    normalize_degrees(greenwich_sidereal_time(jd) + longitude)
}

/// Obliquity of the ecliptic with the cubic correction, used for the ascendant.
pub fn obliquity_for_ascendant(jd: f64) -> f64 {
    let t = centuries_since_j2000(jd);
    OBLIQUITY_J2000_DEG - (46.815 * t + 0.000_59 * t * t - 0.001_813 * t * t * t) / 3600.0
}

/// Linear-only obliquity, used for the midheaven.
///
/// Not the same polynomial as [`obliquity_for_ascendant`]. Midheaven values
/// have always been computed with the linear term only; the two differ by a
/// small fraction of an arcsecond within a few centuries of J2000.
pub fn obliquity_for_midheaven(jd: f64) -> f64 {
    let t = centuries_since_j2000(jd);
    OBLIQUITY_J2000_DEG - 46.815 * t / 3600.0
}

/// Shortest arc between two longitudes, in [0, 180].
pub fn angular_separation(lon1: f64, lon2: f64) -> f64 {
    let diff = (normalize_degrees(lon1) - normalize_degrees(lon2)).abs();
    diff.min(360.0 - diff)
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
