use crate::error::KundaliError;
use crate::vedic::graha::Graha;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Geographic location coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lon: f64,
}

/// An already-resolved birth instant and place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthMoment {
    pub datetime: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoLocation>,
}

impl BirthMoment {
    pub fn new(datetime: DateTime<Utc>, location: Option<GeoLocation>) -> Self {
        Self { datetime, location }
    }
}

/// Raw positions handed over by an ephemeris for one birth instant.
///
/// Longitudes are in degrees and may fall outside [0, 360); `lagna` carries
/// whatever sidereal correction the ephemeris applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EphemerisSnapshot {
    pub julian_day: f64,
    pub grahas: HashMap<Graha, f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lagna: Option<f64>,
}

impl EphemerisSnapshot {
    /// Parse a snapshot from JSON (`{"julian_day": .., "grahas": {"Sun": ..}, "lagna": ..}`).
    pub fn from_json(json: &str) -> Result<Self, KundaliError> {
        serde_json::from_str(json).map_err(|e| KundaliError::InvalidSnapshot(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_from_json() {
        let json = r#"{
            "julian_day": 2446200.7708333335,
            "grahas": {"Sun": 35.0, "moon": 10.0, "Ketu": -20.5},
            "lagna": 100.0
        }"#;
        let snapshot = EphemerisSnapshot::from_json(json).unwrap();
        assert_eq!(snapshot.grahas.get(&Graha::Sun), Some(&35.0));
        assert_eq!(snapshot.grahas.get(&Graha::Moon), Some(&10.0));
        assert_eq!(snapshot.grahas.get(&Graha::Ketu), Some(&-20.5));
        assert_eq!(snapshot.lagna, Some(100.0));
    }

    #[test]
    fn test_snapshot_without_lagna() {
        let json = r#"{"julian_day": 2451545.0, "grahas": {}}"#;
        let snapshot = EphemerisSnapshot::from_json(json).unwrap();
        assert!(snapshot.lagna.is_none());
        assert!(snapshot.grahas.is_empty());
    }

    #[test]
    fn test_snapshot_rejects_unknown_graha() {
        let err = EphemerisSnapshot::from_json(r#"{"julian_day": 1.0, "grahas": {"Pluto": 1.0}}"#)
            .unwrap_err();
        assert!(matches!(err, KundaliError::InvalidSnapshot(_)));
    }
}
