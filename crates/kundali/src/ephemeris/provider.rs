use crate::ephemeris::julian::utc_to_julian_day;
use crate::ephemeris::types::{BirthMoment, EphemerisSnapshot};
use crate::error::KundaliError;

/// Snapshots further than this from the requested birth instant are reported.
const JULIAN_DAY_TOLERANCE: f64 = 1.0 / 1440.0;

/// Source of raw astronomical positions for a birth moment.
///
/// Implementations own Julian day conversion, planetary longitudes and the
/// ascendant; the chart engine only classifies what they return.
pub trait EphemerisProvider {
    fn positions(&self, birth: &BirthMoment) -> Result<EphemerisSnapshot, KundaliError>;
}

/// Provider serving one pre-computed snapshot, e.g. loaded from JSON.
#[derive(Debug, Clone)]
pub struct FixedEphemeris {
    snapshot: EphemerisSnapshot,
}

impl FixedEphemeris {
    pub fn new(snapshot: EphemerisSnapshot) -> Self {
        Self { snapshot }
    }

    pub fn from_json(json: &str) -> Result<Self, KundaliError> {
        EphemerisSnapshot::from_json(json).map(Self::new)
    }

    pub fn snapshot(&self) -> &EphemerisSnapshot {
        &self.snapshot
    }
}

impl EphemerisProvider for FixedEphemeris {
    fn positions(&self, birth: &BirthMoment) -> Result<EphemerisSnapshot, KundaliError> {
        let requested = utc_to_julian_day(birth.datetime);
        let drift = (requested - self.snapshot.julian_day).abs();
        if drift > JULIAN_DAY_TOLERANCE {
            log::warn!(
                "Fixed snapshot at JD {} served for birth at {} (JD {}, {:.3} days apart)",
                self.snapshot.julian_day,
                birth.datetime,
                requested,
                drift
            );
        }
        log::debug!("Serving fixed ephemeris snapshot for JD {}", self.snapshot.julian_day);
        Ok(self.snapshot.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::julian::julian_day_to_utc;
    use std::collections::HashMap;

    #[test]
    fn test_fixed_ephemeris_returns_snapshot() {
        let snapshot = EphemerisSnapshot {
            julian_day: 2451545.0,
            grahas: HashMap::new(),
            lagna: Some(12.0),
        };
        let provider: Box<dyn EphemerisProvider> = Box::new(FixedEphemeris::new(snapshot.clone()));
        let birth = BirthMoment::new(julian_day_to_utc(2451545.0).unwrap(), None);
        assert_eq!(provider.positions(&birth).unwrap(), snapshot);
    }
}
