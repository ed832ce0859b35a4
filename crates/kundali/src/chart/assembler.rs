use crate::chart::data::{Chart, Placement};
use crate::ephemeris::julian::julian_day_to_utc;
use crate::ephemeris::provider::EphemerisProvider;
use crate::ephemeris::types::{BirthMoment, EphemerisSnapshot};
use crate::error::KundaliError;
use crate::vedic::angle::normalize_degrees;
use crate::vedic::dashas::{DashaPeriod, DashaTimeline, DEFAULT_DASHA_PERIODS};
use crate::vedic::graha::{Body, Graha};
use crate::vedic::nakshatra::{classify_mansion, get_nakshatra_for_longitude};
use crate::vedic::rashi::{classify_rashi, degree_in_rashi};
use crate::vedic::vargas::classify_navamsa;
use std::collections::{BTreeMap, HashMap};

/// Builds charts from raw longitudes.
#[derive(Debug, Clone, Copy)]
pub struct ChartAssembler {
    dasha_periods: usize,
}

impl Default for ChartAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartAssembler {
    pub fn new() -> Self {
        Self {
            dasha_periods: DEFAULT_DASHA_PERIODS,
        }
    }

    /// Number of dasha periods to compute (at least one).
    pub fn with_dasha_periods(mut self, count: usize) -> Self {
        self.dasha_periods = count.max(1);
        self
    }

    pub fn dasha_periods(&self) -> usize {
        self.dasha_periods
    }

    /// Assemble a chart. Either every placement and the dasha timeline are
    /// derived, or a single error is returned.
    pub fn assemble(
        &self,
        epoch_jd: f64,
        graha_longitudes: &HashMap<Graha, f64>,
        ascendant: Option<f64>,
    ) -> Result<Chart, KundaliError> {
        let birth = julian_day_to_utc(epoch_jd)
            .ok_or(KundaliError::InvalidEpoch { julian_day: epoch_jd })?;

        let mut grahas = BTreeMap::new();
        for graha in Graha::ALL {
            let raw = graha_longitudes
                .get(&graha)
                .copied()
                .ok_or(KundaliError::IncompleteInput { body: graha.into() })?;
            grahas.insert(graha, place(graha.into(), raw)?);
        }
        let ascendant = ascendant.ok_or(KundaliError::IncompleteInput { body: Body::Lagna })?;
        let lagna = place(Body::Lagna, ascendant)?;

        let moon_degree = grahas
            .get(&Graha::Moon)
            .map(|p| p.degree)
            .ok_or(KundaliError::IncompleteInput { body: Body::Moon })?;
        let moon_mansion = classify_mansion(moon_degree);

        let dasha: Vec<DashaPeriod> = DashaTimeline::new(birth, moon_degree)
            .take(self.dasha_periods)
            .collect();
        if dasha.len() < self.dasha_periods {
            return Err(KundaliError::InvalidEpoch { julian_day: epoch_jd });
        }

        log::debug!(
            "Assembled chart for JD {}: moon in {} pada {}, dasha starts with {}",
            epoch_jd,
            moon_mansion.nakshatra,
            moon_mansion.pada,
            dasha[0].planet
        );

        Ok(Chart {
            julian_day: epoch_jd,
            birth,
            grahas,
            lagna,
            moon_mansion,
            dasha,
        })
    }

    pub fn assemble_snapshot(&self, snapshot: &EphemerisSnapshot) -> Result<Chart, KundaliError> {
        self.assemble(snapshot.julian_day, &snapshot.grahas, snapshot.lagna)
    }

    /// Ask `provider` for positions at `birth` and assemble them.
    pub fn assemble_from<P: EphemerisProvider + ?Sized>(
        &self,
        provider: &P,
        birth: &BirthMoment,
    ) -> Result<Chart, KundaliError> {
        let snapshot = provider.positions(birth)?;
        self.assemble_snapshot(&snapshot)
    }
}

/// Assemble a chart with the default five-period dasha timeline.
pub fn assemble(
    epoch_jd: f64,
    graha_longitudes: &HashMap<Graha, f64>,
    ascendant: Option<f64>,
) -> Result<Chart, KundaliError> {
    ChartAssembler::new().assemble(epoch_jd, graha_longitudes, ascendant)
}

fn place(body: Body, raw_longitude: f64) -> Result<Placement, KundaliError> {
    if !raw_longitude.is_finite() {
        return Err(KundaliError::NonFiniteLongitude {
            body,
            value: raw_longitude,
        });
    }
    let degree = normalize_degrees(raw_longitude);
    let mansion = get_nakshatra_for_longitude(degree);
    let placement = Placement {
        body,
        degree,
        rashi: classify_rashi(degree),
        navamsa: classify_navamsa(degree),
        degree_in_rashi: degree_in_rashi(degree),
        nakshatra: mansion.nakshatra,
        pada: mansion.pada,
    };
    log::trace!(
        "{} at {:.4}: {} / navamsa {}",
        body,
        degree,
        placement.rashi,
        placement.navamsa
    );
    Ok(placement)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn longitudes() -> HashMap<Graha, f64> {
        Graha::ALL
            .iter()
            .enumerate()
            .map(|(i, g)| (*g, i as f64 * 40.0))
            .collect()
    }

    #[test]
    fn test_missing_graha_is_incomplete() {
        let mut input = longitudes();
        input.remove(&Graha::Saturn);
        let err = assemble(2451545.0, &input, Some(10.0)).unwrap_err();
        assert_eq!(err, KundaliError::IncompleteInput { body: Body::Saturn });
    }

    #[test]
    fn test_missing_ascendant_is_incomplete() {
        let err = assemble(2451545.0, &longitudes(), None).unwrap_err();
        assert_eq!(err, KundaliError::IncompleteInput { body: Body::Lagna });
    }

    #[test]
    fn test_non_finite_longitude() {
        let mut input = longitudes();
        input.insert(Graha::Mars, f64::NAN);
        let err = assemble(2451545.0, &input, Some(10.0)).unwrap_err();
        assert!(matches!(err, KundaliError::NonFiniteLongitude { body: Body::Mars, .. }));
    }

    #[test]
    fn test_custom_period_count() {
        let chart = ChartAssembler::new()
            .with_dasha_periods(9)
            .assemble(2451545.0, &longitudes(), Some(10.0))
            .unwrap();
        assert_eq!(chart.dasha.len(), 9);
        assert_eq!(ChartAssembler::new().with_dasha_periods(0).dasha_periods(), 1);
    }
}
