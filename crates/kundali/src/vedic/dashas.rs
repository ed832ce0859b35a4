//! Vimshottari dasha calculations for Vedic astrology.
//!
//! Dashas are time periods ruled by grahas, seeded by the Moon's nakshatra at
//! birth. The first period is cut short by the share of the nakshatra the
//! Moon has already crossed; every later period runs its full length.

use crate::ephemeris::julian::{julian_day_to_utc, MILLIS_PER_DAY};
use crate::error::KundaliError;
use crate::vedic::graha::{Body, Graha};
use crate::vedic::nakshatra::get_nakshatra_for_longitude;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

pub const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;
/// Fixed year length, leap years ignored.
pub const VIMSHOTTARI_YEAR_DAYS: f64 = 365.25;
/// Current period plus the next four.
pub const DEFAULT_DASHA_PERIODS: usize = 5;

pub type PlanetYears = (Graha, f64);

pub const VIMSHOTTARI_SEQUENCE: [PlanetYears; 9] = [
    (Graha::Ketu, 7.0),
    (Graha::Venus, 20.0),
    (Graha::Sun, 6.0),
    (Graha::Moon, 10.0),
    (Graha::Mars, 7.0),
    (Graha::Rahu, 18.0),
    (Graha::Jupiter, 16.0),
    (Graha::Saturn, 19.0),
    (Graha::Mercury, 17.0),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashaPeriod {
    pub planet: Graha,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(rename = "durationDays")]
    pub duration_days: f64,
}

/// Lazy, unbounded Vimshottari timeline.
///
/// Yields the birth period first, then cycles through the sequence forever.
/// Cloning the timeline before iterating gives a restartable copy. Iteration
/// ends only if a period boundary falls outside chrono's calendar range.
#[derive(Debug, Clone)]
pub struct DashaTimeline {
    next_start: DateTime<Utc>,
    seq_index: usize,
    first_remaining: Option<f64>,
}

impl DashaTimeline {
    /// Timeline for a birth instant and the Moon's longitude at that instant.
    pub fn new(birth: DateTime<Utc>, moon_longitude: f64) -> Self {
        let position = get_nakshatra_for_longitude(moon_longitude);
        let start_index = position.nakshatra.index() % VIMSHOTTARI_SEQUENCE.len();
        Self {
            next_start: birth,
            seq_index: start_index,
            first_remaining: Some(1.0 - position.progress),
        }
    }

    /// Graha ruling at birth.
    pub fn birth_lord(&self) -> Graha {
        VIMSHOTTARI_SEQUENCE[self.seq_index].0
    }
}

impl Iterator for DashaTimeline {
    type Item = DashaPeriod;

    fn next(&mut self) -> Option<DashaPeriod> {
        let (planet, years) = VIMSHOTTARI_SEQUENCE[self.seq_index];
        let effective_years = match self.first_remaining.take() {
            Some(remaining) => years * remaining,
            None => years,
        };

        let period = build_period(planet, self.next_start, effective_years)?;
        self.next_start = period.end;
        self.seq_index = (self.seq_index + 1) % VIMSHOTTARI_SEQUENCE.len();
        Some(period)
    }
}

fn build_period(planet: Graha, start: DateTime<Utc>, duration_years: f64) -> Option<DashaPeriod> {
    let duration_days = duration_years * VIMSHOTTARI_YEAR_DAYS;
    let millis = (duration_days * MILLIS_PER_DAY).round() as i64;
    let end = start.checked_add_signed(Duration::milliseconds(millis))?;
    Some(DashaPeriod {
        planet,
        start,
        end,
        duration_days,
    })
}

/// Compute the current and next four Vimshottari periods.
pub fn compute_dasha(epoch_jd: f64, moon_longitude: f64) -> Result<Vec<DashaPeriod>, KundaliError> {
    compute_vimshottari_dasha(epoch_jd, moon_longitude, DEFAULT_DASHA_PERIODS)
}

/// Compute the first `count` Vimshottari periods from a Julian-day epoch.
pub fn compute_vimshottari_dasha(
    epoch_jd: f64,
    moon_longitude: f64,
    count: usize,
) -> Result<Vec<DashaPeriod>, KundaliError> {
    let birth = julian_day_to_utc(epoch_jd)
        .ok_or(KundaliError::InvalidEpoch { julian_day: epoch_jd })?;
    if !moon_longitude.is_finite() {
        return Err(KundaliError::NonFiniteLongitude {
            body: Body::Moon,
            value: moon_longitude,
        });
    }
    let periods: Vec<DashaPeriod> = DashaTimeline::new(birth, moon_longitude)
        .take(count)
        .collect();
    if periods.len() < count {
        return Err(KundaliError::InvalidEpoch { julian_day: epoch_jd });
    }
    Ok(periods)
}

/// Nominal length of one graha's mahadasha, in years.
pub fn nominal_years(planet: Graha) -> f64 {
    VIMSHOTTARI_SEQUENCE
        .iter()
        .find(|(p, _)| *p == planet)
        .map(|(_, years)| *years)
        .unwrap_or(0.0)
}
