//! Chart data structures.

use crate::vedic::dashas::DashaPeriod;
use crate::vedic::graha::{Body, Graha};
use crate::vedic::nakshatra::{MansionPlacement, Nakshatra};
use crate::vedic::rashi::Rashi;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Classification of one body at the birth instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub body: Body,
    /// Normalized longitude, [0, 360)
    pub degree: f64,
    pub rashi: Rashi,
    pub navamsa: Rashi,
    #[serde(rename = "degreeInRashi")]
    pub degree_in_rashi: f64,
    pub nakshatra: Nakshatra,
    pub pada: u8,
}

/// A fully derived Vedic chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    #[serde(rename = "julianDay")]
    pub julian_day: f64,
    pub birth: DateTime<Utc>,
    pub grahas: BTreeMap<Graha, Placement>,
    pub lagna: Placement,
    #[serde(rename = "moonMansion")]
    pub moon_mansion: MansionPlacement,
    pub dasha: Vec<DashaPeriod>,
}

impl Chart {
    pub fn placement(&self, body: Body) -> Option<&Placement> {
        match body.graha() {
            Some(graha) => self.grahas.get(&graha),
            None => Some(&self.lagna),
        }
    }

    /// Period running at `instant`, if it falls inside the computed timeline.
    pub fn dasha_at(&self, instant: DateTime<Utc>) -> Option<&DashaPeriod> {
        self.dasha
            .iter()
            .find(|period| period.start <= instant && instant < period.end)
    }
}
