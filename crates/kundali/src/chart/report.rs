//! Caller-facing rendering of a chart.
//!
//! The report carries names instead of typed values and rounds degrees for
//! display. Sign and navamsa are classified from the rounded degree, so a
//! body at 29.999° reports `30.0` in Vrishabha and every reported pair stays
//! consistent. The typed [`Chart`] keeps the unrounded classification.

use crate::chart::data::{Chart, Placement};
use crate::vedic::angle::normalize_degrees;
use crate::vedic::graha::Graha;
use crate::vedic::rashi::classify_rashi;
use crate::vedic::types::NameScript;
use crate::vedic::vargas::classify_navamsa;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Decimal places reported degrees are rounded to by default.
pub const DEFAULT_DEGREE_PRECISION: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportOptions {
    pub script: NameScript,
    /// Decimal places for reported degrees; `None` keeps full precision.
    pub degree_precision: Option<u32>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            script: NameScript::Latin,
            degree_precision: Some(DEFAULT_DEGREE_PRECISION),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementReport {
    pub degree: f64,
    pub rashi: String,
    pub navamsa: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashaReport {
    pub name: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartReport {
    /// Keyed by the Latin graha name whatever the script.
    pub grahas: BTreeMap<Graha, PlacementReport>,
    pub lagna: PlacementReport,
    pub moon_nakshatra: String,
    pub moon_pada: u8,
    pub nakshatra_deity: String,
    pub nakshatra_lord: String,
    pub dasha: Vec<DashaReport>,
}

impl ChartReport {
    pub fn from_chart(chart: &Chart, options: &ReportOptions) -> Self {
        let script = options.script;
        let grahas = chart
            .grahas
            .iter()
            .map(|(graha, placement)| (*graha, placement_report(placement, options)))
            .collect();
        let dasha = chart
            .dasha
            .iter()
            .map(|period| DashaReport {
                name: period.planet.display_name(script).to_string(),
                start: period.start,
                end: period.end,
            })
            .collect();

        Self {
            grahas,
            lagna: placement_report(&chart.lagna, options),
            moon_nakshatra: chart.moon_mansion.nakshatra.display_name(script).to_string(),
            moon_pada: chart.moon_mansion.pada,
            nakshatra_deity: chart.moon_mansion.deity.clone(),
            nakshatra_lord: chart.moon_mansion.lord.display_name(script).to_string(),
            dasha,
        }
    }
}

impl Chart {
    pub fn report(&self, options: &ReportOptions) -> ChartReport {
        ChartReport::from_chart(self, options)
    }
}

fn placement_report(placement: &Placement, options: &ReportOptions) -> PlacementReport {
    let degree = round_degree(placement.degree, options.degree_precision);
    PlacementReport {
        degree,
        rashi: classify_rashi(degree).display_name(options.script).to_string(),
        navamsa: classify_navamsa(degree).display_name(options.script).to_string(),
    }
}

/// Round to `precision` decimals, folding a rounded 360 back to 0.
pub fn round_degree(degree: f64, precision: Option<u32>) -> f64 {
    match precision {
        Some(places) => {
            let factor = 10f64.powi(places.min(12) as i32);
            normalize_degrees((degree * factor).round() / factor)
        }
        None => degree,
    }
}
