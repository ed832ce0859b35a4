//! Rashi (sign) classification.
//!
//! The twelve signs each span exactly 30°, starting at 0° Mesha. A degree on
//! a multiple of 30 belongs to the sign that starts there.

use crate::vedic::angle::segment;
use crate::vedic::types::NameScript;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const RASHI_SPAN: f64 = 30.0;
pub const RASHI_COUNT: usize = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrishchika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

// (latin, devanagari)
const RASHI_NAMES: [(&str, &str); RASHI_COUNT] = [
    ("Mesha", "मेष"),
    ("Vrishabha", "वृष"),
    ("Mithuna", "मिथुन"),
    ("Karka", "कर्कट"),
    ("Simha", "सिंह"),
    ("Kanya", "कन्या"),
    ("Tula", "तुला"),
    ("Vrishchika", "वृश्चिक"),
    ("Dhanu", "धनु"),
    ("Makara", "मकर"),
    ("Kumbha", "कुम्भ"),
    ("Meena", "मीन"),
];

impl Rashi {
    pub const ALL: [Rashi; RASHI_COUNT] = [
        Rashi::Mesha,
        Rashi::Vrishabha,
        Rashi::Mithuna,
        Rashi::Karka,
        Rashi::Simha,
        Rashi::Kanya,
        Rashi::Tula,
        Rashi::Vrishchika,
        Rashi::Dhanu,
        Rashi::Makara,
        Rashi::Kumbha,
        Rashi::Meena,
    ];

    /// Sign at `index`, wrapping past Meena back to Mesha.
    pub fn from_index(index: usize) -> Rashi {
        Self::ALL[index % RASHI_COUNT]
    }

    /// 0-based position (Mesha = 0).
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        RASHI_NAMES[self.index()].0
    }

    pub fn devanagari(self) -> &'static str {
        RASHI_NAMES[self.index()].1
    }

    pub fn display_name(self, script: NameScript) -> &'static str {
        match script {
            NameScript::Latin => self.name(),
            NameScript::Devanagari => self.devanagari(),
        }
    }

    /// Starting longitude of the sign.
    pub fn start_degree(self) -> f64 {
        self.index() as f64 * RASHI_SPAN
    }
}

impl fmt::Display for Rashi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sign occupied by `longitude`; raw longitudes are normalized first.
pub fn classify_rashi(longitude: f64) -> Rashi {
    let (index, _) = segment(longitude, RASHI_COUNT);
    Rashi::from_index(index)
}

/// Degrees travelled inside the occupied sign, in [0, 30).
pub fn degree_in_rashi(longitude: f64) -> f64 {
    let (_, fraction) = segment(longitude, RASHI_COUNT);
    fraction * RASHI_SPAN
}

/// Signs counted forward from `from` to `to` (0 when equal).
pub fn signs_between(from: Rashi, to: Rashi) -> usize {
    (to.index() + RASHI_COUNT - from.index()) % RASHI_COUNT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_rashi_boundaries() {
        assert_eq!(classify_rashi(0.0), Rashi::Mesha);
        assert_eq!(classify_rashi(29.999), Rashi::Mesha);
        assert_eq!(classify_rashi(30.0), Rashi::Vrishabha);
        assert_eq!(classify_rashi(35.0), Rashi::Vrishabha);
        assert_eq!(classify_rashi(359.99), Rashi::Meena);
    }

    #[test]
    fn test_rashi_is_periodic() {
        for step in 0..720 {
            let degree = step as f64 * 0.5;
            assert_eq!(classify_rashi(degree), classify_rashi(degree + 360.0));
            assert_eq!(classify_rashi(degree), classify_rashi(degree - 720.0));
        }
    }

    #[test]
    fn test_names() {
        assert_eq!(Rashi::Karka.name(), "Karka");
        assert_eq!(Rashi::Karka.devanagari(), "कर्कट");
        assert_eq!(Rashi::from_index(13), Rashi::Vrishabha);
        assert_eq!(Rashi::Simha.display_name(NameScript::Devanagari), "सिंह");
    }

    #[test]
    fn test_signs_between_wraps() {
        assert_eq!(signs_between(Rashi::Mesha, Rashi::Mesha), 0);
        assert_eq!(signs_between(Rashi::Meena, Rashi::Vrishabha), 2);
    }

    #[test]
    fn test_degree_in_rashi() {
        assert!((degree_in_rashi(35.0) - 5.0).abs() < 1e-9);
        assert_eq!(degree_in_rashi(60.0), 0.0);
    }
}
