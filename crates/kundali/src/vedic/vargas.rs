//! Divisional chart (varga) helpers for Vedic astrology.
//!
//! A varga divides each sign into equal parts and maps every part onto a
//! sign. Here the sign pointer starts at the occupying sign and advances one
//! sign per part, so the first part of any sign maps back onto that sign.

use crate::vedic::angle::{fraction_part, segment};
use crate::vedic::rashi::{Rashi, RASHI_COUNT, RASHI_SPAN};

pub const NAVAMSA_DIVISION: usize = 9;
pub const NAVAMSA_SPAN: f64 = RASHI_SPAN / NAVAMSA_DIVISION as f64;

/// Occupying sign and 0-based part index for a `division`-way split of the sign.
pub fn varga_part(longitude: f64, division: usize) -> (Rashi, usize) {
    let division = division.max(1);
    let (sign_index, fraction) = segment(longitude, RASHI_COUNT);
    (Rashi::from_index(sign_index), fraction_part(fraction, division))
}

/// Sign reached by advancing `part` steps from the occupying sign.
pub fn varga_sign(longitude: f64, division: usize) -> Rashi {
    let (occupied, part) = varga_part(longitude, division);
    Rashi::from_index(occupied.index() + part)
}

/// Navamsa (D9) sign of a longitude.
pub fn classify_navamsa(longitude: f64) -> Rashi {
    varga_sign(longitude, NAVAMSA_DIVISION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vedic::rashi::{classify_rashi, signs_between};

    #[test]
    fn test_first_part_keeps_the_sign() {
        assert_eq!(classify_navamsa(0.0), Rashi::Mesha);
        assert_eq!(classify_navamsa(30.0), Rashi::Vrishabha);
        assert_eq!(classify_navamsa(330.5), Rashi::Meena);
    }

    #[test]
    fn test_last_part_advances_eight_signs() {
        assert_eq!(varga_part(29.99, NAVAMSA_DIVISION), (Rashi::Mesha, 8));
        assert_eq!(classify_navamsa(29.99), Rashi::Dhanu);
        // Meena + 8 wraps to Vrishchika
        assert_eq!(classify_navamsa(359.99), Rashi::Vrishchika);
    }

    #[test]
    fn test_part_boundaries() {
        assert_eq!(varga_part(NAVAMSA_SPAN, NAVAMSA_DIVISION).1, 1);
        assert_eq!(varga_part(NAVAMSA_SPAN - 1e-9, NAVAMSA_DIVISION).1, 0);
        assert_eq!(classify_navamsa(35.0), Rashi::Mithuna);
    }

    #[test]
    fn test_advance_is_bounded_by_division() {
        for step in 0..3600 {
            let degree = step as f64 * 0.1;
            let advance = signs_between(classify_rashi(degree), classify_navamsa(degree));
            assert!(advance < NAVAMSA_DIVISION);
        }
    }

    #[test]
    fn test_generic_division() {
        // D1 is the rashi itself
        assert_eq!(varga_sign(95.0, 1), Rashi::Karka);
        // zero divisions is treated as D1
        assert_eq!(varga_sign(95.0, 0), Rashi::Karka);
        assert_eq!(varga_sign(15.0, 2), Rashi::Vrishabha);
    }
}
