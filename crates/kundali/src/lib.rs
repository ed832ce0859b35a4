//! Vedic birth chart (kundali) derivation.
//!
//! Raw ecliptic longitudes from an ephemeris are classified into rashi,
//! nakshatra/pada and navamsa placements, and the Moon's position seeds a
//! Vimshottari dasha timeline.

pub mod chart;
pub mod ephemeris;
pub mod error;
pub mod vedic;

pub use chart::{assemble, Chart, ChartAssembler, ChartReport, Placement, ReportOptions};
pub use ephemeris::{BirthMoment, EphemerisProvider, EphemerisSnapshot, FixedEphemeris, GeoLocation};
pub use error::KundaliError;
pub use vedic::{Body, DashaPeriod, Graha, MansionPlacement, Nakshatra, NameScript, Rashi};
