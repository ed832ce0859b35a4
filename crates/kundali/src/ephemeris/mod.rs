pub mod julian;
pub mod provider;
pub mod types;

pub use julian::{julian_day_to_utc, utc_to_julian_day};
pub use provider::{EphemerisProvider, FixedEphemeris};
pub use types::{BirthMoment, EphemerisSnapshot, GeoLocation};
