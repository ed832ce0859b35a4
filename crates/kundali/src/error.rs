use crate::vedic::graha::Body;
use thiserror::Error;

/// Errors that can occur while assembling a chart
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KundaliError {
    #[error("Incomplete input: no longitude supplied for {body}")]
    IncompleteInput { body: Body },
    #[error("Longitude for {body} is not a finite number: {value}")]
    NonFiniteLongitude { body: Body, value: f64 },
    #[error("Julian day {julian_day} cannot be represented as a UTC timestamp")]
    InvalidEpoch { julian_day: f64 },
    #[error("Unknown body: {0}")]
    UnknownBody(String),
    #[error("Unknown nakshatra: {0}")]
    UnknownNakshatra(String),
    #[error("Invalid ephemeris snapshot: {0}")]
    InvalidSnapshot(String),
    #[error("Ephemeris lookup failed: {message}")]
    Ephemeris { message: String },
}
