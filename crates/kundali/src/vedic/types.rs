//! Shared Vedic value types.

use serde::{Deserialize, Serialize};

/// Script used when rendering sign, mansion and graha names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameScript {
    #[default]
    Latin,
    Devanagari,
}
