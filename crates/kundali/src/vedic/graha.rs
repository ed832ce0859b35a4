//! The bodies tracked in a chart.
//!
//! `Graha` covers the nine bodies that rule dasha periods; `Body` adds the
//! ascendant (Lagna), which is classified like a graha but never rules a
//! period.

use crate::error::KundaliError;
use crate::vedic::types::NameScript;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Graha {
    #[serde(alias = "sun")]
    Sun,
    #[serde(alias = "moon")]
    Moon,
    #[serde(alias = "mars")]
    Mars,
    #[serde(alias = "mercury")]
    Mercury,
    #[serde(alias = "jupiter")]
    Jupiter,
    #[serde(alias = "venus")]
    Venus,
    #[serde(alias = "saturn")]
    Saturn,
    #[serde(alias = "rahu")]
    Rahu,
    #[serde(alias = "ketu")]
    Ketu,
}

impl Graha {
    pub const ALL: [Graha; 9] = [
        Graha::Sun,
        Graha::Moon,
        Graha::Mars,
        Graha::Mercury,
        Graha::Jupiter,
        Graha::Venus,
        Graha::Saturn,
        Graha::Rahu,
        Graha::Ketu,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Graha::Sun => "Sun",
            Graha::Moon => "Moon",
            Graha::Mars => "Mars",
            Graha::Mercury => "Mercury",
            Graha::Jupiter => "Jupiter",
            Graha::Venus => "Venus",
            Graha::Saturn => "Saturn",
            Graha::Rahu => "Rahu",
            Graha::Ketu => "Ketu",
        }
    }

    pub fn devanagari(self) -> &'static str {
        match self {
            Graha::Sun => "सूर्य",
            Graha::Moon => "चन्द्र",
            Graha::Mars => "मंगल",
            Graha::Mercury => "बुध",
            Graha::Jupiter => "गुरु",
            Graha::Venus => "शुक्र",
            Graha::Saturn => "शनि",
            Graha::Rahu => "राहु",
            Graha::Ketu => "केतु",
        }
    }

    pub fn display_name(self, script: NameScript) -> &'static str {
        match script {
            NameScript::Latin => self.name(),
            NameScript::Devanagari => self.devanagari(),
        }
    }
}

impl fmt::Display for Graha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Graha {
    type Err = KundaliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Graha::ALL
            .iter()
            .copied()
            .find(|g| g.name().eq_ignore_ascii_case(wanted) || g.devanagari() == wanted)
            .ok_or_else(|| KundaliError::UnknownBody(s.to_string()))
    }
}

/// A classified point of the chart: one of the nine grahas or the ascendant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
    Rahu,
    Ketu,
    Lagna,
}

impl Body {
    /// The graha behind this body, or `None` for the ascendant.
    pub fn graha(self) -> Option<Graha> {
        match self {
            Body::Sun => Some(Graha::Sun),
            Body::Moon => Some(Graha::Moon),
            Body::Mars => Some(Graha::Mars),
            Body::Mercury => Some(Graha::Mercury),
            Body::Jupiter => Some(Graha::Jupiter),
            Body::Venus => Some(Graha::Venus),
            Body::Saturn => Some(Graha::Saturn),
            Body::Rahu => Some(Graha::Rahu),
            Body::Ketu => Some(Graha::Ketu),
            Body::Lagna => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self.graha() {
            Some(graha) => graha.name(),
            None => "Lagna",
        }
    }
}

impl From<Graha> for Body {
    fn from(graha: Graha) -> Self {
        match graha {
            Graha::Sun => Body::Sun,
            Graha::Moon => Body::Moon,
            Graha::Mars => Body::Mars,
            Graha::Mercury => Body::Mercury,
            Graha::Jupiter => Body::Jupiter,
            Graha::Venus => Body::Venus,
            Graha::Saturn => Body::Saturn,
            Graha::Rahu => Body::Rahu,
            Graha::Ketu => Body::Ketu,
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graha_round_trips_through_body() {
        for graha in Graha::ALL {
            assert_eq!(Body::from(graha).graha(), Some(graha));
        }
        assert_eq!(Body::Lagna.graha(), None);
    }

    #[test]
    fn test_graha_from_str() {
        assert_eq!("moon".parse::<Graha>().unwrap(), Graha::Moon);
        assert_eq!(" Ketu ".parse::<Graha>().unwrap(), Graha::Ketu);
        assert_eq!("शनि".parse::<Graha>().unwrap(), Graha::Saturn);
        assert!("pluto".parse::<Graha>().is_err());
    }
}
