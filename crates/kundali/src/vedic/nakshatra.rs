//! Nakshatra utilities for Vedic astrology.
//!
//! Nakshatras are 27 lunar mansions, each spanning 13°20' (360/27 degrees).
//! Each nakshatra is divided into 4 padas (quarters) of 3°20'.

use crate::error::KundaliError;
use crate::vedic::angle::{fraction_part, segment};
use crate::vedic::graha::Graha;
use crate::vedic::types::NameScript;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

pub const NAKSHATRA_COUNT: usize = 27;
pub const PADAS_PER_NAKSHATRA: usize = 4;
pub const NAKSHATRA_SEGMENT_SIZE: f64 = 360.0 / 27.0;
pub const PADA_SIZE: f64 = NAKSHATRA_SEGMENT_SIZE / 4.0;

/// Marker reported for deity and lord when a mansion has no table entry.
pub const UNKNOWN_MARKER: &str = "unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NakshatraRecord {
    pub id: &'static str,
    pub name: &'static str,
    pub devanagari: &'static str,
    pub deity: &'static str,
    pub lord: Graha,
}

const fn record(
    id: &'static str,
    name: &'static str,
    devanagari: &'static str,
    deity: &'static str,
    lord: Graha,
) -> NakshatraRecord {
    NakshatraRecord { id, name, devanagari, deity, lord }
}

pub const NAKSHATRA_TABLE: [NakshatraRecord; NAKSHATRA_COUNT] = [
    record("ashwini", "Ashwini", "अश्विनी", "Ashwini Kumaras", Graha::Ketu),
    record("bharani", "Bharani", "भरणी", "Yama", Graha::Venus),
    record("krittika", "Krittika", "कृत्तिका", "Agni", Graha::Sun),
    record("rohini", "Rohini", "रोहिणी", "Brahma", Graha::Moon),
    record("mrigashira", "Mrigashira", "मृगशिरा", "Soma", Graha::Mars),
    record("ardra", "Ardra", "आर्द्रा", "Rudra", Graha::Rahu),
    record("punarvasu", "Punarvasu", "पुनर्वसु", "Aditi", Graha::Jupiter),
    record("pushya", "Pushya", "पुष्य", "Brihaspati", Graha::Saturn),
    record("ashlesha", "Ashlesha", "आश्लेषा", "Nagas", Graha::Mercury),
    record("magha", "Magha", "मघा", "Pitris", Graha::Ketu),
    record("purva_phalguni", "Purva Phalguni", "पूर्वाफाल्गुनी", "Bhaga", Graha::Venus),
    record("uttara_phalguni", "Uttara Phalguni", "उत्तराफाल्गुनी", "Aryaman", Graha::Sun),
    record("hasta", "Hasta", "हस्त", "Savitar", Graha::Moon),
    record("chitra", "Chitra", "चित्रा", "Vishvakarma", Graha::Mars),
    record("swati", "Swati", "स्वाति", "Vayu", Graha::Rahu),
    record("vishakha", "Vishakha", "विशाखा", "Indragni", Graha::Jupiter),
    record("anuradha", "Anuradha", "अनुराधा", "Mitra", Graha::Saturn),
    record("jyeshtha", "Jyeshtha", "ज्येष्ठा", "Indra", Graha::Mercury),
    record("mula", "Mula", "मूल", "Nirriti", Graha::Ketu),
    record("purva_ashadha", "Purva Ashadha", "पूर्वाषाढा", "Apas", Graha::Venus),
    record("uttara_ashadha", "Uttara Ashadha", "उत्तराषाढा", "Vishvedevas", Graha::Sun),
    record("shravana", "Shravana", "श्रवण", "Vishnu", Graha::Moon),
    record("dhanishta", "Dhanishta", "धनिष्ठा", "Vasus", Graha::Mars),
    record("shatabhisha", "Shatabhisha", "शतभिषा", "Varuna", Graha::Rahu),
    record("purva_bhadrapada", "Purva Bhadrapada", "पूर्वाभाद्रपदा", "Aja Ekapada", Graha::Jupiter),
    record(
        "uttara_bhadrapada",
        "Uttara Bhadrapada",
        "उत्तराभाद्रपदा",
        "Ahir Budhnya",
        Graha::Saturn,
    ),
    record("revati", "Revati", "रेवती", "Pushan", Graha::Mercury),
];

lazy_static::lazy_static! {
    // Every spelling a caller may use for a mansion: slug, Latin name, Devanagari name.
    static ref NAKSHATRA_INDEX_BY_NAME: HashMap<String, usize> = {
        let mut map = HashMap::new();
        for (idx, entry) in NAKSHATRA_TABLE.iter().enumerate() {
            map.insert(entry.id.to_string(), idx);
            map.insert(entry.name.to_lowercase(), idx);
            map.insert(entry.devanagari.to_string(), idx);
        }
        map
    };
}

/// One of the 27 lunar mansions, identified by its ordinal (Ashwini = 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Nakshatra(u8);

impl Nakshatra {
    /// Mansion at `index`, wrapping past Revati back to Ashwini.
    pub fn from_index(index: usize) -> Nakshatra {
        Nakshatra((index % NAKSHATRA_COUNT) as u8)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn record(self) -> &'static NakshatraRecord {
        &NAKSHATRA_TABLE[self.index()]
    }

    pub fn id(self) -> &'static str {
        self.record().id
    }

    pub fn name(self) -> &'static str {
        self.record().name
    }

    pub fn display_name(self, script: NameScript) -> &'static str {
        match script {
            NameScript::Latin => self.record().name,
            NameScript::Devanagari => self.record().devanagari,
        }
    }

    pub fn deity(self) -> &'static str {
        self.record().deity
    }

    /// Vimshottari lord of the mansion.
    pub fn lord(self) -> Graha {
        self.record().lord
    }

    pub fn start_degree(self) -> f64 {
        self.index() as f64 * NAKSHATRA_SEGMENT_SIZE
    }

    pub fn end_degree(self) -> f64 {
        self.start_degree() + NAKSHATRA_SEGMENT_SIZE
    }
}

impl fmt::Display for Nakshatra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Nakshatra {
    type Err = KundaliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        NAKSHATRA_INDEX_BY_NAME
            .get(&key)
            .or_else(|| NAKSHATRA_INDEX_BY_NAME.get(&key.replace(' ', "_")))
            .map(|&idx| Nakshatra::from_index(idx))
            .ok_or_else(|| KundaliError::UnknownNakshatra(s.to_string()))
    }
}

impl TryFrom<String> for Nakshatra {
    type Error = KundaliError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Nakshatra> for String {
    fn from(nakshatra: Nakshatra) -> Self {
        nakshatra.name().to_string()
    }
}

/// Full position of a longitude inside the mansion grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraPosition {
    pub nakshatra: Nakshatra,
    /// Degrees travelled inside the mansion.
    pub offset: f64,
    /// Fraction of the mansion already traversed, [0, 1).
    pub progress: f64,
    /// Quarter of the mansion, 1..=4.
    pub pada: u8,
    /// Fraction of the pada already traversed, [0, 1).
    pub pada_fraction: f64,
}

/// Return the mansion, pada and progress for the given longitude.
pub fn get_nakshatra_for_longitude(longitude: f64) -> NakshatraPosition {
    let (index, progress) = segment(longitude, NAKSHATRA_COUNT);
    let pada_index = fraction_part(progress, PADAS_PER_NAKSHATRA);
    let pada_fraction = (progress * PADAS_PER_NAKSHATRA as f64 - pada_index as f64).clamp(0.0, 1.0);

    NakshatraPosition {
        nakshatra: Nakshatra::from_index(index),
        offset: progress * NAKSHATRA_SEGMENT_SIZE,
        progress,
        pada: pada_index as u8 + 1,
        pada_fraction,
    }
}

/// Mansion placement of a body: mansion, pada, and the mansion's deity and lord.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MansionPlacement {
    pub nakshatra: Nakshatra,
    pub pada: u8,
    pub deity: String,
    pub lord: Graha,
}

/// Classify a longitude into its mansion placement.
pub fn classify_mansion(longitude: f64) -> MansionPlacement {
    let position = get_nakshatra_for_longitude(longitude);
    let record = position.nakshatra.record();
    MansionPlacement {
        nakshatra: position.nakshatra,
        pada: position.pada,
        deity: record.deity.to_string(),
        lord: record.lord,
    }
}

/// Deity and lord for a mansion looked up by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MansionData {
    Known { deity: &'static str, lord: Graha },
    Unknown,
}

impl MansionData {
    pub fn deity(&self) -> &'static str {
        match *self {
            MansionData::Known { deity, .. } => deity,
            MansionData::Unknown => UNKNOWN_MARKER,
        }
    }

    pub fn lord_name(&self, script: NameScript) -> &'static str {
        match *self {
            MansionData::Known { lord, .. } => lord.display_name(script),
            MansionData::Unknown => UNKNOWN_MARKER,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, MansionData::Known { .. })
    }
}

/// Look up deity and lord by mansion name. Names missing from the table resolve
/// to [`MansionData::Unknown`] instead of failing.
pub fn lookup_mansion_data(name: &str) -> MansionData {
    match name.parse::<Nakshatra>() {
        Ok(nakshatra) => MansionData::Known {
            deity: nakshatra.deity(),
            lord: nakshatra.lord(),
        },
        Err(_) => {
            log::warn!("No deity/lord entry for nakshatra '{}'", name);
            MansionData::Unknown
        }
    }
}
