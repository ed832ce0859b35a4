pub mod angle;
pub mod dashas;
pub mod graha;
pub mod nakshatra;
pub mod rashi;
pub mod types;
pub mod vargas;

pub use angle::normalize_degrees;
pub use dashas::{
    compute_dasha, compute_vimshottari_dasha, DashaPeriod, DashaTimeline, VIMSHOTTARI_SEQUENCE,
};
pub use graha::{Body, Graha};
pub use nakshatra::{
    classify_mansion, get_nakshatra_for_longitude, lookup_mansion_data, MansionData,
    MansionPlacement, Nakshatra,
};
pub use rashi::{classify_rashi, Rashi};
pub use types::NameScript;
pub use vargas::classify_navamsa;
