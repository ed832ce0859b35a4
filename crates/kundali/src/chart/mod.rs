pub mod assembler;
pub mod data;
pub mod report;

pub use assembler::{assemble, ChartAssembler};
pub use data::{Chart, Placement};
pub use report::{ChartReport, DashaReport, PlacementReport, ReportOptions};
