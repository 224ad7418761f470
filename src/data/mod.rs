pub mod shape;
pub mod stats_record;

pub use stats_record::{StatsRecord, build_record};
