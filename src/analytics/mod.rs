pub mod season;
pub mod types;

pub use season::{active_columns, aggregate_season};
pub use types::{SeasonReport, SeasonTotal};
