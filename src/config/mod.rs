pub mod schema;
pub mod settings;

pub use schema::{SheetSchema, TotalsMode};
pub use settings::AppConfig;
