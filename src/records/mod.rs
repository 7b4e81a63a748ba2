pub mod detection;
pub mod registry;

pub use detection::{format_improvement, is_new_personal_record};
pub use registry::{PR_EVENT_LABELS, PrEvent, PrRecord, PrRegistry};
