pub mod ingestion;
pub mod reporting;

pub use ingestion::IngestionService;
pub use reporting::ReportingService;
