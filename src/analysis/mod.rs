//! Analysis pipeline: the fallback orchestrator plus the file boundaries
//! around it (ingestion in, export out).

pub mod export;
pub mod ingest;
pub mod orchestrator;

pub use export::{export_file_name, export_result, to_pretty_json};
pub use ingest::{is_supported, read_source_file};
pub use orchestrator::{AnalysisReport, Analyzer, DEGRADED_MESSAGE, ResultOrigin};
