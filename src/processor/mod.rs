// Data processor module
//
// Import pipelines (validate, convert, resolve, deduplicate, report, commit)
// and export pipelines (filter, sort, reshape, render).

pub mod conversion;
pub mod dto;
pub mod errors;
pub mod export;
pub mod import;
pub mod report;
pub mod validation;

// Re-export the pipeline entry points
pub use errors::{ProcessorError, ProcessorResult};
pub use export::{export_coaches_with_their_footballers, export_teams_with_most_footballers};
pub use import::{import_coaches, import_teams};
pub use report::{ImportReport, ERROR_MESSAGE};
