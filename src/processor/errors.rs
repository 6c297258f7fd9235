use thiserror::Error;

use crate::domain::errors::DomainError;

/// Errors that abort a whole import or export call
#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error("Malformed XML document: {0}")]
    MalformedXml(#[from] quick_xml::DeError),

    #[error("Malformed JSON document: {0}")]
    MalformedJson(#[source] serde_json::Error),

    #[error("Failed to render XML: {0}")]
    RenderXml(#[from] quick_xml::SeError),

    #[error("Failed to write XML: {0}")]
    WriteXml(String),

    #[error("Failed to render JSON: {0}")]
    RenderJson(#[source] serde_json::Error),

    #[error("Repository error: {0}")]
    Repository(String),
}

impl ProcessorError {
    /// True when the input document itself could not be read
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, Self::MalformedXml(_) | Self::MalformedJson(_))
    }
}

pub type ProcessorResult<T> = Result<T, ProcessorError>;

/// Reasons a single field value could not be converted
///
/// These never leave the pipeline: they turn into one generic report line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("{0:?} does not match the dd/MM/yyyy date format")]
    InvalidDate(String),

    #[error("{0:?} is not a whole number")]
    InvalidNumber(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}
