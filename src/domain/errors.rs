use chrono::NaiveDate;
use thiserror::Error;

/// Business rule violations raised while constructing domain aggregates
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("{field} cannot be empty")]
    EmptyField { field: &'static str },

    #[error("Contract start date {start} must be before end date {end}")]
    InvalidContractPeriod { start: NaiveDate, end: NaiveDate },

    #[error("Unknown best skill type code: {0}")]
    UnknownBestSkillType(i32),

    #[error("Unknown position type code: {0}")]
    UnknownPositionType(i32),

    #[error("Trophies must be positive, got {0}")]
    NonPositiveTrophies(i32),
}
