use chrono::NaiveDate;

use super::value_objects::{BestSkillType, PositionType};
use crate::domain::errors::DomainError;

/// Footballer entity
///
/// A footballer is either created fresh under a coach during import, or
/// already exists in storage and is referenced by id from a team.
///
/// # Invariants
/// - Name cannot be empty
/// - Contract start date is strictly before contract end date
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use footballers_api::domain::footballer::{BestSkillType, Footballer, PositionType};
///
/// let footballer = Footballer::new(
///     "Kaka".to_string(),
///     NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     BestSkillType::Dribble,
///     PositionType::Midfielder,
/// )
/// .expect("valid footballer");
///
/// assert_eq!(footballer.name(), "Kaka");
/// assert!(footballer.id().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footballer {
    id: Option<i32>,
    name: String,
    contract_start_date: NaiveDate,
    contract_end_date: NaiveDate,
    best_skill_type: BestSkillType,
    position_type: PositionType,
}

impl Footballer {
    /// Creates a footballer that has not been persisted yet
    ///
    /// # Returns
    /// * `Err(DomainError::EmptyField)` - If the name is blank
    /// * `Err(DomainError::InvalidContractPeriod)` - If start is not before end
    pub fn new(
        name: String,
        contract_start_date: NaiveDate,
        contract_end_date: NaiveDate,
        best_skill_type: BestSkillType,
        position_type: PositionType,
    ) -> Result<Self, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::EmptyField { field: "Name" });
        }

        if contract_start_date >= contract_end_date {
            return Err(DomainError::InvalidContractPeriod {
                start: contract_start_date,
                end: contract_end_date,
            });
        }

        Ok(Self {
            id: None,
            name,
            contract_start_date,
            contract_end_date,
            best_skill_type,
            position_type,
        })
    }

    // ===== Getters =====

    /// Returns the storage id, if the footballer has been persisted
    pub fn id(&self) -> Option<i32> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contract_start_date(&self) -> NaiveDate {
        self.contract_start_date
    }

    pub fn contract_end_date(&self) -> NaiveDate {
        self.contract_end_date
    }

    pub fn best_skill_type(&self) -> BestSkillType {
        self.best_skill_type
    }

    pub fn position_type(&self) -> PositionType {
        self.position_type
    }

    /// Reconstructs a Footballer from persistence layer data
    ///
    /// Skips invariant checks; stored rows were validated on the way in.
    pub fn from_persistence(
        id: i32,
        name: String,
        contract_start_date: NaiveDate,
        contract_end_date: NaiveDate,
        best_skill_type: BestSkillType,
        position_type: PositionType,
    ) -> Self {
        Self {
            id: Some(id),
            name,
            contract_start_date,
            contract_end_date,
            best_skill_type,
            position_type,
        }
    }
}
