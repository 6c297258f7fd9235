use crate::domain::errors::DomainError;
use crate::domain::footballer::Footballer;

/// Coach aggregate root
///
/// A coach exclusively owns its footballers: every footballer imported under
/// a coach is created fresh and belongs to that coach only.
///
/// # Invariants
/// - Name and nationality cannot be blank
/// - Footballers keep insertion order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coach {
    id: Option<i32>,
    name: String,
    nationality: String,
    footballers: Vec<Footballer>,
}

impl Coach {
    /// Creates a coach with no footballers
    pub fn new(name: String, nationality: String) -> Result<Self, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::EmptyField { field: "Name" });
        }

        if nationality.trim().is_empty() {
            return Err(DomainError::EmptyField { field: "Nationality" });
        }

        Ok(Self {
            id: None,
            name,
            nationality,
            footballers: Vec::new(),
        })
    }

    /// Adds a footballer owned by this coach
    pub fn add_footballer(&mut self, footballer: Footballer) {
        self.footballers.push(footballer);
    }

    // ===== Getters =====

    pub fn id(&self) -> Option<i32> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn nationality(&self) -> &str {
        &self.nationality
    }

    pub fn footballers(&self) -> &[Footballer] {
        &self.footballers
    }

    pub fn footballers_count(&self) -> usize {
        self.footballers.len()
    }

    /// Reconstructs a Coach from persistence layer data
    pub fn from_persistence(
        id: i32,
        name: String,
        nationality: String,
        footballers: Vec<Footballer>,
    ) -> Self {
        Self {
            id: Some(id),
            name,
            nationality,
            footballers,
        }
    }
}
