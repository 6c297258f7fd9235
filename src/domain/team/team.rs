use std::collections::HashSet;

use super::team_footballer::TeamFootballer;
use crate::domain::errors::DomainError;

/// Team aggregate root
///
/// Represents a club that references already existing footballers by id.
/// Enforces all business rules related to team membership.
///
/// # Invariants
/// - Name and nationality cannot be blank
/// - Trophies must be positive
/// - No two links reference the same footballer id
///
/// # Example
/// ```
/// use footballers_api::domain::team::Team;
///
/// let mut team = Team::new("Real Madrid".to_string(), "Spain".to_string(), 14)
///     .expect("valid team");
///
/// assert!(team.add_footballer(3));
/// assert!(!team.add_footballer(3));
/// assert_eq!(team.footballers().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    id: Option<i32>,
    name: String,
    nationality: String,
    trophies: i32,
    footballers: Vec<TeamFootballer>,
}

impl Team {
    /// Creates a new Team aggregate
    ///
    /// # Arguments
    /// * `name` - The team's name (cannot be empty)
    /// * `nationality` - Country the team plays in (cannot be blank)
    /// * `trophies` - Trophy count (must be positive)
    ///
    /// # Returns
    /// * `Ok(Team)` - New team without footballers
    /// * `Err(DomainError)` - If any invariant is violated
    pub fn new(name: String, nationality: String, trophies: i32) -> Result<Self, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::EmptyField { field: "Name" });
        }

        if nationality.trim().is_empty() {
            return Err(DomainError::EmptyField { field: "Nationality" });
        }

        if trophies <= 0 {
            return Err(DomainError::NonPositiveTrophies(trophies));
        }

        Ok(Self {
            id: None,
            name,
            nationality,
            trophies,
            footballers: Vec::new(),
        })
    }

    /// Links an existing footballer to this team
    ///
    /// # Returns
    /// * `true` - The link was added
    /// * `false` - The team already links this footballer; nothing changed
    pub fn add_footballer(&mut self, footballer_id: i32) -> bool {
        if self.has_footballer(footballer_id) {
            return false;
        }

        self.footballers.push(TeamFootballer::new(footballer_id));
        true
    }

    /// Returns true if the team already links the given footballer
    pub fn has_footballer(&self, footballer_id: i32) -> bool {
        self.footballers
            .iter()
            .any(|link| link.footballer_id() == footballer_id)
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

    pub fn trophies(&self) -> i32 {
        self.trophies
    }

    pub fn footballers(&self) -> &[TeamFootballer] {
        &self.footballers
    }

    /// Reconstructs a Team from persistence layer data
    ///
    /// # Note
    /// Only to be used by repository implementations for data reconstruction.
    pub fn from_persistence(
        id: i32,
        name: String,
        nationality: String,
        trophies: i32,
        footballers: Vec<TeamFootballer>,
    ) -> Self {
        Self {
            id: Some(id),
            name,
            nationality,
            trophies,
            footballers,
        }
    }
}

/// Drops repeated footballer ids from raw input, keeping first-seen order
pub fn distinct_footballer_ids(ids: &[i32]) -> Vec<i32> {
    let mut seen = HashSet::with_capacity(ids.len());
    ids.iter().copied().filter(|id| seen.insert(*id)).collect()
}
