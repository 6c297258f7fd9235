use async_trait::async_trait;

use crate::domain::team::Team;

/// Repository trait for Team aggregate
///
/// Defines the contract for persisting and retrieving teams.
/// Implementations should handle database-specific details.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Find all teams; every footballer link carries its loaded footballer
    async fn find_all(&self) -> Result<Vec<Team>, String>;

    /// Add all teams with their footballer links and commit them as one unit
    async fn save_all(&self, teams: Vec<Team>) -> Result<(), String>;
}
