use async_trait::async_trait;

use crate::domain::coach::Coach;

/// Repository trait for Coach aggregate
///
/// Coaches are persisted together with the footballers they own.
#[async_trait]
pub trait CoachRepository: Send + Sync {
    /// Find all coaches with their footballers loaded
    async fn find_all(&self) -> Result<Vec<Coach>, String>;

    /// Add all coaches (and their footballers) and commit them as one unit
    ///
    /// Either every coach is stored or none is.
    async fn save_all(&self, coaches: Vec<Coach>) -> Result<(), String>;
}
