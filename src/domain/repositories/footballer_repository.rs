use async_trait::async_trait;

use crate::domain::footballer::Footballer;

/// Read access to persisted footballers
#[async_trait]
pub trait FootballerRepository: Send + Sync {
    /// Returns true if a footballer with the given id is stored
    async fn exists(&self, id: i32) -> Result<bool, String>;

    /// Find all stored footballers
    async fn find_all(&self) -> Result<Vec<Footballer>, String>;
}
