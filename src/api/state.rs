use std::sync::Arc;

use sqlx::PgPool;

use crate::domain::repositories::{CoachRepository, FootballerRepository, TeamRepository};
use crate::infrastructure::repositories::{
    InMemoryRepository, PostgresCoachRepository, PostgresFootballerRepository,
    PostgresTeamRepository,
};

/// Repositories shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub coaches: Arc<dyn CoachRepository>,
    pub teams: Arc<dyn TeamRepository>,
    pub footballers: Arc<dyn FootballerRepository>,
}

impl AppState {
    /// Wires the PostgreSQL adapters over one connection pool
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            coaches: Arc::new(PostgresCoachRepository::new(pool.clone())),
            teams: Arc::new(PostgresTeamRepository::new(pool.clone())),
            footballers: Arc::new(PostgresFootballerRepository::new(pool)),
        }
    }

    /// Wires all three ports to the same in-memory store
    pub fn in_memory(store: InMemoryRepository) -> Self {
        Self {
            coaches: Arc::new(store.clone()),
            teams: Arc::new(store.clone()),
            footballers: Arc::new(store),
        }
    }
}
