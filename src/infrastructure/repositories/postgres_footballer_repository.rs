use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::domain::footballer::{BestSkillType, Footballer, PositionType};
use crate::domain::repositories::FootballerRepository;

/// Column list shared by every query that loads footballers
pub(crate) const FOOTBALLER_COLUMNS: &str = "f.id, f.name, f.contract_start_date, \
     f.contract_end_date, f.best_skill_type, f.position_type, f.coach_id";

/// Row shape of the `footballers` table
#[derive(Debug, sqlx::FromRow)]
pub(crate) struct FootballerRow {
    pub id: i32,
    pub name: String,
    pub contract_start_date: NaiveDate,
    pub contract_end_date: NaiveDate,
    pub best_skill_type: BestSkillType,
    pub position_type: PositionType,
    pub coach_id: Option<i32>,
}

impl FootballerRow {
    pub fn into_domain(self) -> Footballer {
        Footballer::from_persistence(
            self.id,
            self.name,
            self.contract_start_date,
            self.contract_end_date,
            self.best_skill_type,
            self.position_type,
        )
    }
}

/// PostgreSQL implementation of FootballerRepository
pub struct PostgresFootballerRepository {
    pool: PgPool,
}

impl PostgresFootballerRepository {
    /// Creates a new PostgresFootballerRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FootballerRepository for PostgresFootballerRepository {
    async fn exists(&self, id: i32) -> Result<bool, String> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM footballers WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| format!("Failed to check footballer {}: {}", id, e))
    }

    async fn find_all(&self) -> Result<Vec<Footballer>, String> {
        let rows = sqlx::query_as::<_, FootballerRow>(&format!(
            "SELECT {} FROM footballers f ORDER BY f.id",
            FOOTBALLER_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to load footballers: {}", e))?;

        Ok(rows.into_iter().map(FootballerRow::into_domain).collect())
    }
}
