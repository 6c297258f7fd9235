use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;

use super::postgres_footballer_repository::{FootballerRow, FOOTBALLER_COLUMNS};
use crate::domain::coach::Coach;
use crate::domain::footballer::Footballer;
use crate::domain::repositories::CoachRepository;

#[derive(Debug, sqlx::FromRow)]
struct CoachRow {
    id: i32,
    name: String,
    nationality: String,
}

/// PostgreSQL implementation of CoachRepository
///
/// Coaches and the footballers they own are written in one transaction.
pub struct PostgresCoachRepository {
    pool: PgPool,
}

impl PostgresCoachRepository {
    /// Creates a new PostgresCoachRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CoachRepository for PostgresCoachRepository {
    async fn find_all(&self) -> Result<Vec<Coach>, String> {
        let coach_rows = sqlx::query_as::<_, CoachRow>(
            "SELECT id, name, nationality FROM coaches ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to load coaches: {}", e))?;

        let footballer_rows = sqlx::query_as::<_, FootballerRow>(&format!(
            "SELECT {} FROM footballers f WHERE f.coach_id IS NOT NULL ORDER BY f.id",
            FOOTBALLER_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to load coach footballers: {}", e))?;

        let mut by_coach: HashMap<i32, Vec<Footballer>> = HashMap::new();
        for row in footballer_rows {
            if let Some(coach_id) = row.coach_id {
                by_coach.entry(coach_id).or_default().push(row.into_domain());
            }
        }

        Ok(coach_rows
            .into_iter()
            .map(|r| {
                let footballers = by_coach.remove(&r.id).unwrap_or_default();
                Coach::from_persistence(r.id, r.name, r.nationality, footballers)
            })
            .collect())
    }

    async fn save_all(&self, coaches: Vec<Coach>) -> Result<(), String> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| format!("Failed to start transaction: {}", e))?;

        for coach in &coaches {
            let coach_id = sqlx::query_scalar::<_, i32>(
                "INSERT INTO coaches (name, nationality) VALUES ($1, $2) RETURNING id",
            )
            .bind(coach.name())
            .bind(coach.nationality())
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| format!("Failed to save coach {}: {}", coach.name(), e))?;

            for footballer in coach.footballers() {
                sqlx::query(
                    r#"
                    INSERT INTO footballers (
                        name, contract_start_date, contract_end_date,
                        best_skill_type, position_type, coach_id
                    )
                    VALUES ($1, $2, $3, $4, $5, $6)
                    "#,
                )
                .bind(footballer.name())
                .bind(footballer.contract_start_date())
                .bind(footballer.contract_end_date())
                .bind(footballer.best_skill_type())
                .bind(footballer.position_type())
                .bind(coach_id)
                .execute(&mut *tx)
                .await
                .map_err(|e| format!("Failed to save footballer {}: {}", footballer.name(), e))?;
            }
        }

        tx.commit()
            .await
            .map_err(|e| format!("Failed to commit coaches: {}", e))?;

        tracing::debug!(coaches = coaches.len(), "Committed coaches");
        Ok(())
    }
}
