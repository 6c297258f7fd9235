use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;

use super::postgres_footballer_repository::{FootballerRow, FOOTBALLER_COLUMNS};
use crate::domain::repositories::TeamRepository;
use crate::domain::team::{Team, TeamFootballer};

#[derive(Debug, sqlx::FromRow)]
struct TeamRow {
    id: i32,
    name: String,
    nationality: String,
    trophies: i32,
}

#[derive(Debug, sqlx::FromRow)]
struct TeamFootballerRow {
    team_id: i32,
    #[sqlx(flatten)]
    footballer: FootballerRow,
}

/// PostgreSQL implementation of TeamRepository
///
/// Links live in `teams_footballers`, whose primary key `(team_id,
/// footballer_id)` backs the no-duplicate-link invariant.
pub struct PostgresTeamRepository {
    pool: PgPool,
}

impl PostgresTeamRepository {
    /// Creates a new PostgresTeamRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    async fn find_all(&self) -> Result<Vec<Team>, String> {
        let team_rows = sqlx::query_as::<_, TeamRow>(
            "SELECT id, name, nationality, trophies FROM teams ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to load teams: {}", e))?;

        let link_rows = sqlx::query_as::<_, TeamFootballerRow>(&format!(
            r#"
            SELECT tf.team_id, {}
            FROM teams_footballers tf
            JOIN footballers f ON f.id = tf.footballer_id
            ORDER BY tf.team_id, f.id
            "#,
            FOOTBALLER_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to load team footballers: {}", e))?;

        let mut by_team: HashMap<i32, Vec<TeamFootballer>> = HashMap::new();
        for row in link_rows {
            let footballer_id = row.footballer.id;
            by_team
                .entry(row.team_id)
                .or_default()
                .push(TeamFootballer::from_persistence(
                    footballer_id,
                    row.footballer.into_domain(),
                ));
        }

        Ok(team_rows
            .into_iter()
            .map(|r| {
                let links = by_team.remove(&r.id).unwrap_or_default();
                Team::from_persistence(r.id, r.name, r.nationality, r.trophies, links)
            })
            .collect())
    }

    async fn save_all(&self, teams: Vec<Team>) -> Result<(), String> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| format!("Failed to start transaction: {}", e))?;

        for team in &teams {
            let team_id = sqlx::query_scalar::<_, i32>(
                "INSERT INTO teams (name, nationality, trophies) VALUES ($1, $2, $3) RETURNING id",
            )
            .bind(team.name())
            .bind(team.nationality())
            .bind(team.trophies())
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| format!("Failed to save team {}: {}", team.name(), e))?;

            for link in team.footballers() {
                sqlx::query(
                    "INSERT INTO teams_footballers (team_id, footballer_id) VALUES ($1, $2)",
                )
                .bind(team_id)
                .bind(link.footballer_id())
                .execute(&mut *tx)
                .await
                .map_err(|e| format!("Failed to link footballer {}: {}", link.footballer_id(), e))?;
            }
        }

        tx.commit()
            .await
            .map_err(|e| format!("Failed to commit teams: {}", e))?;

        tracing::debug!(teams = teams.len(), "Committed teams");
        Ok(())
    }
}
