use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::processor;

/// Query string for the team export
#[derive(Debug, Deserialize)]
pub struct TeamExportQuery {
    /// Cutoff for contract start dates, `YYYY-MM-DD`
    pub date: NaiveDate,
}

/// Export coaches with their footballers as XML
///
/// GET /api/exports/coaches
pub async fn export_coaches(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let xml = processor::export_coaches_with_their_footballers(state.coaches.as_ref()).await?;
    Ok(([(header::CONTENT_TYPE, "application/xml")], xml))
}

/// Export the teams with the most footballers signed since `date`
///
/// GET /api/exports/teams?date=YYYY-MM-DD
pub async fn export_teams(
    State(state): State<AppState>,
    Query(query): Query<TeamExportQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let json = processor::export_teams_with_most_footballers(state.teams.as_ref(), query.date).await?;
    Ok(([(header::CONTENT_TYPE, "application/json")], json))
}
