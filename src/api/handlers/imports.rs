use axum::extract::State;

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::processor;

/// Import coaches with their footballers from an XML body
///
/// POST /api/imports/coaches
pub async fn import_coaches(
    State(state): State<AppState>,
    body: String,
) -> Result<String, ApiError> {
    let report = processor::import_coaches(state.coaches.as_ref(), &body).await?;
    Ok(report)
}

/// Import teams from a JSON array body
///
/// POST /api/imports/teams
pub async fn import_teams(
    State(state): State<AppState>,
    body: String,
) -> Result<String, ApiError> {
    let report =
        processor::import_teams(state.teams.as_ref(), state.footballers.as_ref(), &body).await?;
    Ok(report)
}
