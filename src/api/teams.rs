use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use tracing::info;

use super::error::ApiError;
use super::types::{TeamQuery, TeamResponse};
use super::AppState;
use crate::database::models::Team;

pub async fn add_team(
    State((_config, service)): State<AppState>,
    Json(team): Json<Team>,
) -> Result<(StatusCode, Json<TeamResponse>), ApiError> {
    info!("Registering team {}", team.team_name);
    service.register_team(&team).await?;
    Ok((StatusCode::CREATED, Json(TeamResponse { team })))
}

pub async fn get_team(
    State((_config, service)): State<AppState>,
    Query(query): Query<TeamQuery>,
) -> Result<Json<Team>, ApiError> {
    let team = service.get_team(&query.team_name).await?;
    Ok(Json(team))
}
