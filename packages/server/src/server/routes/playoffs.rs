use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::domains::playoffs::{actions, PlayoffsError};
use crate::server::app::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlayoffsRequest {
    pub conferences: Vec<String>,
    pub season: String,
    pub limit: i64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportResultRequest {
    pub round: i32,
    pub slot_label: String,
    pub winner: Uuid,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearResultRequest {
    pub round: i32,
    pub slot_label: String,
    pub team_id: Uuid,
}

impl IntoResponse for PlayoffsError {
    fn into_response(self) -> Response {
        let status = match &self {
            PlayoffsError::DuplicateSeason(_) => StatusCode::CONFLICT,
            PlayoffsError::InvalidTopology(_)
            | PlayoffsError::InsufficientTeams { .. }
            | PlayoffsError::UnbalancedConferences { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            PlayoffsError::NoSuchGame { .. }
            | PlayoffsError::PromotionTargetMissing { .. }
            | PlayoffsError::NothingToDelete(_) => StatusCode::NOT_FOUND,
            PlayoffsError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "playoffs operation failed on the store");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Create the bracket for a season from ranked standings.
pub async fn create_playoffs_handler(
    Extension(state): Extension<AppState>,
    Json(req): Json<CreatePlayoffsRequest>,
) -> Result<impl IntoResponse, PlayoffsError> {
    actions::create_bracket(&req.conferences, &req.season, req.limit, &state.db_pool).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "season": req.season, "status": "created" })),
    ))
}

/// The nested bracket for a season: rounds -> slots -> games.
pub async fn list_playoffs_handler(
    Extension(state): Extension<AppState>,
    Path(season): Path<String>,
) -> Result<impl IntoResponse, PlayoffsError> {
    let rounds = actions::list_bracket(&season, &state.db_pool).await?;
    Ok(Json(rounds))
}

/// Report one game's winner.
pub async fn report_result_handler(
    Extension(state): Extension<AppState>,
    Path(season): Path<String>,
    Json(req): Json<ReportResultRequest>,
) -> Result<impl IntoResponse, PlayoffsError> {
    actions::report_result(&season, req.round, &req.slot_label, req.winner, &state.db_pool)
        .await?;
    Ok(Json(json!({ "status": "recorded" })))
}

/// Undo a recorded result.
pub async fn clear_result_handler(
    Extension(state): Extension<AppState>,
    Path(season): Path<String>,
    Json(req): Json<ClearResultRequest>,
) -> Result<impl IntoResponse, PlayoffsError> {
    actions::clear_result(&season, req.round, &req.slot_label, req.team_id, &state.db_pool)
        .await?;
    Ok(Json(json!({ "status": "cleared" })))
}

/// Tear down a season's bracket.
pub async fn delete_playoffs_handler(
    Extension(state): Extension<AppState>,
    Path(season): Path<String>,
) -> Result<impl IntoResponse, PlayoffsError> {
    let deleted = actions::delete_bracket(&season, &state.db_pool).await?;
    Ok(Json(json!({ "season": season, "deleted": deleted })))
}
