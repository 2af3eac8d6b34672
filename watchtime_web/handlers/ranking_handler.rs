use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use watchtime_app::{cqrs::queries::GetRanking, queries_handlers::GetRankingHandler};
use watchtime_types::{
    errors::{ApplicationError, RankingError},
    ranking::RankingResult,
};

use crate::{
    handlers::{ErrorBody, error_response},
    http::AppState,
};

/// GET /ranking/position/{user_id}
#[utoipa::path(
    get,
    path = "/ranking/position/{user_id}",
    params(("user_id" = String, Path, description = "Id of the user to rank")),
    responses(
        (status = 200, description = "Position and anonymized closest neighbors", body = RankingResult),
        (status = 404, description = "No watchtime recorded for the user", body = ErrorBody),
        (status = 500, description = "Ranking failed", body = ErrorBody)
    ),
    tag = "ranking"
)]
pub async fn get_ranking(State(state): State<AppState>, Path(user_id): Path<String>) -> Response {
    let invocation_id = Uuid::new_v4();
    tracing::info!("[{invocation_id}] Processing ranking request for user {user_id}.");

    let query = GetRanking { user_id };
    match state.app_bus.query(query, GetRankingHandler::new()).await {
        Ok(ranking) => Json(ranking).into_response(),
        Err(ApplicationError::Ranking(RankingError::UserNotFound(_))) => error_response(
            StatusCode::NOT_FOUND,
            "UserNotFound",
            "The user with the given id was not found.",
        ),
        Err(e) => {
            tracing::error!("[{invocation_id}] Ranking request failed: {e}");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "The ranking could not be computed.",
            )
        }
    }
}
