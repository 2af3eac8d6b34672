use axum::Json;
use utoipa::OpenApi;

use watchtime_types::ranking::{AnonRankingEntry, RankingResult};

use super::{ErrorBody, UpsertUserRequest, ranking_handler, user_handler};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Watchtime Leaderboard API",
        version = "0.1.0",
        description = "Rank lookup with anonymized closest neighbors"
    ),
    paths(
        ranking_handler::get_ranking,
        user_handler::put_user,
        user_handler::delete_user
    ),
    components(schemas(RankingResult, AnonRankingEntry, UpsertUserRequest, ErrorBody)),
    tags((name = "ranking", description = "Leaderboard positions and watchtime records"))
)]
pub struct ApiDoc;

/// GET /openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
