use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use watchtime_app::{
    command_handlers::{DeleteUserCommandHandler, UpsertWatchtimeCommandHandler},
    cqrs::commands::{DeleteUser, UpsertWatchtime},
};
use watchtime_types::errors::{AppError, ApplicationError};

use crate::{
    handlers::{ErrorBody, error_response},
    http::AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertUserRequest {
    pub user_id: String,
    pub total_watchtime: i64,
}

/// PUT /ranking/user
#[utoipa::path(
    put,
    path = "/ranking/user",
    request_body = UpsertUserRequest,
    responses(
        (status = 204, description = "Watchtime saved"),
        (status = 400, description = "Invalid request body", body = ErrorBody),
        (status = 500, description = "Store transaction failed", body = ErrorBody)
    ),
    tag = "ranking"
)]
pub async fn put_user(
    State(state): State<AppState>,
    payload: Result<Json<UpsertUserRequest>, JsonRejection>,
) -> Response {
    let invocation_id = Uuid::new_v4();
    tracing::info!("[{invocation_id}] Processing request for update user endpoint.");

    let Json(request) = match payload {
        Ok(request) => request,
        Err(rejection) => {
            tracing::warn!("[{invocation_id}] Rejected request body: {rejection}");
            return invalid_body("The request body is invalid.");
        }
    };

    let command = UpsertWatchtime {
        user_id: request.user_id,
        total_watchtime: request.total_watchtime,
    };

    match state
        .app_bus
        .execute(command, UpsertWatchtimeCommandHandler::new())
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(ApplicationError::App(AppError::InvalidRequest(reason))) => invalid_body(reason),
        Err(e) => {
            tracing::error!("[{invocation_id}] Unable to save watchtime: {e}");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "TableTransactionError",
                "There was a problem executing the table transaction.",
            )
        }
    }
}

/// DELETE /ranking/user/{user_id}
#[utoipa::path(
    delete,
    path = "/ranking/user/{user_id}",
    params(("user_id" = String, Path, description = "Id of the user to delete")),
    responses(
        (status = 204, description = "User deleted, or was never there"),
        (status = 500, description = "Deletion failed", body = ErrorBody)
    ),
    tag = "ranking"
)]
pub async fn delete_user(State(state): State<AppState>, Path(user_id): Path<String>) -> Response {
    let invocation_id = Uuid::new_v4();
    tracing::info!("[{invocation_id}] Processing request to delete user with userId {user_id}.");

    let command = DeleteUser {
        user_id: user_id.clone(),
    };

    match state
        .app_bus
        .execute(command, DeleteUserCommandHandler::new())
        .await
    {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            tracing::error!("[{invocation_id}] Unable to delete user {user_id}: {e}");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "UserDeletionError",
                format!("There was an error deleting the user with id {user_id}."),
            )
        }
    }
}

fn invalid_body(message: impl Into<String>) -> Response {
    error_response(StatusCode::BAD_REQUEST, "InvalidRequestBody", message)
}
