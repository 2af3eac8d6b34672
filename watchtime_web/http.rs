use axum::{
    Router,
    routing::{delete, get, put},
};
use std::{io::Error, net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use watchtime_app::app_bus::AppBus;
use watchtime_types::errors::ApplicationError;

use crate::handlers::{delete_user, get_ranking, openapi_json, put_user};

#[derive(Clone)]
pub struct AppState {
    pub app_bus: Arc<AppBus>,
}

impl AppState {
    pub fn new(app_bus: Arc<AppBus>) -> AppState {
        AppState { app_bus }
    }
}

pub struct WebRouter {}

impl WebRouter {
    pub fn router(state: AppState) -> Router {
        Router::new()
            .route("/ranking/position/{user_id}", get(get_ranking))
            .route("/ranking/user", put(put_user))
            .route("/ranking/user/{user_id}", delete(delete_user))
            .route("/openapi.json", get(openapi_json))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    pub async fn serve(state: AppState, port: u16) -> Result<(), ApplicationError> {
        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = TcpListener::bind(addr).await.map_err(infra_error)?;

        Self::serve_on(state, listener).await
    }

    /// Serves on an already bound listener, e.g. one on an ephemeral port.
    pub async fn serve_on(state: AppState, listener: TcpListener) -> Result<(), ApplicationError> {
        let addr = listener.local_addr().map_err(infra_error)?;
        tracing::info!("HTTP Server started, listening on http://{}", addr);

        axum::serve(listener, Self::router(state))
            .await
            .map_err(infra_error)?;

        Ok(())
    }
}

fn infra_error(e: Error) -> ApplicationError {
    let err = format!("{:#?}", e);
    ApplicationError::Infrastructure(err)
}
