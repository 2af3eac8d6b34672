use std::sync::Arc;

use watchtime_app::{app_bus::AppBus, config::Config};
use watchtime_store::{WatchtimeStore, bootstrap_from_file, uow::InMemoryUnitOfWorkProvider};
use watchtime_types::{Result, errors::ApplicationError};
use watchtime_web::{AppState, WebRouter};

mod logs;
use logs::setup_logging;

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn main() -> Result<(), ApplicationError> {
    let config = Arc::new(Config::from_env());
    let _log_guard = setup_logging(&config.log_dir);

    let app_bus = setup_app(config.clone()).await?;
    let state = AppState::new(app_bus);

    WebRouter::serve(state, config.http_port).await
}

async fn setup_app(config: Arc<Config>) -> Result<Arc<AppBus>, ApplicationError> {
    let store = WatchtimeStore::new();
    seed_store(&store, &config).await?;

    let uow_provider = Arc::new(InMemoryUnitOfWorkProvider::new(store));
    Ok(Arc::new(AppBus::new(config, uow_provider)))
}

async fn seed_store(store: &WatchtimeStore, config: &Config) -> Result<(), ApplicationError> {
    let Some(path) = &config.seed_file else {
        tracing::info!("No seed file configured. Starting with an empty leaderboard.");
        return Ok(());
    };

    match bootstrap_from_file(store, path).await {
        Ok(true) => tracing::info!("Store seeded from {}.", path.display()),
        Ok(false) => tracing::info!("Store already populated. Skipping seed."),
        Err(e) => {
            tracing::error!("Error while seeding store from {}: {e}", path.display());
            return Err(e);
        }
    }

    Ok(())
}
