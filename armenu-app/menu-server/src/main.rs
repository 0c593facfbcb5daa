use std::sync::Arc;

use tracing::{error, info};

use armenu_api::{build_router, AppState};
use armenu_infrastructure::{
    create_pool, run_migrations, MemoryStore, PgMenuCategoryRepository, PgMenuItemRepository,
    PgRestaurantRepository,
};
use armenu_shared::config::{AppConfig, StoreBackend};
use armenu_shared::AppError;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize telemetry
    let _guard = armenu_shared::telemetry::init_telemetry(&config.log);

    info!("{} starting ({})...", config.app.name, config.app.env);

    let state = match build_state(&config).await {
        Ok(state) => state,
        Err(e) => {
            error!("Failed to initialise store: {}", e);
            return Err(e.into());
        }
    };

    let app = build_router(state);

    let addr = config.server_addr();
    info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn build_state(config: &AppConfig) -> Result<AppState, AppError> {
    match config.store.backend {
        StoreBackend::Memory => {
            let store = if config.store.seed_demo_data {
                MemoryStore::with_demo_data().map_err(|e| AppError::StoreInit(e.to_string()))?
            } else {
                MemoryStore::new()
            };
            info!("Using in-memory store (demo data: {})", config.store.seed_demo_data);

            let store = Arc::new(store);
            Ok(AppState::new(store.clone(), store.clone(), store))
        }
        StoreBackend::Postgres => {
            info!("Connecting to database...");
            let pool = create_pool(&config.database)
                .await
                .map_err(|e| AppError::StoreInit(e.to_string()))?;
            run_migrations(&pool)
                .await
                .map_err(|e| AppError::StoreInit(e.to_string()))?;
            info!("Database connection established, migrations applied.");

            Ok(AppState::new(
                Arc::new(PgRestaurantRepository::new(pool.clone())),
                Arc::new(PgMenuCategoryRepository::new(pool.clone())),
                Arc::new(PgMenuItemRepository::new(pool)),
            ))
        }
    }
}
