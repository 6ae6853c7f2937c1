use std::error::Error;
use std::sync::Arc;

use dotenvy::dotenv;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use campus_server::config::Config;
use campus_server::routes::create_routes;
use campus_server::services::AppState;
use campus_server::store::{seed, EntityStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("campus_server=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env();

    let store = EntityStore::new();
    if config.seed_demo_data {
        seed::populate(&store)?;
        tracing::info!("Demo data loaded");
    }

    let state = AppState::new(Arc::new(store), config.audit_page_limit);
    let app = create_routes(state);

    tracing::info!("Server running at http://{}", config.bind_addr);
    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
