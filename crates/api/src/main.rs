use anyhow::Context;

use cedarboard_api::app::{build_app, services::AppServices};
use cedarboard_rbac::PolicyStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cedarboard_observability::init();

    // Boot with the demo dataset unless explicitly disabled.
    let seed_demo = std::env::var("CEDARBOARD_SEED_DEMO")
        .map(|v| v != "false" && v != "0")
        .unwrap_or(true);
    let store = if seed_demo {
        PolicyStore::seeded()
    } else {
        PolicyStore::new()
    };

    let app = build_app(AppServices::new(store));

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8080")
        .await
        .context("failed to bind 0.0.0.0:8080")?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
