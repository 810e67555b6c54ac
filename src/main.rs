use anyhow::Context;
use finance_mock::modules::entities::core::catalog::EntityCatalog;
use finance_mock::shell::config::AppConfig;
use finance_mock::shell::http::router;
use finance_mock::shell::seed::seed_sample_data;
use finance_mock::shell::state::AppState;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;
    let state = AppState::in_memory(EntityCatalog::finance(), config.context_base.clone());

    if config.seed_sample_data {
        seed_sample_data(&*state.repository)
            .await
            .context("seeding sample data")?;
    }

    let entity_sets: Vec<_> = state
        .catalog
        .describe()
        .into_iter()
        .map(|(name, _)| name.to_string())
        .collect();
    tracing::info!(?entity_sets, "entity sets available");

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;
    tracing::info!("mock server listening on http://{}", config.bind_addr);
    axum::serve(listener, router(state)).await?;
    Ok(())
}
