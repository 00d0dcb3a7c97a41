use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::app::build_router;
use api::gql::build_schema;
use api::{AppConfig, AppState};
use infra::LeagueDataset;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let config = AppConfig::from_env()?;

    // Loaded once; never mutated afterwards.
    let leagues = LeagueDataset::load(&config.leagues_path)?;

    let state = AppState::new(&config, leagues)?;
    tracing::info!(
        "Proxying accounts={} rooms={} api={} (timeout {:?})",
        config.rec_net.accounts_url,
        config.rec_net.rooms_url,
        config.rec_net.api_url,
        config.rec_net.timeout
    );

    let schema = build_schema(state.clone());
    let app = build_router(state, schema, &config);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server ready at http://{}/graphql", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
