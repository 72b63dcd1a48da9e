//! Lift pass pricing server

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use liftpass_pricing::cache::start_cache_warmer;
use liftpass_pricing::config::Config;
use liftpass_pricing::pricing::PriceStore;
use liftpass_pricing::{app, db, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "liftpass_pricing=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("loading configuration")?;

    let store = match db::init_pool(&config)
        .await
        .context("connecting to database")?
    {
        Some(pool) => PriceStore::postgres(pool),
        None => PriceStore::seeded(),
    };

    let state = AppState::new(store);
    tokio::spawn(start_cache_warmer(
        state.cache.clone(),
        state.store.clone(),
        config.cache_refresh,
    ));

    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    tracing::info!("Lift pass pricing listening on {}", addr);

    axum::serve(listener, app(state)).await?;

    Ok(())
}
