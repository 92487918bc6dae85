use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{Router, middleware};
use tower_http::trace::TraceLayer;

use todo_api::{
    auth::bootstrap::init_providers,
    config::AppConfig,
    db::connect,
    logging::init_tracing,
    routes::{catch_panic_layer, json_error_middleware, router},
    services::ServiceContext,
    state::AppState,
};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!("server failed: {err:?}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cfg = AppConfig::from_env()?;
    init_tracing(&cfg.logging.rust_log);

    let db_cfg = cfg
        .database
        .as_ref()
        .context("missing database configuration (APP_DATABASE__URL)")?;
    let auth_cfg = cfg
        .auth
        .as_ref()
        .context("missing auth configuration (APP_AUTH__JWT_SECRET, APP_AUTH__ADMIN_EMAIL, APP_AUTH__ADMIN_PASSWORD)")?;

    let db = connect(db_cfg).await?;
    let services = ServiceContext::new(&db);
    let providers = init_providers(auth_cfg, &services).await?;

    let state = AppState::new(cfg.clone(), &db, providers);

    let app = Router::new()
        .merge(router(Arc::clone(&state)))
        .layer(middleware::from_fn(json_error_middleware))
        .layer(catch_panic_layer())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", cfg.general.host, cfg.general.port)
        .parse()
        .with_context(|| format!("invalid listen address {}:{}", cfg.general.host, cfg.general.port))?;
    tracing::info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
