use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::trace::TraceLayer;
use tracing::info;

use archeologist::config::Config;
use archeologist::logging::init_tracing;
use archeologist::reconstruction::pipeline::Pipeline;
use archeologist::routes::build_router;
use archeologist::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on an unresolvable completion key)
    let config = Config::from_env()?;

    init_tracing(&config.rust_log);

    info!("Starting AI Archeologist v{}", env!("CARGO_PKG_VERSION"));

    let pipeline = Pipeline::from_config(&config)?;

    let state = AppState {
        pipeline: Arc::new(pipeline),
    };

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
