use std::sync::Arc;

use clap::Parser;
use macrolens_api::{
    application::{
        http::server::http_server::{router, state, with_metrics},
        logging::init_logger,
    },
    args::Args,
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log);

    let state = state(args.clone())?;
    let app = with_metrics(router(state)?, &args.server.root_path);

    let addr = format!("{}:{}", args.server.host, args.server.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(
        model = %args.llm.gemini_model,
        "Macrolens API listening on http://{}{}",
        listener.local_addr()?,
        args.server.root_path
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}
