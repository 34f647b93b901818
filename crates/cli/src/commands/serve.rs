use anyhow::Result;
use passage_archive_http::{create_router, AppState};
use std::sync::Arc;

use crate::open_service;

pub(crate) async fn run(port: u16, host: String) -> Result<()> {
    let service = Arc::new(open_service()?);
    let state = Arc::new(AppState::new(service));

    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
