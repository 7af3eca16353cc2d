//! Router assembly and the serve loop.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::application::service::BookService;
use crate::config::Config;
use crate::infra::json_store::JsonBookRepository;

use super::handlers::{
    create_book, delete_book, get_book, health, list_books, missing_id, search_books,
    update_book, SharedService,
};

/// All routes. `/books/search` is static and wins over `/books/:id`.
pub fn router(service: SharedService) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/books", get(list_books).post(create_book))
        .route("/books/search", get(search_books))
        .route(
            "/books/",
            get(missing_id).put(missing_id).delete(missing_id),
        )
        .route(
            "/books/:id",
            get(get_book).put(update_book).delete(delete_book),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

/// Serves until Ctrl-C.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let addr = config.socket_addr()?;
    let repo = JsonBookRepository::new(&config.data_file);
    tracing::info!(data_file = %repo.path().display(), "using book store");

    let service = Arc::new(BookService::new(repo));
    let app = router(service);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
