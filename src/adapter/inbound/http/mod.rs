//! HTTP inbound adapter.
//!
//! Maps each verb and path to exactly one service operation, turns request
//! bodies into the typed shapes the services expect, and shapes results into
//! JSON responses. Holds no business rules.
//!
//! ## Routes
//!
//! | Verb   | Path                                               |
//! |--------|----------------------------------------------------|
//! | POST   | `/mercados`                                        |
//! | GET    | `/mercados`                                        |
//! | GET    | `/mercados/:id`                                    |
//! | PUT    | `/mercados/:id`                                    |
//! | DELETE | `/mercados/:id`                                    |
//! | POST   | `/mercados/:id/produtos`                           |
//! | GET    | `/mercados/:id/produtos`                           |
//! | DELETE | `/mercados/:id/produtos/:produto_id`               |
//! | POST   | `/mercados/:id/produtos/:produto_id/movimentacoes` |
//! | GET    | `/mercados/:id/produtos/:produto_id/movimentacoes` |
//!
//! Anything else falls through to the static front-end directory, when one
//! is configured.

pub mod dto;
pub mod error;
pub mod extract;
pub mod market;
pub mod movement;
pub mod product;
pub mod state;


use std::future::Future;
use std::path::Path;

use axum::routing::{delete, get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::Result;
use crate::port::outbound::store::CatalogStore;

pub use error::ApiError;
pub use state::AppState;

/// Build the API router over the given state.
pub fn router<S: CatalogStore>(state: AppState<S>) -> Router {
    Router::new()
        .route("/mercados", post(market::create::<S>).get(market::list::<S>))
        .route(
            "/mercados/:id",
            get(market::get::<S>)
                .put(market::update::<S>)
                .delete(market::delete::<S>),
        )
        .route(
            "/mercados/:id/produtos",
            post(product::create::<S>).get(product::list::<S>),
        )
        .route(
            "/mercados/:id/produtos/:produto_id",
            delete(product::delete::<S>),
        )
        .route(
            "/mercados/:id/produtos/:produto_id/movimentacoes",
            post(movement::create::<S>).get(movement::list::<S>),
        )
        .with_state(state)
}

/// Build the full application: API routes, static fallback, CORS and
/// request tracing.
pub fn app<S: CatalogStore>(state: AppState<S>, static_dir: Option<&Path>) -> Router {
    let mut app = router(state);
    if let Some(dir) = static_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }
    app.layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Serve `app` on `listener` until `shutdown` resolves.
///
/// # Errors
/// Returns an error if the server fails while accepting connections.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "Servidor rodando em http://{addr}");
    }
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}
