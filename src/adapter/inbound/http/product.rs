//! `/mercados/:id/produtos` handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::debug;

use super::dto::{Created, ProductRequest, ProductResponse};
use super::error::ApiError;
use super::extract::{parse_id, JsonBody, PathParams};
use super::state::AppState;
use crate::domain::{MarketId, ProductId};
use crate::port::outbound::store::CatalogStore;

/// `POST /mercados/:id/produtos`
pub async fn create<S: CatalogStore>(
    State(state): State<AppState<S>>,
    PathParams(market_id): PathParams<String>,
    JsonBody(body): JsonBody<ProductRequest>,
) -> Result<(StatusCode, Json<Created>), ApiError> {
    let market_id: MarketId = parse_id(&market_id)?;
    debug!(%market_id, ?body, "Product creation requested");
    let id = state
        .products
        .create(market_id, body.into())
        .await
        .map_err(|e| ApiError::from_service(e, "Erro ao cadastrar produto."))?;
    Ok((StatusCode::CREATED, Json(Created::new(id.get()))))
}

/// `GET /mercados/:id/produtos`
pub async fn list<S: CatalogStore>(
    State(state): State<AppState<S>>,
    PathParams(market_id): PathParams<String>,
) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let market_id: MarketId = parse_id(&market_id)?;
    let products = state
        .products
        .list_by_market(market_id)
        .await
        .map_err(|e| ApiError::from_service(e, "Erro ao listar produtos do mercado."))?;
    debug!(%market_id, count = products.len(), "Products listed");
    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}

/// `DELETE /mercados/:id/produtos/:produto_id`
pub async fn delete<S: CatalogStore>(
    State(state): State<AppState<S>>,
    PathParams((market_id, product_id)): PathParams<(String, String)>,
) -> Result<StatusCode, ApiError> {
    let market_id: MarketId = parse_id(&market_id)?;
    let product_id: ProductId = parse_id(&product_id)?;
    state
        .products
        .delete(market_id, product_id)
        .await
        .map_err(|e| ApiError::from_service(e, "Erro ao deletar produto."))?;
    Ok(StatusCode::NO_CONTENT)
}
