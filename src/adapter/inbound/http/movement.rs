//! `/mercados/:id/produtos/:produto_id/movimentacoes` handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::debug;

use super::dto::{Created, MovementRequest, MovementResponse};
use super::error::ApiError;
use super::extract::{parse_id, JsonBody, PathParams};
use super::state::AppState;
use crate::domain::{MarketId, ProductId};
use crate::port::outbound::store::CatalogStore;

/// `POST /mercados/:id/produtos/:produto_id/movimentacoes`
pub async fn create<S: CatalogStore>(
    State(state): State<AppState<S>>,
    PathParams((market_id, product_id)): PathParams<(String, String)>,
    JsonBody(body): JsonBody<MovementRequest>,
) -> Result<(StatusCode, Json<Created>), ApiError> {
    let market_id: MarketId = parse_id(&market_id)?;
    let product_id: ProductId = parse_id(&product_id)?;
    debug!(%market_id, %product_id, ?body, "Movement requested");
    let id = state
        .movements
        .create(market_id, product_id, body.into())
        .await
        .map_err(|e| ApiError::from_service(e, "Erro ao registrar movimentação."))?;
    Ok((StatusCode::CREATED, Json(Created::new(id.get()))))
}

/// `GET /mercados/:id/produtos/:produto_id/movimentacoes`
pub async fn list<S: CatalogStore>(
    State(state): State<AppState<S>>,
    PathParams((market_id, product_id)): PathParams<(String, String)>,
) -> Result<Json<Vec<MovementResponse>>, ApiError> {
    let market_id: MarketId = parse_id(&market_id)?;
    let product_id: ProductId = parse_id(&product_id)?;
    let movements = state
        .movements
        .list_for_product(market_id, product_id)
        .await
        .map_err(|e| ApiError::from_service(e, "Erro ao listar movimentações."))?;
    debug!(%market_id, %product_id, count = movements.len(), "Movements listed");
    Ok(Json(movements.into_iter().map(MovementResponse::from).collect()))
}
