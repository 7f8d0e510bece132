//! `/mercados` handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::debug;

use super::dto::{Acknowledged, Created, MarketDetailsResponse, MarketRequest, MarketResponse};
use super::error::ApiError;
use super::extract::{parse_id, JsonBody, PathParams};
use super::state::AppState;
use crate::domain::MarketId;
use crate::port::outbound::store::CatalogStore;

/// `POST /mercados`
pub async fn create<S: CatalogStore>(
    State(state): State<AppState<S>>,
    JsonBody(body): JsonBody<MarketRequest>,
) -> Result<(StatusCode, Json<Created>), ApiError> {
    debug!(?body, "Market creation requested");
    let id = state
        .markets
        .create(body.name, body.address)
        .await
        .map_err(|e| ApiError::from_service(e, "Erro ao cadastrar mercado."))?;
    Ok((StatusCode::CREATED, Json(Created::new(id.get()))))
}

/// `GET /mercados`
pub async fn list<S: CatalogStore>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<MarketResponse>>, ApiError> {
    let markets = state
        .markets
        .list()
        .await
        .map_err(|e| ApiError::from_service(e, "Erro ao listar mercados."))?;
    debug!(count = markets.len(), "Markets listed");
    Ok(Json(markets.into_iter().map(MarketResponse::from).collect()))
}

/// `GET /mercados/:id`
pub async fn get<S: CatalogStore>(
    State(state): State<AppState<S>>,
    PathParams(id): PathParams<String>,
) -> Result<Json<MarketDetailsResponse>, ApiError> {
    let id: MarketId = parse_id(&id)?;
    let details = state
        .markets
        .get(id)
        .await
        .map_err(|e| ApiError::from_service(e, "Erro ao buscar mercado pelo ID."))?;
    Ok(Json(details.into()))
}

/// `PUT /mercados/:id`
pub async fn update<S: CatalogStore>(
    State(state): State<AppState<S>>,
    PathParams(id): PathParams<String>,
    JsonBody(body): JsonBody<MarketRequest>,
) -> Result<Json<Acknowledged>, ApiError> {
    let id: MarketId = parse_id(&id)?;
    state
        .markets
        .update(id, body.name, body.address)
        .await
        .map_err(|e| ApiError::from_service(e, "Erro ao atualizar mercado."))?;
    Ok(Json(Acknowledged::new("Mercado atualizado com sucesso.")))
}

/// `DELETE /mercados/:id`
pub async fn delete<S: CatalogStore>(
    State(state): State<AppState<S>>,
    PathParams(id): PathParams<String>,
) -> Result<StatusCode, ApiError> {
    let id: MarketId = parse_id(&id)?;
    state
        .markets
        .delete(id)
        .await
        .map_err(|e| ApiError::from_service(e, "Erro ao deletar mercado."))?;
    Ok(StatusCode::NO_CONTENT)
}
