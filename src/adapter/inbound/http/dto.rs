//! Wire shapes for the HTTP API.
//!
//! Field names on the wire are the Portuguese ones callers already use.
//! Request fields are optional so that a missing field reaches validation
//! and gets the same 400 message as a blank one; unknown fields are
//! rejected outright.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::application::{MovementDraft, ProductDraft};
use crate::domain::{Market, MarketDetails, Movement, Product};

/// Body of `POST /mercados` and `PUT /mercados/:id`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MarketRequest {
    #[serde(rename = "nome")]
    pub name: Option<String>,
    #[serde(rename = "endereco")]
    pub address: Option<String>,
}

/// Body of `POST /mercados/:id/produtos`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductRequest {
    #[serde(rename = "nome")]
    pub name: Option<String>,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
    #[serde(rename = "preco")]
    pub price: Option<f64>,
    #[serde(rename = "quantidade")]
    pub quantity: Option<i32>,
}

impl From<ProductRequest> for ProductDraft {
    fn from(req: ProductRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            price: req.price,
            quantity: req.quantity,
        }
    }
}

/// Body of `POST /mercados/:id/produtos/:produto_id/movimentacoes`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MovementRequest {
    #[serde(rename = "tipo")]
    pub kind: Option<String>,
    #[serde(rename = "quantidade")]
    pub quantity: Option<i32>,
    #[serde(rename = "data_movimentacao")]
    pub date: Option<String>,
}

impl From<MovementRequest> for MovementDraft {
    fn from(req: MovementRequest) -> Self {
        Self {
            kind: req.kind,
            quantity: req.quantity,
            date: req.date,
        }
    }
}

/// `201` body for every creation.
#[derive(Debug, Serialize)]
pub struct Created {
    pub sucesso: bool,
    pub id: i32,
}

impl Created {
    #[must_use]
    pub fn new(id: i32) -> Self {
        Self { sucesso: true, id }
    }
}

/// `200` body acknowledging an update.
#[derive(Debug, Serialize)]
pub struct Acknowledged {
    pub sucesso: bool,
    pub mensagem: &'static str,
}

impl Acknowledged {
    #[must_use]
    pub fn new(mensagem: &'static str) -> Self {
        Self {
            sucesso: true,
            mensagem,
        }
    }
}

/// Body of every 4xx/5xx response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub erro: String,
}

/// Element of `GET /mercados`.
#[derive(Debug, Serialize)]
pub struct MarketResponse {
    pub id: i32,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "endereco")]
    pub address: String,
}

impl From<Market> for MarketResponse {
    fn from(market: Market) -> Self {
        Self {
            id: market.id.get(),
            name: market.name,
            address: market.address,
        }
    }
}

/// Body of `GET /mercados/:id`.
#[derive(Debug, Serialize)]
pub struct MarketDetailsResponse {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "endereco")]
    pub address: String,
}

impl From<MarketDetails> for MarketDetailsResponse {
    fn from(details: MarketDetails) -> Self {
        Self {
            name: details.name,
            address: details.address,
        }
    }
}

/// Element of `GET /mercados/:id/produtos`.
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: i32,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
    #[serde(rename = "preco")]
    pub price: f64,
    #[serde(rename = "quantidade")]
    pub quantity: i32,
    #[serde(rename = "mercado_id")]
    pub market_id: i32,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.get(),
            name: product.name,
            description: product.description,
            price: product.price,
            quantity: product.quantity,
            market_id: product.market_id.get(),
        }
    }
}

/// Element of `GET /mercados/:id/produtos/:produto_id/movimentacoes`.
#[derive(Debug, Serialize)]
pub struct MovementResponse {
    #[serde(rename = "tipo")]
    pub kind: String,
    #[serde(rename = "quantidade")]
    pub quantity: i32,
    #[serde(rename = "data_movimentacao")]
    pub date: NaiveDate,
}

impl From<Movement> for MovementResponse {
    fn from(movement: Movement) -> Self {
        Self {
            kind: movement.kind,
            quantity: movement.quantity,
            date: movement.date,
        }
    }
}
